use crate::context;
use crate::context::DecimalContext;
use crate::locale::Displayable;
use crate::locale::Locale;
use crate::money::MonetaryAmount;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use serde::Serialize;

/// Extracts the percentage of a monetary amount, without mutating it.
pub trait MonetaryAdjuster {
    fn adjust_into<A: MonetaryAmount>(&self, amount: &A) -> A;
}

/// Adjusts monetary amounts by a fixed percentage.
///
/// The rate is divided by 100 once at construction and never changes
/// afterwards, so an instance may be shared freely across threads.
/// Negative and zero percentages are accepted and produce negative/zero
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent {
    rate: Decimal,
}

impl Percent {
    /// `3` means "3 percent"; the stored rate becomes `0.03`.
    pub fn new(percent: Decimal) -> Self {
        Self::with_context(percent, context::DEFAULT)
    }

    pub fn with_context(percent: Decimal, context: DecimalContext) -> Self {
        Self {
            rate: context.apply(percent / Decimal::ONE_HUNDRED),
        }
    }

    /// Conversion path for callers not holding a [`Decimal`]. `None` when
    /// the float has no decimal representation (NaN, infinite, out of
    /// range).
    pub fn from_f64(percent: f64) -> Option<Self> {
        Decimal::from_f64(percent).map(Self::new)
    }

    /// The effective rate, already divided by 100.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl MonetaryAdjuster for Percent {
    fn adjust_into<A: MonetaryAmount>(&self, amount: &A) -> A {
        amount.multiply(self.rate)
    }
}

impl Displayable for Percent {
    fn display_name(&self, locale: Locale) -> String {
        locale.render_percent(self.rate)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(Locale::default()))
    }
}
