//! Percentage adjustment for monetary amounts.
//!
//! [`Percent`] stores a rate already divided by 100, computed once at
//! construction, and applies it to any [`MonetaryAmount`]: 10% of `EUR 2.35`
//! is `EUR 0.235`. The stored rate renders as a locale-formatted percentage
//! through [`Displayable`].

pub mod context;
mod locale;
mod money;
mod percent;

pub use crate::context::DecimalContext;
pub use crate::locale::Displayable;
pub use crate::locale::Locale;
pub use crate::money::CurrencyUnit;
pub use crate::money::MockMonetaryAmount;
pub use crate::money::MonetaryAmount;
pub use crate::money::Money;
pub use crate::percent::MonetaryAdjuster;
pub use crate::percent::Percent;
