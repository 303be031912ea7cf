use derive_more::Display;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use std::rc::Rc;

/// Code of a currency, e.g. `EUR`. Cheap to clone; no validation is
/// performed on the code itself.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Display)]
pub struct CurrencyUnit {
    code: Rc<str>,
}

impl From<&str> for CurrencyUnit {
    fn from(code: &str) -> Self {
        Self { code: code.into() }
    }
}

impl From<String> for CurrencyUnit {
    fn from(code: String) -> Self {
        Self { code: code.into() }
    }
}

impl Serialize for CurrencyUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(code.into())
    }
}

/// Minimal surface an amount type must expose for percentage adjustment.
#[mockall::automock]
pub trait MonetaryAmount {
    fn value(&self) -> Decimal;
    fn currency(&self) -> CurrencyUnit;
    /// Returns a new amount of the same currency scaled by `factor`.
    fn multiply(&self, factor: Decimal) -> Self;
}

/// Plain (value, currency) pair with decimal multiplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub value: Decimal,
    pub currency: CurrencyUnit,
}

impl Money {
    pub fn new(value: Decimal, currency: impl Into<CurrencyUnit>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

impl MonetaryAmount for Money {
    fn value(&self) -> Decimal {
        self.value
    }

    fn currency(&self) -> CurrencyUnit {
        self.currency.clone()
    }

    /// Overflow in the underlying decimal multiply propagates to the caller.
    fn multiply(&self, factor: Decimal) -> Self {
        Self {
            value: self.value * factor,
            currency: self.currency.clone(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.value)
    }
}
