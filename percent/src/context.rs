use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Precision rules applied when a raw percentage is divided by 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    pub significant_digits: u32,
    pub rounding: RoundingStrategy,
}

/// 16 significant digits with banker's rounding, the `rust_decimal`
/// rendition of a DECIMAL64 context. Callers needing other precision pass
/// their own context to [`crate::Percent::with_context`].
pub const DEFAULT: DecimalContext = DecimalContext {
    significant_digits: 16,
    rounding: RoundingStrategy::MidpointNearestEven,
};

impl Default for DecimalContext {
    fn default() -> Self {
        DEFAULT
    }
}

impl DecimalContext {
    pub(crate) fn apply(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.significant_digits, self.rounding)
            .unwrap_or(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_context_keeps_16_significant_digits() {
        let third = dec!(1) / dec!(3);
        assert_eq!(dec!(0.3333333333333333), DEFAULT.apply(third));
    }

    #[test]
    fn default_context_leaves_short_values_untouched() {
        assert_eq!(dec!(0.03), DEFAULT.apply(dec!(0.03)));
    }

    #[test]
    fn custom_context_rounds_to_requested_digits() {
        let context = DecimalContext {
            significant_digits: 2,
            rounding: RoundingStrategy::MidpointNearestEven,
        };
        assert_eq!(dec!(0.33), context.apply(dec!(1) / dec!(3)));
    }
}
