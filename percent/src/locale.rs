use rust_decimal::Decimal;

/// Locale-aware string rendering. Implemented by any value type that can
/// name itself for a locale; one method, no inheritance hierarchy.
pub trait Displayable {
    fn display_name(&self, locale: Locale) -> String;
}

/// Percent-formatting convention of a locale: the decimal separator and
/// whether a non-breaking space precedes the percent sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    decimal_separator: char,
    space_before_sign: bool,
}

impl Locale {
    pub const EN_US: Self = Self {
        decimal_separator: '.',
        space_before_sign: false,
    };
    pub const DE_DE: Self = Self {
        decimal_separator: ',',
        space_before_sign: true,
    };
    pub const FR_FR: Self = Self {
        decimal_separator: ',',
        space_before_sign: true,
    };
    pub const SV_SE: Self = Self {
        decimal_separator: ',',
        space_before_sign: true,
    };

    /// Renders a rate already divided by 100, e.g. `0.03` as `"3%"`.
    /// Trailing zeros of the rate are trimmed before rendering.
    pub(crate) fn render_percent(&self, rate: Decimal) -> String {
        let scaled = (rate * Decimal::ONE_HUNDRED).normalize();
        let mut text = scaled.to_string();
        if self.decimal_separator != '.' {
            text = text.replace('.', &self.decimal_separator.to_string());
        }
        if self.space_before_sign {
            text.push('\u{a0}');
        }
        text.push('%');
        text
    }
}

/// Stand-in for a process default locale, kept as an explicit value rather
/// than ambient state.
impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::case;

    #[case(dec!(0.03) => "3%"       ; "whole percent")]
    #[case(dec!(0.125) => "12.5%"   ; "fractional percent")]
    #[case(dec!(0.0300) => "3%"     ; "trailing zeros trimmed")]
    #[case(dec!(0) => "0%"          ; "zero")]
    #[case(dec!(-0.05) => "-5%"     ; "negative")]
    fn render_percent_en_us(rate: Decimal) -> String {
        Locale::EN_US.render_percent(rate)
    }

    #[case(dec!(0.03) => "3\u{a0}%"      ; "whole percent")]
    #[case(dec!(0.125) => "12,5\u{a0}%"  ; "comma separator")]
    fn render_percent_de_de(rate: Decimal) -> String {
        Locale::DE_DE.render_percent(rate)
    }

    #[test]
    fn default_locale_is_en_us() {
        assert_eq!(Locale::EN_US, Locale::default());
    }
}
