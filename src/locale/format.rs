use super::Locale;

const NBSP: char = '\u{a0}';
const MINUS_SIGN: char = '\u{2212}';

/// Format a currency value with two decimals in the locale's own currency.
///
/// `en`: `$1,234.56`, `-$1,234.56`
/// `no`: `1 234,56 kr`, `−1 234,56 kr` (no-break spaces, U+2212 minus)
pub fn format_currency(locale: Locale, value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    match locale {
        Locale::English => {
            let sign = if negative { "-" } else { "" };
            format!("{sign}${}.{cents}", group_thousands(units, ','))
        }
        Locale::Norwegian => {
            let mut out = String::new();
            if negative {
                out.push(MINUS_SIGN);
            }
            out.push_str(&group_thousands(units, NBSP));
            out.push(',');
            out.push_str(cents);
            out.push(NBSP);
            out.push_str("kr");
            out
        }
    }
}

/// Percent readout as shown next to the rate sliders, e.g. `7.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_groups_with_commas_and_prefixes_dollar() {
        assert_eq!(format_currency(Locale::English, 21_053.158), "$21,053.16");
        assert_eq!(format_currency(Locale::English, 0.0), "$0.00");
        assert_eq!(format_currency(Locale::English, 999.999), "$1,000.00");
        assert_eq!(format_currency(Locale::English, -1_234_567.5), "-$1,234,567.50");
    }

    #[test]
    fn norwegian_uses_nbsp_grouping_comma_decimals_and_kr_suffix() {
        assert_eq!(
            format_currency(Locale::Norwegian, 21_053.158),
            "21\u{a0}053,16\u{a0}kr"
        );
        assert_eq!(
            format_currency(Locale::Norwegian, -1_500.0),
            "\u{2212}1\u{a0}500,00\u{a0}kr"
        );
        assert_eq!(format_currency(Locale::Norwegian, 12.0), "12,00\u{a0}kr");
    }

    #[test]
    fn negative_amounts_that_round_to_zero_drop_the_sign() {
        assert_eq!(format_currency(Locale::English, -0.001), "$0.00");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_currency(Locale::English, f64::NAN), "NaN");
        assert_eq!(format_currency(Locale::Norwegian, f64::INFINITY), "∞");
        assert_eq!(format_currency(Locale::English, f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(7.0), "7.0%");
        assert_eq!(format_percent(2.34), "2.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
