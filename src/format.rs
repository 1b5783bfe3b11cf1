// 💵 Number Formatting - thousands separators, two decimals, currency
// 1234567.891 → "1,234,567.89", with currency "$1,234,567.89"
// Figures that overflowed print as "inf" / "nan".

/// Format with a comma thousands separator and exactly two decimals
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to "0.00" and must not keep its sign
    let negative = value.is_sign_negative() && fixed.chars().any(|c| c != '0' && c != '.');
    let sign = if negative { "-" } else { "" };

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Currency symbol followed by the grouped two-decimal amount
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(value))
}

/// Overflowed figures print as "inf" / "-inf" / "nan", never with decimals
fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

/// Shortest round-trip text of a float: integral values keep ".0",
/// and below 1e-4 or from 1e16 up it switches to "1.5e+16" / "1e-05".
pub fn float_repr(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let debug = format!("{:?}", value);
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Rate shown as the entered number, plus "%"
pub fn format_rate(rate: f64) -> String {
    format!("{}%", float_repr(rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_have_no_separator() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(2.0), "2.00");
        assert_eq!(format_number(87.5), "87.50");
        assert_eq!(format_number(999.999), "1,000.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_number(1000.0), "1,000.00");
        assert_eq!(format_number(5087.5), "5,087.50");
        assert_eq!(format_number(34567.0), "34,567.00");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(100000000.0), "100,000,000.00");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_number(1100.0 / 24.0), "45.83");
        assert_eq!(format_number(5087.5 / 6.0), "847.92");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-1234.5), "-1,234.50");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency("$", 1100.0), "$1,100.00");
        assert_eq!(format_currency("€", 45.833), "€45.83");
    }

    #[test]
    fn test_overflowed_figures_have_no_decimals() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_currency("$", f64::INFINITY), "$inf");
        assert_eq!(format_currency("$", 1e308 * 10.0), "$inf");
    }

    #[test]
    fn test_rate_keeps_entered_precision() {
        assert_eq!(format_rate(5.0), "5.0%");
        assert_eq!(format_rate(5.4), "5.4%");
        assert_eq!(format_rate(3.25), "3.25%");
        assert_eq!(format_rate(0.0), "0.0%");
        assert_eq!(format_rate(100.0), "100.0%");
    }

    #[test]
    fn test_rate_switches_to_exponent_for_extremes() {
        assert_eq!(format_rate(1e16), "1e+16%");
        assert_eq!(format_rate(1.5e16), "1.5e+16%");
        assert_eq!(format_rate(1234567890123456.0), "1234567890123456.0%");
        assert_eq!(format_rate(0.00001), "1e-05%");
        assert_eq!(format_rate(0.0001), "0.0001%");
        assert_eq!(format_rate(f64::INFINITY), "inf%");
    }
}
