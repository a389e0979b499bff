//! Human-readable number formatting for the operator report.

const GROUP_SEPARATOR: char = ',';

/// Formats an integer with `,` thousands separators.
pub fn format_thousands(value: i64) -> String {
    group_numeric(&value.to_string())
}

/// Shortest representation of `value` with its integer part grouped.
///
/// `2000.0` renders as `2,000` and `2000.5` as `2,000.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    group_numeric(&value.to_string())
}

/// Rounds `value` to `decimals` places and groups the integer part with `,`.
///
/// Non-finite values are rendered as `inf`, `-inf` or `NaN`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    group_numeric(&format!("{:.*}", decimals, value))
}

fn group_numeric(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + integer.len() / 3);
    out.push_str(sign);
    let len = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
