use rust_decimal::Decimal;
use thiserror::Error;
use water_core::calculations::common::to_currency;

/// Error returned when a string cannot be parsed as a number.
#[derive(Debug, Error)]
#[error("invalid number '{input}': {source}")]
pub struct ParseNumberError {
    input: String,
    #[source]
    source: std::num::ParseFloatError,
}

/// Normalizes input for number parsing: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a user-typed number such as `"1,250.5"`.
///
/// Logs and returns an error when the input is not a number.
pub fn parse_number(s: &str) -> Result<f64, ParseNumberError> {
    normalize_number_input(s).parse().map_err(|e| {
        tracing::error!(input = %s, "invalid number: {}", e);
        ParseNumberError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Inserts `,` between every group of three digits of an integer string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Formats a quantity rounded to a whole number with thousands separators,
/// e.g. `30,000,000`.
pub fn format_whole(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = format!("{value:.0}");
    if rounded == "-0" {
        return "0".to_string();
    }
    group_thousands(&rounded)
}

/// Formats a cent-rounded amount as `$1,234.57`.
pub fn format_decimal_currency(amount: Decimal) -> String {
    let text = format!("{amount:.2}");
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    match whole.strip_prefix('-') {
        Some(whole) => format!("-${}.{cents}", group_thousands(whole)),
        None => format!("${}.{cents}", group_thousands(whole)),
    }
}

/// Formats a dollar amount as `$1,234.57`, rounding half-up to cents.
/// Non-finite amounts are shown as "—".
pub fn format_currency(dollars: f64) -> String {
    to_currency(dollars)
        .map(format_decimal_currency)
        .unwrap_or_else(|| "—".to_string())
}
