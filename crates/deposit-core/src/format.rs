//! Display formatters used in validation messages and reports.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum fraction digits shown for currency amounts.
const CURRENCY_FRACTION_DIGITS: u32 = 3;

/// Formats a dollar amount with thousands separators: `10000.0 → "$10,000"`.
///
/// At most three fraction digits are kept (ties away from zero) and
/// trailing zeros are dropped, so `1234.5 → "$1,234.5"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${}", group_number(value))
}

/// Magnitude from which numbers render in exponent form (`1e+21`).
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Smallest magnitude that still renders in plain decimal form.
const SMALL_THRESHOLD: f64 = 1e-6;

/// Formats a percentage with exactly two decimals: `1.2 → "1.20%"`.
///
/// Negative input keeps its sign even when it rounds to zero
/// (`-0.001 → "-0.00%"`), so a rejected rate never prints as an accepted one.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{}%", describe_number(value));
    }
    match Decimal::from_f64_retain(value.abs()) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}{rounded}%")
        }
        None => format!("{}%", describe_number(value)),
    }
}

/// Formats a month count: `24.0 → "24 months"`.
#[must_use]
pub fn format_months(value: f64) -> String {
    format!("{} months", describe_number(value))
}

/// Renders a raw number the way it was received.
///
/// Whole values print without a fraction (`2.0 → "2"`), non-finite values
/// print as `NaN`, `Infinity` or `-Infinity`, and very large or very small
/// magnitudes switch to exponent form (`1e21 → "1e+21"`, `1e-7 → "1e-7"`).
#[must_use]
pub fn describe_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_THRESHOLD || (magnitude != 0.0 && magnitude < SMALL_THRESHOLD) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{value}")
}

fn group_number(value: f64) -> String {
    let Some(d) = Decimal::from_f64(value) else {
        return describe_number(value);
    };
    let text = d
        .round_dp_with_strategy(CURRENCY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
