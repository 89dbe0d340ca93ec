//! Lenient handling of raw numeric fields from upstream records
//!
//! Upstream snapshots may carry numbers, numeric strings, nulls, or junk in
//! amount fields. Everything that is not a usable non-negative finite number
//! ends up as 0 before it reaches any arithmetic.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Clamp an amount into the domain the allocator works in
///
/// NaN, infinities and negative values become 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a user- or upstream-supplied amount string
///
/// Currency symbols, whitespace and thousands separators are dropped
/// (e.g. "₱20,000.50"); the rest must be a plain number. Returns `None`
/// otherwise.
pub fn parse(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !(c.is_whitespace() || *c == ',' || is_currency_symbol(*c)))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_currency_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !matches!(c, '-' | '+' | '.')
}

/// Serde helper for amount fields: numbers, numeric strings, null and
/// anything else (read as 0)
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawAmount::Number(n)) => n,
        Some(RawAmount::Text(s)) => parse(&s).unwrap_or(0.0),
        Some(RawAmount::Other(_)) | None => 0.0,
    };
    Ok(sanitize(value))
}
