//! Lenient decoding for monetary input.
//!
//! Clients submit `target_amount` either as a JSON number or as the raw text
//! of a form field. Blank text and `null` both mean "not provided".

use serde::{Deserialize, Deserializer, de};

/// Largest accepted amount, in dollars. Keeps every value exactly
/// representable in cents.
pub const MAX_TARGET_AMOUNT: f64 = 10_000_000_000_000.0;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn check_bounds<E: de::Error>(value: f64) -> Result<f64, E> {
    if !value.is_finite() {
        return Err(E::custom("target_amount must be finite"));
    }
    if value.abs() > MAX_TARGET_AMOUNT {
        return Err(E::custom(format!(
            "target_amount must not exceed {}",
            MAX_TARGET_AMOUNT
        )));
    }
    Ok(value)
}

/// Deserialize an optional amount from a number, a numeric string, `""` or `null`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(RawAmount::Number(value)) => check_bounds(value).map(Some),
        Some(RawAmount::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }

            let value: f64 = trimmed.replace(',', "").parse().map_err(|_| {
                de::Error::custom(format!("target_amount is not a number: {}", trimmed))
            })?;

            check_bounds(value).map(Some)
        }
    }
}

/// Like [`deserialize_amount`], but distinguishes "key present" from "key absent".
///
/// Use with `#[serde(default)]` so an absent key stays `None` while an explicit
/// blank becomes `Some(None)`.
pub fn deserialize_amount_patch<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_amount(deserializer).map(Some)
}
