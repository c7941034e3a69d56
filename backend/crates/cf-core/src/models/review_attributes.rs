use crate::{ValidationErrors, validate_review};

use serde::{Deserialize, Deserializer, Serialize, de};

/// The only review fields a client may set.
///
/// Any other key in the submitted payload is dropped during deserialization,
/// so ownership fields (`project_id`, `user_id`, ...) can never be injected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewAttributes {
    pub name: String,
    pub remark: String,
    #[serde(deserialize_with = "deserialize_stars")]
    pub stars: Option<i32>,
}

impl ReviewAttributes {
    pub fn validate(&self) -> ValidationErrors {
        validate_review(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStars {
    Number(i64),
    Text(String),
}

/// Stars arrive as a JSON integer or as form text such as `"5"`.
/// Blank text and `null` mean "not provided"; range is checked by validation.
fn deserialize_stars<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawStars>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawStars::Number(n)) => n,
        Some(RawStars::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("stars is not a whole number: {}", trimmed)))?
        }
    };

    i32::try_from(value)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("stars is out of range: {}", value)))
}
