//! Lenient deserializers for fields that clients send in more than one shape.
//!
//! Admin forms post numbers as strings and tags as a single comma-delimited
//! string. These helpers accept both shapes at the JSON boundary so the rest
//! of the code only sees typed values.
//!
//! Usage:
//! ```ignore
//! #[derive(Deserialize)]
//! struct Example {
//!     #[serde(default, deserialize_with = "papyr_core::serde_util::tags")]
//!     tags: Vec<String>,
//! }
//! ```

use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::tags::split_tags;

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr<T> {
    Number(T),
    Text(String),
}

/// Tags as either `["a", "b"]` or `"a, b"`.
pub fn tags<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(de)? {
        None => Vec::new(),
        Some(TagsRepr::Text(raw)) => split_tags(&raw),
        // A list element may itself hold commas; the stored column could not
        // tell it apart from two tags.
        Some(TagsRepr::List(list)) => list.iter().flat_map(|tag| split_tags(tag)).collect(),
    };
    Ok(tags)
}

/// A number sent either as a JSON number or a numeric string.
pub fn number<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    T::Err: std::fmt::Display,
{
    Ok(optional_number(de)?.unwrap_or_default())
}

/// Like [`number`], but `null` and `""` mean "absent".
pub fn optional_number<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: std::fmt::Display,
{
    match Option::<NumberRepr<T>>::deserialize(de)? {
        None => Ok(None),
        Some(NumberRepr::Number(value)) => Ok(Some(value)),
        Some(NumberRepr::Text(raw)) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<T>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid number '{raw}': {e}")))
        }
    }
}

/// A finite `f64`, from a number or a numeric string. Absent means `0.0`.
pub fn float<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_float(de)?.unwrap_or_default())
}

/// Like [`optional_number`] for `f64`, rejecting `NaN` and infinities.
pub fn optional_float<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_number::<D, f64>(de)? {
        Some(value) if !value.is_finite() => Err(D::Error::custom(format!(
            "invalid number '{value}': must be finite"
        ))),
        value => Ok(value),
    }
}
