//! Serde helpers for custom deserialization.
//!
//! Proxmox is inconsistent about numbers: the same field may arrive as `1.5`,
//! `"1.5"` or `null` depending on the endpoint and release. These helpers
//! accept all three. `null`, absent and blank values become zero; a string
//! that is not a number is a decode error.

use serde::{Deserialize, Deserializer, de::Error};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: Error>(self) -> Result<Option<f64>, E> {
        match self {
            NumberOrString::Unsigned(n) => Ok(Some(n as f64)),
            NumberOrString::Float(f) => Ok(Some(f)),
            NumberOrString::Text(s) => parse_text(&s),
        }
    }

    fn into_u64<E: Error>(self) -> Result<Option<u64>, E> {
        match self {
            NumberOrString::Unsigned(n) => Ok(Some(n)),
            NumberOrString::Float(f) => Ok(Some(float_to_u64(f))),
            NumberOrString::Text(s) => match s.trim().parse::<u64>() {
                Ok(n) => Ok(Some(n)),
                Err(_) => Ok(parse_text::<f64, E>(&s)?.map(float_to_u64)),
            },
        }
    }
}

/// Blank strings count as absent; anything else must parse.
fn parse_text<T, E>(s: &str) -> Result<Option<T>, E>
where
    T: FromStr,
    E: Error,
{
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| E::custom(format!("expected a number, found \"{}\"", s)))
}

// Negative and fractional values only show up where Proxmox reports floats.
fn float_to_u64(f: f64) -> u64 {
    if f > 0.0 { f as u64 } else { 0 }
}

/// Deserialize a float from a number or a numeric string.
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => Ok(value.into_f64()?.unwrap_or_default()),
        None => Ok(0.0),
    }
}

/// Deserialize an unsigned integer from a number or a numeric string.
///
/// Integers are taken as-is, without a detour through `f64`.
pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => Ok(value.into_u64()?.unwrap_or_default()),
        None => Ok(0),
    }
}

/// Deserialize a list of floats where each element may be a numeric string.
pub fn f64_vec_lenient<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<NumberOrString>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.into_f64().map(Option::unwrap_or_default))
        .collect()
}
