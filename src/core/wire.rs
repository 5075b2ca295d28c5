//! serde helpers shared by the DTOs.
//!
//! The API is inconsistent about numbers: some deployments send `1.5`, others `"1.5"`.
//! These accept both and reject anything that is not a finite number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::core::conversions::millis_to_utc;

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    I64(i64),
    F64(f64),
    Str(String),
}

pub(crate) fn de_f64_from_any_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AnyNumber::deserialize(deserializer)? {
        #[allow(clippy::cast_precision_loss)]
        AnyNumber::I64(i) => Ok(i as f64),
        AnyNumber::F64(f) => Ok(f),
        AnyNumber::Str(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| {
                D::Error::custom(format!("cannot convert string {s:?} to a finite f64"))
            }),
    }
}

pub(crate) fn de_i64_from_any_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match AnyNumber::deserialize(deserializer)? {
        AnyNumber::I64(i) => Ok(i),
        #[allow(clippy::cast_possible_truncation)]
        AnyNumber::F64(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        AnyNumber::F64(f) => Err(D::Error::custom(format!(
            "cannot convert float {f} to i64"
        ))),
        AnyNumber::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("cannot convert string {s:?} to i64"))),
    }
}

pub(crate) fn de_u32_from_any_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = de_i64_from_any_number(deserializer)?;
    u32::try_from(v).map_err(|_| D::Error::custom(format!("value {v} out of range for u32")))
}

pub(crate) fn de_utc_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = de_i64_from_any_number(deserializer)?;
    millis_to_utc(millis)
        .ok_or_else(|| D::Error::custom(format!("timestamp {millis} ms is out of range")))
}
