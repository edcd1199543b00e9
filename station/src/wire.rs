//! Lenient deserializers for payloads produced by the Lua host.
//!
//! The host encodes numbers as doubles and empty tables as `[]`, so the
//! strict serde defaults would reject otherwise valid snapshots.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept any integer-compatible JSON number that fits in a `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
    }
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(float as u32);
    }
    Err(D::Error::custom("expected non-negative integer-compatible number"))
}

/// Remaining seconds: fractional values round up, negative values clamp to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn seconds_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    let Some(float) = number.as_f64().filter(|f| f.is_finite()) else {
        return Err(D::Error::custom("expected finite number"));
    };
    Ok(float.ceil().clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// A keyed map that may arrive as `{}` or, when empty, as `[]`.
pub(crate) fn lua_map<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) if items.is_empty() => Ok(BTreeMap::new()),
        Value::Null => Ok(BTreeMap::new()),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected object or empty array")),
    }
}
