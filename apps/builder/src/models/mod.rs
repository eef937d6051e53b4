pub mod candidate;
pub mod manual;

use std::collections::HashMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit JSON `null` like a missing field. The extractor fills
/// unknown values with `null`, which plain `#[serde(default)]` rejects.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `6`, `6.5`, `"6"` or `"6+"`; anything else becomes `None`.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .trim_end_matches('+')
            .trim()
            .parse::<f64>()
            .ok(),
        _ => None,
    })
}

/// Reads per-overlap values keyed by position. Accepts a map with numeric
/// string keys (`{"0": "prn"}`) or a plain array (`["prn"]`). `null`
/// entries, and a `null` or missing field, are dropped.
pub(crate) fn positional_map<'de, D, T>(deserializer: D) -> Result<HashMap<usize, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries: Vec<(usize, Value)> = match Option::<Value>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(key, value)| key.trim().parse().ok().map(|position| (position, value)))
            .collect(),
        Some(Value::Array(list)) => list.into_iter().enumerate().collect(),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "expected a map or array keyed by overlap position, got {other}"
            )))
        }
    };

    entries
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(position, value)| {
            T::deserialize(value)
                .map(|parsed| (position, parsed))
                .map_err(D::Error::custom)
        })
        .collect()
}
