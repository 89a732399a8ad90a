//! JSON decoding helpers for response bodies.
//!
//! With the `tracing` feature enabled, fields the target type does not capture are logged as
//! warnings, which is how changes in the congress.gov payloads show up before they break
//! anything.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes `value` into `T`, logging unknown fields when `tracing` is enabled.
///
/// Unknown fields never fail decoding. A failure logs the JSON path that could not be decoded
/// together with the value found there.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "decoding response body");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let decoded: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let raw = original.to_string();
        let de = &mut serde_json::Deserializer::from_str(&raw);
        if let Err(path_err) = serde_path_to_error::deserialize::<_, T>(de) {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %format_value(lookup_value(&original, &path)),
                error = %path_err.inner(),
                "response body failed to decode"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

/// Pass-through decoding when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Finds the value at a `serde_ignored` or `serde_path_to_error` path.
///
/// `?` segments (Option wrappers) are skipped. Indices may be written `items.0` or `items[0]`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in path_segments(path) {
        if segment == "?" {
            continue;
        }

        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Splits `congress.sessions[1].chamber` into `["congress", "sessions", "1", "chamber"]`.
#[cfg(feature = "tracing")]
fn path_segments(path: &str) -> Vec<String> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
