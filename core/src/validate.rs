//! Parameter validation performed before any request is built.

use serde_json::Value;

use crate::error::ApiError;

/// Check a serialized parameter object against the operation's field lists.
///
/// A missing object, or one that is not a JSON object, counts as every
/// required field missing. `null` values count as absent. Missing names are
/// reported in `required` order. Keys outside `allowed` are rejected.
pub fn validate_params(
    params: Option<&Value>,
    required: &[&str],
    allowed: &[&str],
) -> Result<(), ApiError> {
    let fields = params.and_then(Value::as_object);

    let missing: Vec<String> = required
        .iter()
        .filter(|name| {
            fields
                .and_then(|map| map.get(**name))
                .map_or(true, Value::is_null)
        })
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingParameters(missing));
    }

    if let Some(map) = fields {
        let mut unexpected: Vec<String> = map
            .iter()
            .filter(|(key, value)| !value.is_null() && !allowed.contains(&key.as_str()))
            .map(|(key, _)| key.clone())
            .collect();
        if !unexpected.is_empty() {
            unexpected.sort();
            return Err(ApiError::UnexpectedParameters(unexpected));
        }
    }

    Ok(())
}
