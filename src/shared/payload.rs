//! Field checks shared by the creation payload validators.
//!
//! Payloads arrive as raw JSON so that an absent property and a property of
//! the wrong type stay distinguishable.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// At least one property is absent or falsy.
    Missing,
    /// Every property is present but at least one is not a string.
    InvalidType,
}

/// Absent, `null`, `false`, zero and `""` all count as "not provided".
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Extracts the string properties `keys` from `payload`.
///
/// Presence of all keys is checked before any type check, so a payload with
/// one missing and one mistyped property reports [`FieldError::Missing`].
pub fn required_strings<'a, const N: usize>(
    payload: &'a Value,
    keys: [&str; N],
) -> Result<[&'a str; N], FieldError> {
    let values = keys.map(|key| payload.get(key));

    if values.iter().any(|v| is_falsy(*v)) {
        return Err(FieldError::Missing);
    }

    let strings = values.map(|v| v.and_then(Value::as_str));
    if strings.iter().any(Option::is_none) {
        return Err(FieldError::InvalidType);
    }

    Ok(strings.map(|s| s.unwrap_or_default()))
}
