//! Input shape checks shared by the role and user flows
//!
//! These run before any repository call, over raw path/query strings and
//! JSON values as received.

use serde_json::Value;
use thiserror::Error;

/// A present JSON value that is not a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is not a string")]
pub struct NotAString;

/// Parse a positive integer id from a path segment.
///
/// The trimmed value must parse completely as an integer greater than zero.
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Parse a role filter query value: ASCII digits only, no sign, no whitespace, greater than zero.
pub fn parse_role_filter(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_positive_id(raw)
}

/// The trimmed contents of a string value, if it is a string and not blank
pub fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}

/// An optional string field: absent is fine, anything present must be a string (null is not).
pub fn optional_string(value: Option<&Value>) -> Result<Option<&str>, NotAString> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(NotAString),
    }
}

/// A positive integer carried in JSON, either as a number or a string of digits
pub fn positive_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().filter(|id| *id > 0),
        Value::String(s) => parse_role_filter(s),
        _ => None,
    }
}

/// Treat an explicit JSON null the same as a missing field
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Trim a description; blank becomes absent
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
