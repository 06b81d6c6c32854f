//! Typed extraction of tool inputs
//!
//! A key that is absent or `null` counts as omitted.

use serde_json::Value;

use super::ToolError;

fn field<'a>(input: &'a Value, name: &str) -> Option<&'a Value> {
    input.get(name).filter(|value| !value.is_null())
}

pub(crate) fn required_str<'a>(input: &'a Value, name: &str) -> Result<&'a str, ToolError> {
    match field(input, name) {
        Some(value) => value
            .as_str()
            .ok_or_else(|| ToolError::invalid(name, "expected a string")),
        None => Err(ToolError::MissingArgument { name: name.to_string() }),
    }
}

pub(crate) fn optional_str<'a>(input: &'a Value, name: &str) -> Result<Option<&'a str>, ToolError> {
    field(input, name)
        .map(|value| value.as_str().ok_or_else(|| ToolError::invalid(name, "expected a string")))
        .transpose()
}

pub(crate) fn optional_usize(input: &Value, name: &str, default: usize) -> Result<usize, ToolError> {
    match field(input, name) {
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| ToolError::invalid(name, "expected a non-negative integer")),
        None => Ok(default),
    }
}

pub(crate) fn optional_bool(input: &Value, name: &str, default: bool) -> Result<bool, ToolError> {
    match field(input, name) {
        Some(value) => value
            .as_bool()
            .ok_or_else(|| ToolError::invalid(name, "expected true or false")),
        None => Ok(default),
    }
}
