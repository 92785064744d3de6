//! Collect (favorite) requests and their acknowledgments.

use crate::errors::CollectError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Incoming collect request
///
/// The `id` is accepted as any JSON value and never validated. Numbers
/// keep their original digits.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectRequest {
    /// Identifier of the app being collected
    pub id: Value,
}

impl CollectRequest {
    /// Create a request for the given id
    pub fn new(id: impl Into<Value>) -> Self {
        Self { id: id.into() }
    }

    /// Parse a request body.
    ///
    /// The body must be a JSON object; a missing `id` becomes `null`.
    pub fn from_slice(body: &[u8]) -> Result<Self, CollectError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(mut fields) => Ok(Self {
                id: fields.remove("id").unwrap_or(Value::Null),
            }),
            other => Err(CollectError::NotAnObject(json_kind(&other))),
        }
    }

    /// Text used when echoing the id back to the client.
    ///
    /// A top-level string is shown bare. Other values use the notation the
    /// client already parses: `None`, `True`/`False`, numbers as sent, and
    /// containers as `[1, 'a']` / `{'k': None}`.
    pub fn id_text(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => {
                let mut out = String::new();
                write_literal(&mut out, other);
                out
            }
        }
    }
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Object(fields) => write_mapping(out, fields),
    }
}

fn write_mapping(out: &mut String, fields: &Map<String, Value>) {
    out.push('{');
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write_quoted(out, key);
        out.push_str(": ");
        write_literal(out, value);
    }
    out.push('}');
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) < 0x100 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Acknowledgment returned for every accepted collect request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectResponse {
    /// Always `true`; nothing is stored so nothing can fail
    pub success: bool,

    /// Human-readable confirmation
    pub message: String,
}

impl CollectResponse {
    /// Acknowledge a request without storing anything
    pub fn acknowledge(request: &CollectRequest) -> Self {
        Self {
            success: true,
            message: format!("应用 {} 收藏成功", request.id_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_string_quoting() {
        assert_eq!(CollectRequest::new(json!(["a"])).id_text(), "['a']");
        assert_eq!(CollectRequest::new(json!(["it's"])).id_text(), "[\"it's\"]");
        assert_eq!(
            CollectRequest::new(json!(["a'b\"c"])).id_text(),
            "['a\\'b\"c']"
        );
        assert_eq!(CollectRequest::new(json!(["x\ny"])).id_text(), "['x\\ny']");
    }

    #[test]
    fn test_object_keeps_key_order() {
        let request =
            CollectRequest::from_slice(br#"{"id": {"b": 1, "a": [true, null]}}"#).unwrap();
        assert_eq!(request.id_text(), "{'b': 1, 'a': [True, None]}");
    }
}
