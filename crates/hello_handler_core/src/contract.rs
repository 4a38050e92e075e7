use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HandlerError;

pub const HELLO_MESSAGE: &str = "Hello from Lambda!";
pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const QUERY_PARAMS_ATTRIBUTE: &str = "query_params";

/// Triggering request for one invocation.
///
/// The payload is kept whole and unvalidated: objects, arrays, strings and
/// `null` are all events. Only `query_params` is ever looked up, and only an
/// object can carry it. A `query_params` key holding `null` is present; the
/// attribute exists, it just has no value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Event {
    payload: Value,
}

impl Event {
    pub fn from_value(payload: Value) -> Self {
        Self { payload }
    }

    pub fn with_query_params(query_params: Value) -> Self {
        let mut attributes = Map::new();
        attributes.insert(QUERY_PARAMS_ATTRIBUTE.to_string(), query_params);
        Self::from_value(Value::Object(attributes))
    }

    /// Looks up a top-level attribute. Non-object payloads have none.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.payload.as_object()?.get(name)
    }

    pub fn query_params(&self) -> Option<&Value> {
        self.attribute(QUERY_PARAMS_ATTRIBUTE)
    }

    pub fn as_value(&self) -> &Value {
        &self.payload
    }
}

impl From<Value> for Event {
    fn from(payload: Value) -> Self {
        Self::from_value(payload)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

/// Per-invocation metadata supplied by the host runtime.
///
/// The handler never reads individual fields; the record is logged whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvocationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoked_function_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xray_trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_mb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl fmt::Display for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Builds a response whose body is the JSON serialization of `payload`.
    pub fn json(status_code: u16, payload: &impl Serialize) -> Result<Self, HandlerError> {
        let body = serde_json::to_string(payload)
            .map_err(|error| HandlerError::response_serialization(error.to_string()))?;
        Ok(Self { status_code, body })
    }
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &impl Serialize) -> fmt::Result {
    let text = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}
