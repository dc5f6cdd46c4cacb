use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, value::RawValue};
use std::collections::BTreeMap;

pub const INPUT_LABEL: &str = "Input";
pub const INPUT_TYPE_TEXT: &str = "text";

/// HTTP request as proxied into the function by the routing layer.
///
/// Only `body` is read; the other fields are logged and may hold any JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    /// Anything else the gateway sends along (request context, query
    /// parameters, ...). Kept so the received event can be logged whole.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InboundEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(body.into())),
            ..Default::default()
        }
    }

    /// The raw body string. Absent or null is `MissingBody`; any other
    /// non-string JSON is `MalformedBody`.
    pub fn body_str(&self) -> Result<&str> {
        match &self.body {
            None | Some(Value::Null) => Err(Error::MissingBody),
            Some(Value::String(body)) => Ok(body),
            Some(other) => Err(Error::malformed_body(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub inputs: Vec<ModelInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    pub label: String,
    pub content: String,
    #[serde(rename = "type")]
    pub input_type: String,
}

impl ModelRequest {
    /// Single text input labelled `Input`.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            inputs: vec![ModelInput {
                label: INPUT_LABEL.to_string(),
                content: content.into(),
                input_type: INPUT_TYPE_TEXT.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl OutboundResponse {
    /// 200 response carrying `result` exactly as the endpoint produced it.
    pub fn ok(result: &RawValue) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());

        Self {
            status_code: 200,
            headers,
            body: result.get().to_string(),
        }
    }
}
