use crate::Result;
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Payload handed to an inference endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub body: Vec<u8>,
    pub content_type: String,
    pub accept: String,
}

/// Raw answer of an inference endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResponse {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl InvocationRequest {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self {
            body: serde_json::to_vec(value)?,
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
        })
    }
}

impl InvocationResponse {
    pub fn new(body: impl Into<Vec<u8>>, content_type: Option<String>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
