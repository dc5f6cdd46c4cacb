use super::{
    parse::extract_text,
    types::{InboundEvent, ModelRequest, OutboundResponse},
};
use crate::{
    Result,
    backend::{InferenceBackend, InvocationRequest},
};
use serde_json::value::RawValue;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns one inbound event into one endpoint invocation.
///
/// Holds only read-only state, so a single instance serves any number of
/// concurrent invocations. Faults are never converted into responses: the
/// caller sees every parse, backend and decoding error.
#[derive(Clone)]
pub struct RequestForwarder {
    backend: Arc<dyn InferenceBackend>,
    endpoint_name: String,
}

impl RequestForwarder {
    pub fn new(backend: Arc<dyn InferenceBackend>, endpoint_name: impl Into<String>) -> Self {
        Self {
            backend,
            endpoint_name: endpoint_name.into(),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    pub async fn handle(&self, event: InboundEvent) -> Result<OutboundResponse> {
        info!(
            "Received event: {}",
            serde_json::to_string_pretty(&event)?
        );

        let text = extract_text(event.body_str()?)?;
        info!("Extracted text: {}", text);

        let model_request = ModelRequest::from_text(text);
        let request = InvocationRequest::json(&model_request)?;

        let response = self.backend.invoke(&self.endpoint_name, request).await?;
        info!(
            "Endpoint {} responded: content_type={:?}, {} bytes",
            self.endpoint_name,
            response.content_type,
            response.body.len()
        );
        debug!("Raw endpoint response: {}", response.body_text());

        // Validated as JSON but kept as raw text: key order and number
        // precision stay exactly as the endpoint wrote them.
        let result: Box<RawValue> = serde_json::from_slice(&response.body)?;
        info!("Inference result: {}", result.get());

        Ok(OutboundResponse::ok(&result))
    }
}
