use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::collections::HashMap;
use tracing::debug;

/// A model-serving endpoint that can be invoked by name.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn invoke(
        &self,
        endpoint_name: &str,
        request: InvocationRequest,
    ) -> Result<InvocationResponse>;
}

/// Invokes endpoints over the runtime HTTP API:
/// `POST {base_url}/endpoints/{name}/invocations`.
pub struct HttpInferenceBackend {
    client: reqwest::Client,
    base_url: String,
    headers: HashMap<String, String>,
}

impl HttpInferenceBackend {
    pub fn new(config: BackendConfig) -> Self {
        // No request timeout: the surrounding environment owns the deadline.
        let client = reqwest::Client::new();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: config.headers,
        }
    }

    fn invocation_url(&self, endpoint_name: &str) -> String {
        format!("{}/endpoints/{}/invocations", self.base_url, endpoint_name)
    }
}

#[async_trait]
impl InferenceBackend for HttpInferenceBackend {
    async fn invoke(
        &self,
        endpoint_name: &str,
        request: InvocationRequest,
    ) -> Result<InvocationResponse> {
        let url = self.invocation_url(endpoint_name);
        debug!("Invoking endpoint {} at {}", endpoint_name, url);

        let mut req_builder = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, request.content_type)
            .header(ACCEPT, request.accept)
            .body(request.body);

        for (key, value) in &self.headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::backend(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        debug!(
            "Endpoint {} answered {} with {} bytes",
            endpoint_name,
            status,
            body.len()
        );

        Ok(InvocationResponse::new(body.to_vec(), content_type))
    }
}
