use async_trait::async_trait;
use inference_forwarder::{
    Error, Result,
    backend::{InferenceBackend, InvocationRequest, InvocationResponse},
};
use std::sync::{Arc, Mutex};

/// Recording backend that answers from a queue of canned bodies
#[derive(Debug)]
pub struct MockInferenceBackend {
    pub responses: Arc<Mutex<Vec<Vec<u8>>>>,
    pub requests: Arc<Mutex<Vec<(String, InvocationRequest)>>>,
    pub error: Option<(u16, String)>,
}

impl MockInferenceBackend {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses
            .into_iter()
            .map(|r| r.as_bytes().to_vec())
            .collect();
        self
    }

    pub fn with_error(mut self, status: u16, message: &str) -> Self {
        self.error = Some((status, message.to_string()));
        self
    }

    pub fn get_requests(&self) -> Vec<(String, InvocationRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockInferenceBackend {
    async fn invoke(
        &self,
        endpoint_name: &str,
        request: InvocationRequest,
    ) -> Result<InvocationResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint_name.to_string(), request));

        if let Some((status, ref message)) = self.error {
            return Err(Error::backend(status, message.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::backend(500, "No more mock responses available"));
        }

        Ok(InvocationResponse::new(
            responses.remove(0),
            Some("application/json".to_string()),
        ))
    }
}

impl Default for MockInferenceBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend that answers every invocation with the payload it was sent
#[derive(Debug, Default)]
pub struct EchoBackend;

#[async_trait]
impl InferenceBackend for EchoBackend {
    async fn invoke(
        &self,
        _endpoint_name: &str,
        request: InvocationRequest,
    ) -> Result<InvocationResponse> {
        Ok(InvocationResponse::new(
            request.body,
            Some(request.content_type),
        ))
    }
}
