mod client;
mod types;

pub use client::{HttpInferenceBackend, InferenceBackend};
pub use types::{InvocationRequest, InvocationResponse, JSON_CONTENT_TYPE};
