use serde::{Deserialize, Serialize};

/// Body returned by `/invoke` when the forwarder faults.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationError {
    pub error_message: String,
    pub error_type: String,
}

/// Generic failure the routing layer reports to the HTTP caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct GatewayError {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub endpoint_name: String,
}
