use inference_forwarder::{
    backend::InferenceBackend,
    config::{BackendConfig, Config, LogsConfig, ServerConfig},
    forwarder::RequestForwarder,
    server::{self, handlers::AppState},
};
use axum::Router;
use std::{collections::HashMap, sync::Arc};
use tempfile::TempDir;
use tokio::fs;

pub const TEST_ENDPOINT: &str = "serverless-endpoint-distilbert";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        backend: BackendConfig {
            endpoint_name: TEST_ENDPOINT.to_string(),
            base_url: "http://127.0.0.1:8081".to_string(),
            headers: HashMap::new(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

pub fn create_forwarder(backend: Arc<dyn InferenceBackend>) -> RequestForwarder {
    RequestForwarder::new(backend, TEST_ENDPOINT)
}

/// Router wired to the given backend
pub fn create_test_app(backend: Arc<dyn InferenceBackend>) -> Router {
    server::router(AppState::new(create_forwarder(backend)))
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
backend:
  endpoint_name: serverless-endpoint-distilbert
  base_url: "http://runtime.local:9000"
  headers:
    x-api-key: test-key
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: debug
"#;
