use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the inference endpoint every request is forwarded to.
    #[serde(default)]
    pub endpoint_name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static headers added to every backend invocation.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Applies environment overrides through `lookup`, which maps a variable
    /// name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("ENDPOINT_NAME") {
            self.backend.endpoint_name = name;
        }
        if let Some(url) = lookup("BACKEND_BASE_URL") {
            self.backend.base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend.endpoint_name.trim().is_empty() {
            return Err(Error::config(
                "backend.endpoint_name is required (set ENDPOINT_NAME)",
            ));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::config("backend.base_url must not be empty"));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint_name: String::new(),
            base_url: default_base_url(),
            headers: HashMap::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8081".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
