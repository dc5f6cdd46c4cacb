mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file, applies environment overrides and validates
/// the result. Fails when no endpoint name is configured.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config = from_file(explicit_path.as_deref()).await?;
    let config = config.with_overrides(|key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

/// Reads the YAML configuration. A missing default file yields an empty
/// configuration; a missing explicit path is an error.
pub async fn from_file(explicit_path: Option<&str>) -> Result<Config> {
    let config_path = explicit_path.unwrap_or(DEFAULT_CONFIG_PATH);

    if explicit_path.is_none() && !Path::new(config_path).exists() {
        debug!("No {} found, using defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.backend.endpoint_name, "");
        assert!(config.backend.headers.is_empty());
    }

    #[test]
    fn test_missing_endpoint_name_is_rejected() {
        let config = Config::default().with_overrides(lookup_from(&[]));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoint_name"));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides(lookup_from(&[
            ("ENDPOINT_NAME", "serverless-endpoint-distilbert"),
            ("BACKEND_BASE_URL", "http://runtime.local"),
        ]));

        assert_eq!(
            config.backend.endpoint_name,
            "serverless-endpoint-distilbert"
        );
        assert_eq!(config.backend.base_url, "http://runtime.local");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
backend:
  endpoint_name: serverless-endpoint-bert
  headers:
    x-api-key: secret
server:
  port: 9000
  logs:
    level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.endpoint_name, "serverless-endpoint-bert");
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8081");
        assert_eq!(
            config.backend.headers.get("x-api-key").map(String::as_str),
            Some("secret")
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.logs.level, "debug");
    }

    #[tokio::test]
    async fn test_explicit_missing_file_fails() {
        let result = from_file(Some("/definitely/not/here/config.yaml")).await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
