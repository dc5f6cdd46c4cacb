use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event has no body")]
    MissingBody,

    #[error("Malformed body, expected key=value: {body:?}")]
    MalformedBody { body: String },

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn malformed_body(body: impl Into<String>) -> Self {
        Self::MalformedBody { body: body.into() }
    }

    pub fn backend(status: u16, msg: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: msg.into(),
        }
    }

    /// Stable name of the failure class, reported as `errorType` when an
    /// invocation fails.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::MissingBody | Self::MalformedBody { .. } => "MalformedInput",
            Self::Backend { .. } | Self::Network(_) => "BackendInvocationError",
            Self::Serialization(_) => "SerializationError",
            Self::Yaml(_) => "ConfigError",
            Self::Io(_) => "IoError",
            Self::AddrParse(_) => "ConfigError",
        }
    }
}
