use anyhow::{Context, Result};
use inference_forwarder::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Picks the log filter: `RUST_LOG` directives when set, else
/// `server.logs.level`, which must name a plain level.
fn log_filter(rust_log: Option<String>, configured_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid RUST_LOG directives: '{}'", directives));
    }

    configured_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid server.logs.level '{}'. Valid levels: error, warn, info, debug, trace",
            configured_level
        )
    })?;
    Ok(EnvFilter::try_new(configured_level)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Without an endpoint name there is nothing to forward to
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(std::env::var("RUST_LOG").ok(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Inference forwarder starting for endpoint {}",
        config.backend.endpoint_name
    );

    server::run(config).await?;

    Ok(())
}
