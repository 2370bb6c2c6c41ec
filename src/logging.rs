use anyhow::anyhow;
use lto_config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails if a subscriber is
/// already installed.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let level = logging.level.trim();
    let level = if level.is_empty() { "info" } else { level };
    let filter_spec = format!("{level},lto={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_spec));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(logging.ansi)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
