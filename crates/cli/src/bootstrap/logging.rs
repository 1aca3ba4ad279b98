use stubzone_domain::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so record
/// listings on stdout stay clean.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}
