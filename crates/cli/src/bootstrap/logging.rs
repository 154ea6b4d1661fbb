use ferrous_visits_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise the configured level applies.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}
