use berth_dns_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.logging.json {
        builder.json().try_init().ok();
    } else {
        builder.try_init().ok();
    }
}
