use berth_dns_domain::{CliOverrides, Config};

/// Loads the layered configuration and rejects it when the daemon could
/// not run with it (missing master address, empty upstream pool, ...).
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
