use ghost_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    info!(
        dns_port = config.server.dns_port,
        web_port = config.server.web_port,
        upstream = %config.upstream.address,
        sources = config.blocking.sources.len(),
        "Configuration loaded"
    );

    Ok(config)
}
