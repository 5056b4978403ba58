use clap::Parser;
use ghost_dns_api::AppState;
use ghost_dns_domain::CliOverrides;
use ghost_dns_infrastructure::jobs::BlocklistRefreshJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ghost-dns")]
#[command(version)]
#[command(about = "Ghost DNS - network-wide ad-blocking DNS sinkhole")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web dashboard port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (IP or IP:PORT)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ghost DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &dns_services)?;

    match use_cases.reload_blocklist.execute().await {
        Ok(domains) => info!(domains, "Blocklist loaded"),
        Err(e) => warn!(error = %e, "Blocklist unavailable, nothing will be blocked"),
    }

    let shutdown = CancellationToken::new();

    if config.blocking.refresh_interval_secs > 0 {
        let job = Arc::new(
            BlocklistRefreshJob::new(
                use_cases.reload_blocklist.clone(),
                config.blocking.refresh_interval_secs,
            )
            .with_cancellation(shutdown.clone()),
        );
        job.start();
    }

    let app_state = AppState {
        get_activity: use_cases.get_activity,
        get_blocklist_size: use_cases.get_blocklist_size,
    };

    let dns_addr = config.server.dns_addr()?;
    let web_addr = config.server.web_addr()?;

    let dns_handler = dns_services.handler;
    let dns_shutdown = shutdown.clone();
    let dns_task = tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler, dns_shutdown).await {
            error!(error = %e, "DNS server error");
        }
    });

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    let web_result = server::start_web_server(web_addr, app_state, shutdown.clone()).await;
    shutdown.cancel();
    let _ = dns_task.await;

    web_result?;
    info!("Server shutdown complete");
    Ok(())
}
