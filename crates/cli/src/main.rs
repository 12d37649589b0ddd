use berth_dns_domain::CliOverrides;
use berth_dns_infrastructure::dns::server::DnsServerHandler;
use clap::Parser;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "berth-dns")]
#[command(version)]
#[command(about = "Berth DNS - answers container names with the master host's address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Address answered for running container names
    #[arg(long, env = "MASTER_IP")]
    master_ip: Option<String>,

    /// Comma-separated names answered with the caller's own address
    #[arg(long, env = "LOCAL_DOCKER_NAMES")]
    local_names: Option<String>,

    /// Container runtime endpoint (unix:///var/run/docker.sock, tcp://host:2375)
    #[arg(long, env = "DOCKER_HOST")]
    docker_host: Option<String>,

    /// DoH upstream server; repeat to build a weighted pool
    #[arg(short = 'u', long = "upstream", value_delimiter = ',')]
    upstream: Option<Vec<String>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        master_address: cli.master_ip,
        local_clients: cli.local_names,
        runtime_endpoint: cli.docker_host,
        upstream_servers: cli.upstream,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Berth DNS v{}", env!("CARGO_PKG_VERSION"));

    let directory = bootstrap::connect_runtime(&config).await?;
    let dns_services = di::DnsServices::new(&config, directory)?;

    let dns_addr = config.server.listen_address();
    let dns_handler = DnsServerHandler::new(dns_services.use_case);

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!("Server shutdown complete");
    Ok(())
}
