use clap::Parser;
use rift_dns_domain::CliOverrides;
use rift_dns_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rift-dns")]
#[command(version)]
#[command(about = "Rift DNS - override-first DNS resolver with DoH upstream")]
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

    /// DoH upstream URL (JSON resolver API)
    #[arg(long)]
    doh_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        doh_url: cli.doh_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Rift DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config);
    let handler = DnsServerHandler::new(services.resolve_domain);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(dns_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
