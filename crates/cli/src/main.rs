use clap::Parser;
use stubdns_domain::{CliOverrides, CodecError, DomainError};
use stubdns_infrastructure::dns::transport::resolve_server;
use stubdns_infrastructure::dns::{StubResolver, UdpTransport};
use tracing::{error, info};

mod bootstrap;
mod report;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version = "0.1.0")]
#[command(about = "stubdns - Minimal DNS stub resolver for A records")]
struct Cli {
    /// Domain name to resolve
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver (IP:PORT or HOST:PORT)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Query timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Fixed query ID instead of a random one
    #[arg(long)]
    id: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let timeout = config.upstream.timeout();
    let server_addr = resolve_server(&config.upstream.server, timeout).await?;

    info!(
        domain = %cli.domain,
        server = %server_addr,
        "Resolving A records"
    );

    let resolver = StubResolver::new(UdpTransport::new(server_addr), timeout);

    let result = match cli.id {
        Some(id) => resolver.resolve_with_id(&cli.domain, id).await,
        None => resolver.resolve(&cli.domain).await,
    };

    match result {
        Ok(message) => {
            print!("{}", report::render_message(&message));
            Ok(())
        }
        Err(DomainError::Codec(CodecError::NotAReply(header))) => {
            print!("{}", report::render_not_a_reply(&header));
            Ok(())
        }
        Err(e) => {
            error!(domain = %cli.domain, error = %e, "Resolution failed");
            Err(e.into())
        }
    }
}
