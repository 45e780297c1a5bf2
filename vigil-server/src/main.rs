use std::net::IpAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vigil_server::{ServerConfig, StatusHolder};

#[derive(Debug, Parser)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Route that reports the status stamped with the request time
    #[arg(long, default_value = "/status")]
    status_path: String,
    /// Route that reports the status stamped with its last update
    #[arg(long, default_value = "/status/background")]
    background_path: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            status_path: args.status_path,
            background_path: args.background_path,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from(Args::parse());
    let holder = StatusHolder::new();

    let listener = vigil_server::bind(&config).await?;
    holder.ok("serving");
    vigil_server::serve(listener, holder, &config).await?;

    Ok(())
}
