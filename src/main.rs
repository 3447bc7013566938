use std::path::PathBuf;

use clap::Parser;

use groupie_tracker::config::{load_config, AppConfig};
use groupie_tracker::lifecycle;
use groupie_tracker::observability::logging;

#[derive(Parser)]
#[command(name = "groupie-tracker")]
#[command(version, about = "Web front-end for the Groupie Trackers API", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "GROUPIE_CONFIG")]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long)]
    bind: Option<String>,

    /// Override upstream.base_url.
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(upstream) = cli.upstream {
        config.upstream.base_url = upstream;
    }

    logging::init(&config.observability);

    tracing::info!(
        config_file = ?cli.config,
        "groupie-tracker v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
