use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warehouse_match::api::{self, ApiState};
use warehouse_match::config::{self, ServerConfig};
use warehouse_match::store::StoreBuilder;

/// Preference-based warehouse recommendation service
#[derive(Parser, Debug)]
#[command(name = "warehouse-match")]
#[command(about = "Ranks warehouse listings against caller preferences", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// HTTP API port
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// JSON file holding the warehouse records
    #[arg(short, long, env = "WAREHOUSE_DATASET", default_value = config::DEFAULT_DATASET)]
    dataset: PathBuf,

    /// Message returned by /api/ping
    #[arg(long, env = "PING_MESSAGE", default_value = config::DEFAULT_PING_MESSAGE)]
    ping_message: String,

    /// Recommendations returned when a request names no limit
    #[arg(long, default_value_t = config::DEFAULT_LIMIT)]
    default_limit: usize,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = config::DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            dataset: args.dataset,
            ping_message: args.ping_message,
            default_limit: args.default_limit,
            log_level: args.log_level,
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from(Args::parse());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting warehouse-match v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", config.dataset);
    info!("Default limit: {}", config.default_limit);

    let store = StoreBuilder::new()
        .load_json(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;

    api::serve(ApiState::new(store, config)).await?;

    info!("Shutting down...");
    Ok(())
}
