mod commands;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use storesync_core::{StoreConfig, DEFAULT_API_VERSION};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storesync-cli")]
#[command(about = "Run WooCommerce shim actions against a store from the terminal")]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Store connection settings, read from flags or `WOO_*` environment variables.
#[derive(Debug, Args)]
struct StoreArgs {
    /// Storefront URL, e.g. shop.example.com
    #[arg(long, env = "WOO_STORE_URL", global = true)]
    store_url: Option<String>,
    #[arg(long, env = "WOO_CONSUMER_KEY", global = true, hide_env_values = true)]
    consumer_key: Option<String>,
    #[arg(long, env = "WOO_CONSUMER_SECRET", global = true, hide_env_values = true)]
    consumer_secret: Option<String>,
    #[arg(long, env = "WOO_API_VERSION", global = true, default_value = DEFAULT_API_VERSION)]
    api_version: String,
    /// Scheme to assume when the store URL has none
    #[arg(
        long,
        env = "WOO_USE_SSL",
        global = true,
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    use_ssl: bool,
}

impl StoreArgs {
    fn into_config(self) -> anyhow::Result<StoreConfig> {
        let store_url = self
            .store_url
            .ok_or_else(|| anyhow::anyhow!("--store-url or WOO_STORE_URL is required"))?;
        let consumer_key = self
            .consumer_key
            .ok_or_else(|| anyhow::anyhow!("--consumer-key or WOO_CONSUMER_KEY is required"))?;
        let consumer_secret = self.consumer_secret.ok_or_else(|| {
            anyhow::anyhow!("--consumer-secret or WOO_CONSUMER_SECRET is required")
        })?;

        Ok(StoreConfig {
            store_url,
            consumer_key,
            consumer_secret,
            api_version: self.api_version,
            use_ssl: self.use_ssl,
        })
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Walk the connection diagnostics and report the first failing step
    Test,
    /// Fetch one page of published products, newest first
    Fetch {
        #[arg(long, default_value_t = commands::DEFAULT_FETCH_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Send a partial product update
    Update {
        #[arg(long)]
        product_id: String,
        /// JSON object with the fields to change
        #[arg(long, value_parser = commands::parse_product_data)]
        data: serde_json::Value,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let app_config = storesync_core::load_app_config_from_env()?;

    // stdout carries the JSON result, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(app_config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli.store.into_config()?;
    let client = storesync_woo::WooClient::new(&app_config.user_agent, app_config.timeouts)?;

    let report = commands::run(&client, &store, cli.command).await;
    println!("{}", serde_json::to_string_pretty(&report.body)?);

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests;
