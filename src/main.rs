//! Cryptodash headless runner
//!
//! Loads the dashboard resources from a directory or an HTTP base URL, renders
//! into an in-memory surface and keeps refreshing until Ctrl-C. With `--once`
//! it prints the rendered view as JSON and exits.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cryptodash::config::generate_default_config;
use cryptodash::{
    refresh, Config, ConfigOrigin, Dashboard, DataLoader, FsSource, HttpSource, LoggingConfig,
    MemorySurface, ResourceSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cryptodash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Crypto sentiment dashboard, rendered headless")]
struct Cli {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory or http(s) base URL holding the resources
    #[arg(short, long)]
    resources: Option<String>,

    /// Load once, print the rendered view as JSON and exit
    #[arg(long)]
    once: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let (mut config, origin) = match &cli.config {
        Some(path) => (Config::load(path)?, ConfigOrigin::File(path.clone())),
        None => Config::load_default(),
    };
    if let Some(base) = cli.resources {
        config.resources.base = base;
    }

    init_logging(&config.logging);
    tracing::info!("Cryptodash v{}", env!("CARGO_PKG_VERSION"));
    origin.log();

    let load_timeout = config.resources.load_timeout();
    let source: Box<dyn ResourceSource> = if config.resources.is_remote() {
        Box::new(
            HttpSource::new(&config.resources.base, load_timeout)
                .context("Failed to build HTTP client")?,
        )
    } else {
        Box::new(FsSource::new(&config.resources.base))
    };
    tracing::info!("Resources: {}", source.describe());

    let loader = DataLoader::new(source, config.resources.paths());
    let mut dashboard = Dashboard::new(
        &config.selection,
        &config.chart,
        MemorySurface::new(),
        StdRng::from_entropy(),
    );

    refresh::start(&mut dashboard, &loader, load_timeout).await;

    if cli.once {
        let view = serde_json::to_string_pretty(&dashboard.surface().to_json())?;
        println!("{}", view);
        return Ok(());
    }

    let period = Duration::from_millis(config.refresh.interval_ms);
    tracing::info!("Refreshing every {:?}, press Ctrl-C to stop", period);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    refresh::run(&mut dashboard, &loader, period, load_timeout, shutdown).await;

    tracing::info!("Cryptodash shutdown complete");
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("cryptodash={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
