// Season statistics tool server entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr)
// 2. Load config
// 3. Scan the season root and build the in-memory dataset
// 4. Bind the listener and serve tool calls until Ctrl+C

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use statline::config;
use statline::server;
use statline::stats::dataset::Dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("statline starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: season_dir={}, default_team={}, port={}",
        config.season_dir.display(),
        config.default_team,
        config.port
    );

    // 3. Build the dataset (immutable for the life of the process)
    let dataset = Arc::new(Dataset::load(&config.season_dir));
    info!(
        "Loaded {} batting rows and {} pitching rows across {} teams",
        dataset.batting_row_count(),
        dataset.pitching_row_count(),
        dataset.teams().len()
    );

    // 4. Bind and serve
    let listener = TcpListener::bind(("127.0.0.1", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    let server_handle = tokio::spawn(server::run(listener, dataset, config.default_team));

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    server_handle.abort();
    if let Err(e) = server_handle.await {
        if !e.is_cancelled() {
            error!("server task failed: {e}");
        }
    }

    info!("statline shut down cleanly");
    Ok(())
}

/// Initialize tracing to stderr with an env-filter override.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statline=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
