//! Server binary for the laboratory directory query service.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use labo_api::router;
use labo_config::LaboConfig;
use labo_db::LaboDb;

/// Read-only HTTP query service over the laboratory directory store.
#[derive(Debug, Parser)]
#[command(name = "labo-api", version)]
struct Cli {
    /// Listen port, overrides configuration.
    #[arg(long)]
    port: Option<u16>,

    /// Only log errors.
    #[arg(long, short)]
    quiet: bool,

    /// Verbose logging (debug level).
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("labo-api error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = LaboConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let db = if config.database.is_remote() {
        tracing::info!(url = %config.database.url, "opening remote store");
        LaboDb::open_remote(&config.database.url, &config.database.auth_token).await
    } else {
        tracing::info!(path = %config.database.path, "opening local store");
        LaboDb::open_local(&config.database.path).await
    }
    .context("failed to open the store")?;

    let app = router(Arc::new(db));
    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "labo-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LABO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Resolves on ctrl-c or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
