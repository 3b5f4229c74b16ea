//! Pagekeep wiki server.
//!
//! Serves versioned wiki pages from a flat data directory:
//!
//! Usage:
//!   pagekeep-server --port 8080 --data-dir pages

use anyhow::{Context, Result};
use clap::Parser;
use pagekeep_engine::Wiki;
use pagekeep_server::build_router;
use pagekeep_store::FsStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pagekeep-server")]
#[command(about = "Versioned wiki server over the Pagekeep content engine")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Root directory holding one subdirectory per namespace
    #[arg(short, long, default_value = "pages")]
    data_dir: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!(data_dir = %args.data_dir.display(), "Pagekeep server starting");

    let wiki = Arc::new(Wiki::new(FsStore::new(args.data_dir)));
    let app = build_router(wiki);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}
