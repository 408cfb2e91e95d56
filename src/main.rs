//! This file defines the actor showcase API server entry point.

use actor_showcase::app;
use actor_showcase::catalog::Catalog;
use actor_showcase::cli;
use actor_showcase::metrics;
use actor_showcase::server;
use actor_showcase::tracing;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing();
    metrics::register_metrics();
    let catalog = Catalog::showcase();
    let service = app::service(&args, catalog);
    server::serve(&args, service).await;
}
