use crate::catalog::Catalog;
use crate::cli::CommandLineArgs;

use std::sync::Arc;

/// Shared application state passed to each request handler.
pub struct AppState {
    /// Command line arguments.
    pub args: CommandLineArgs,

    /// The actor catalog.
    pub catalog: Catalog,
}

impl AppState {
    /// Create and return an [AppState].
    pub fn new(args: &CommandLineArgs, catalog: Catalog) -> Self {
        Self {
            args: args.clone(),
            catalog,
        }
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
