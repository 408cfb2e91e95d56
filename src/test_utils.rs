use crate::catalog::Catalog;
use crate::cli::CommandLineArgs;
use crate::models::Actor;

/// Create command line arguments with default values for tests.
pub(crate) fn get_test_args() -> CommandLineArgs {
    CommandLineArgs {
        host: "127.0.0.1".to_string(),
        port: 8000,
        https: false,
        cert_file: "".to_string(),
        key_file: "".to_string(),
        graceful_shutdown_timeout: 60,
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

/// Create a small alternative catalog, distinct from the showcase dataset.
pub(crate) fn get_test_catalog() -> Catalog {
    let actors = vec![
        Actor::new(1, "Ingrid Bergman", 1915, "Sweden", 3).unwrap(),
        Actor::new(2, "Max von Sydow", 1929, "Sweden", 0).unwrap(),
        Actor::new(3, "Alicia Vikander", 1988, "Sweden", 1).unwrap(),
    ];
    Catalog::new(actors).unwrap()
}
