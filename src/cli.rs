//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Actor showcase API command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "SHOWCASE_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 8000, env = "SHOWCASE_PORT")]
    pub port: u16,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "SHOWCASE_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/actor-showcase/certs/cert.pem",
        env = "SHOWCASE_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/actor-showcase/certs/key.pem",
        env = "SHOWCASE_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for operations to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "SHOWCASE_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
    /// Origins allowed to make cross-origin requests, as a comma-separated list.
    /// Pass "*" to allow any origin.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://localhost:3000",
        env = "SHOWCASE_CORS_ORIGINS"
    )]
    pub cors_origins: Vec<String>,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
