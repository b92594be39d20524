mod args;
mod commands;

pub use args::Cli;
pub use commands::run;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over `--log-level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
