use crudkit_core::CoreError;
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging on stderr so generated output on stdout stays clean.
///
/// `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) -> Result<(), CoreError> {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| CoreError::validation(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(Layer::new().with_writer(io::stderr).with_target(verbose))
        .try_init()
        .map_err(|e| CoreError::validation(format!("Failed to initialize logging: {}", e)))
}
