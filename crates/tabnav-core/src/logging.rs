use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the JSON log subscriber on stderr.
///
/// With `quiet` set nothing is logged unless `RUST_LOG` asks for it; otherwise the
/// default level is `info`. Calling this more than once is harmless.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "off" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(true);
        init_logging(false);
        tracing::info!(event = "core.logging.test_event");
    }
}
