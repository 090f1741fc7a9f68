use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; setting
/// `debug_logging` in the settings file raises it to `debug`.
pub fn init(debug: bool) {
    // When debug logging is disabled we force `info` level regardless of
    // the `RUST_LOG` environment variable, so a stray variable in the
    // user's environment cannot make the app verbose.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        // Allow `RUST_LOG` to override the level when debug logging is enabled.
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
