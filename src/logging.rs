use tracing_subscriber::EnvFilter;

/// Initialise logging. In debug builds callers pass `true` and get `debug`
/// level output; otherwise `info` is forced so a stray `RUST_LOG` in the
/// user's environment cannot make the dashboard verbose. With debug enabled,
/// `RUST_LOG` may still override the level.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
