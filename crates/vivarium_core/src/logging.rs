use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when `verbose`.
/// Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
