use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber once for the entire
/// application. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
