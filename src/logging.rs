use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Log to stderr so stdout carries nothing but URLs. `RUST_LOG` overrides the default level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
