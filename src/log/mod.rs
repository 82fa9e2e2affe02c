use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Initialize the global tracing subscriber.
///
/// Log level comes from `PETFRIENDS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// `PETFRIENDS_LOG_FORMAT=json` switches from the human-readable formatter to
/// JSON lines; any other value keeps the default.
pub fn init_tracing() {
    let filter = env_filter();

    let subscriber = Registry::default().with(filter).with(ErrorLayer::default());

    if json_output() {
        let layer = fmt::layer()
            .json()
            .with_target(false)
            .with_file(false)
            .with_line_number(false);
        tracing::subscriber::set_global_default(subscriber.with(layer))
            .expect("failed to set global tracing subscriber");
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_file(true)
            .with_line_number(true);
        tracing::subscriber::set_global_default(subscriber.with(layer))
            .expect("failed to set global tracing subscriber");
    }
}

fn env_filter() -> EnvFilter {
    match std::env::var("PETFRIENDS_LOG_LEVEL") {
        Ok(lvl) => EnvFilter::new(lvl),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

fn json_output() -> bool {
    std::env::var("PETFRIENDS_LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false)
}
