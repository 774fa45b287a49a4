//! Logging for both targets.
//! The server writes through a tracing subscriber; the hydrated client writes
//! to the browser devtools console.

#[cfg(feature = "ssr")]
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
}

#[cfg(feature = "hydrate")]
pub fn error(context: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", context, message).into());
}

#[cfg(feature = "hydrate")]
pub fn info(context: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", context, message).into());
}

#[cfg(not(feature = "hydrate"))]
pub fn error(context: &str, message: &str) {
    tracing::error!(context, "{}", message);
}

#[cfg(not(feature = "hydrate"))]
pub fn info(context: &str, message: &str) {
    tracing::info!(context, "{}", message);
}
