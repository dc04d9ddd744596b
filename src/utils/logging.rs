//! Logging setup and helpers.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. `RUST_LOG` overrides the
/// default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Startup banner.
pub fn log_startup(model_name: &str, api_key_configured: bool) {
    info!("{}", "=".repeat(60));
    info!(
        "smart desk starting - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("model: {}", model_name);
    if !api_key_configured {
        info!("no API key configured; operations will report the configuration error");
    }
    info!("{}", "=".repeat(60));
}

/// Truncate long text for log display.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
