//! Structured logging for the generator binaries and tests.
//!
//! Console logging via the `tracing` ecosystem: timestamps relative to process
//! start, module paths, and severity levels, filterable through `RUST_LOG` or
//! the config file's `log_level` field.

use astrogen_config::GenConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Filter precedence: the `RUST_LOG` environment variable wins, then the
/// config's `log_level` field, then `info`. Call once at startup; panics from
/// double initialization are avoided by ignoring re-registration.
pub fn init_logging(config: Option<&GenConfig>) {
    let filter_str = match config {
        Some(config) if !config.log_level.is_empty() => config.log_level.clone(),
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    // try_init rather than init: tests may initialize more than once.
    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(fallback_filter = %filter_str, "logging initialized");
    }
}

/// The default filter used when neither `RUST_LOG` nor the config specify one.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_config_log_level_feeds_the_filter() {
        let mut config = GenConfig::default();
        config.log_level = "debug,astrogen_trail=trace".to_string();
        let filter = EnvFilter::new(&config.log_level);
        let rendered = format!("{filter}");
        assert!(rendered.contains("astrogen_trail=trace"));
        assert!(rendered.contains("debug"));
    }

    #[test]
    fn test_repeated_initialization_does_not_panic() {
        init_logging(None);
        init_logging(Some(&GenConfig::default()));
    }
}
