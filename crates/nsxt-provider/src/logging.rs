// ── Logging setup ──
//
// The host engine owns the plugin's stdout, so every subscriber installed
// here writes to stderr. The filter comes from `NSXT_LOG` when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "NSXT_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per event, for hosts that collect structured logs.
    Json,
}

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global stderr subscriber, returning an error if one is already set.
pub fn try_init_logging(default_directive: &str, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(filter(default_directive));
    match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
}

/// Install the default text subscriber at `info`; a second call is a no-op.
pub fn init_logging() {
    let _ = try_init_logging("info", LogFormat::Text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_does_not_panic() {
        init_logging();
        init_logging();
        assert!(try_init_logging("debug", LogFormat::Json).is_err());
    }
}
