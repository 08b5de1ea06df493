//! Logging setup for the Marquee binaries
//!
//! Log lines go to stderr so stdout stays clean for piped output. Format
//! and level come from `MARQUEE_LOG_FORMAT` and `MARQUEE_LOG_LEVEL`, or
//! from the caller when a flag such as `--verbose` overrides them. The
//! TUI never installs a subscriber; it owns the terminal.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Plain text, one event per line
    #[default]
    Text,
    /// One JSON object per line, for collectors
    Json,
    /// Multi-line colored output for development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        };
        write!(f, "{}", name)
    }
}

/// Install the global subscriber.
///
/// `level` is a tracing filter directive ("info", "warn,libmarquee=debug",
/// ...); `RUST_LOG` takes precedence when set.
///
/// # Panics
///
/// Panics if a subscriber is already installed.
pub fn init(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .flatten_event(true)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
}

/// Install the subscriber from `MARQUEE_LOG_FORMAT` and
/// `MARQUEE_LOG_LEVEL`, defaulting to text at info.
pub fn init_from_env() {
    let format = std::env::var("MARQUEE_LOG_FORMAT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();

    let level = std::env::var("MARQUEE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    init(format, &level);
}
