//! Tracing setup for debugging translations.
//!
//! Output format is chosen by `GOTS_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `json`: one JSON object per event
//!
//! ```bash
//! GOTS_LOG=debug gots generate tree.json
//! GOTS_LOG="gots_compiler=trace" GOTS_LOG_FORMAT=json gots check tree.json
//! ```
//!
//! Nothing is installed unless `GOTS_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("GOTS_LOG_FORMAT").unwrap_or_default())
    }
}

/// `GOTS_LOG` wins over `RUST_LOG`; both use `RUST_LOG` syntax.
fn build_filter() -> EnvFilter {
    match std::env::var("GOTS_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays
/// TypeScript only.
pub fn init_tracing() {
    if std::env::var("GOTS_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogFormat;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("tree"), LogFormat::Text);
    }
}
