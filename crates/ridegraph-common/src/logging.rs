//! Logging configuration and utilities for ridegraph applications

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::Result;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to use JSON formatting
    pub json_format: bool,
    /// Whether to use pretty formatting (for development)
    pub pretty_format: bool,
    /// Optional file path for file logging
    pub file_path: Option<String>,
    /// Whether to include span information
    pub include_spans: bool,
    /// Whether to include target information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Initialize logging with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(file_path) = &config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        if config.json_format {
            let file_layer = fmt::layer()
                .json()
                .with_writer(file)
                .with_target(config.include_targets)
                .with_span_events(span_events);
            registry.with(file_layer).init();
        } else {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(config.include_targets)
                .with_span_events(span_events);
            registry.with(file_layer).init();
        }
    } else if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_target(config.include_targets)
            .with_span_events(span_events);
        registry.with(layer).init();
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_target(config.include_targets)
            .with_span_events(span_events);
        registry.with(layer).init();
    } else {
        let layer = fmt::layer()
            .with_target(config.include_targets)
            .with_span_events(span_events);
        registry.with(layer).init();
    }

    Ok(())
}

/// Initialize default logging for development
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

/// Initialize logging for development with pretty formatting
pub fn init_dev_logging() -> Result<()> {
    let config = LoggingConfig {
        level: "debug".to_string(),
        pretty_format: true,
        ..Default::default()
    };
    init_logging(&config)
}

/// Initialize logging for production with JSON formatting
pub fn init_prod_logging() -> Result<()> {
    let config = LoggingConfig {
        json_format: true,
        ..Default::default()
    };
    init_logging(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(!config.pretty_format);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }
}
