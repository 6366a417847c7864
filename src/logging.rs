// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structured logging via `tracing`.
//!
//! Level and format come from the caller, then `PINWALL_LOG_LEVEL` / `PINWALL_LOG_FORMAT`,
//! then `RUST_LOG`, and default to `warn` / `compact`. Output goes to stderr so stdout
//! stays machine-readable.
//!
//! Per-module filters work as usual:
//!
//! ```bash
//! PINWALL_LOG_LEVEL="warn,pinwall::store=debug" pinwall add-note --x 80 --y 80
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Registry,
};

pub const LEVEL_ENV: &str = "PINWALL_LOG_LEVEL";
pub const FORMAT_ENV: &str = "PINWALL_LOG_FORMAT";
pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single line per event.
    #[default]
    Compact,
    /// Multi-line with source locations.
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat(s.to_owned())),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log format {0:?} (expected compact, pretty or json)")]
    UnknownFormat(String),
    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Filter directive for `level`, falling back through the environment to `warn`.
pub fn resolve_filter(level: Option<&str>) -> EnvFilter {
    let directive = level
        .map(str::to_owned)
        .or_else(|| std::env::var(LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber. Fails if one is already installed or the format is
/// unknown.
pub fn init_logging(level: Option<&str>, format: Option<&str>) -> Result<(), LoggingError> {
    let filter = resolve_filter(level);
    let format = match format
        .map(str::to_owned)
        .or_else(|| std::env::var(FORMAT_ENV).ok())
    {
        Some(raw) => raw.parse::<LogFormat>()?,
        None => LogFormat::default(),
    };

    match format {
        LogFormat::Compact => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true)
                    .with_span_events(FmtSpan::NONE)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::ACTIVE)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_target(true)
                    .with_span_events(FmtSpan::NONE)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{LogFormat, LoggingError};

    #[test]
    fn formats_parse_case_insensitively() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str(" Pretty ").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(matches!(
            LogFormat::from_str("xml"),
            Err(LoggingError::UnknownFormat(_))
        ));
    }

    #[test]
    fn every_variant_is_listed() {
        for name in LogFormat::variants() {
            assert!(name.parse::<LogFormat>().is_ok());
        }
    }
}
