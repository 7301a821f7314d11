// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for envr, built on `tracing`.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |              |
//!    v              v
//! stderr          log file (optional)
//! envr_rs only    every target
//! ANSI on a tty   plain text, span close events
//!        |
//!        v
//!    LogGuard (flushes the file writer on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO  4=DEBUG  5=TRACE
//! ```
//!
//! Stdout carries command output only (`list --json`, `export`, `get`), so
//! every diagnostic goes to stderr or the log file. At INFO the console
//! shows the reconciler's "Injected ... env vars" lines; DEBUG adds one line
//! per fetch, merged source and overridden value.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity from `--log-level` / `[global] log_level`, 0 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(u8);

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for levels above 5.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-5, got {level}"),
        })
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 5 { Some(Self(level)) } else { None }
    }

    /// `EnvFilter` level name.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }

    /// Directive limiting output to this crate's own events.
    #[must_use]
    pub fn crate_directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.to_filter_string())
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Where diagnostics go and how verbose each sink is.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::WARN)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    /// Prefix console lines with the module path.
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the file writer running; dropping it flushes pending lines.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber. Call once, before any command runs.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use envr_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::INFO)
///     .with_log_file("logs/envr.log".into())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("resolving");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_filter(EnvFilter::new(config.console_level().crate_directive()));

    let (file_layer, file_guard) = if let Some(log_path) = config.log_file() {
        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        let file = std::fs::File::create(log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new(config.file_level().to_filter_string()));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;
