// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              EnvrError (~24 bytes)
//!                     |
//!   +------+------+------+------+------+------+
//!   |      |      |      |      |      |      |
//!   v      v      v      v      v      v      v
//! Bail  Context Remote Config DotEnv Process  Io
//!        Box    Box    Box    Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Context  Reserved
//!   Remote   Reqwest, HttpError, Decode, InvalidUrl
//!   Config   ParseError, MissingKey, InvalidValue
//!   DotEnv   NotFound, Parse
//!   Process  ExecutableNotFound, SpawnFailed
//! ```
//!
//! Remote errors never leave the resolver: `remote::fetch_or_empty`
//! turns them into an empty record list.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvrError`].
pub type EnvrResult<T> = std::result::Result<T, EnvrError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvrError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Invalid deploy context or branch token.
    #[error("context error: {0}")]
    Context(#[from] Box<ContextError>),

    /// Remote variable store failure.
    #[error("remote error: {0}")]
    Remote(#[from] Box<RemoteError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Env file could not be read or parsed.
    #[error("env file error: {0}")]
    DotEnv(#[from] Box<DotEnvError>),

    /// Child process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`EnvrError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvrError {
    EnvrError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvrError {
                fn from(err: $error) -> Self {
                    EnvrError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ContextError => Context,
    RemoteError => Remote,
    ConfigError => Config,
    DotEnvError => DotEnv,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Context Errors ---

/// Context token errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// `branch:<canonical-context>` collides with a reserved context name.
    #[error("the context {context} includes a reserved keyword and is not allowed")]
    Reserved { context: String },
}

// --- Remote Errors ---

/// Remote variable store errors.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Response body did not match the record schema.
    #[error("failed to decode records from {url}: {message}")]
    Decode { url: String, message: String },

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Env File Errors ---

/// Errors reading explicitly requested env files.
#[derive(Debug, Error)]
pub enum DotEnvError {
    /// The file does not exist.
    #[error("env file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read or parsed.
    #[error("failed to parse env file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

// --- Process Errors ---

/// Child process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
