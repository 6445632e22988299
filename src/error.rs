// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Corral
//!
//! This module defines all error types used throughout the application.
//! Classification itself is total and never returns an error; failures only
//! occur at the configuration, IO and server boundaries.

use thiserror::Error;

/// Main error type for Corral operations
#[derive(Error, Debug)]
pub enum CorralError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for Corral operations
pub type Result<T> = std::result::Result<T, CorralError>;

impl From<toml::de::Error> for CorralError {
    fn from(err: toml::de::Error) -> Self {
        CorralError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CorralError {
    fn from(err: toml::ser::Error) -> Self {
        CorralError::Toml(err.to_string())
    }
}
