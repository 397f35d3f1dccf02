//! Error types for canopy operations.
//!
//! This module defines [`CanopyError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CanopyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CanopyError::Other`) for unexpected errors
//! - Conditions an operator is expected to fix (dirty tree, stale installer)
//!   are not errors at all: they travel as preflight abort verdicts

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for canopy operations.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// A version string that could not be parsed.
    #[error("Could not parse version string '{input}'")]
    VersionParse { input: String },

    /// Failed to parse the server override file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The detected VCS binary could not be executed.
    #[error("Could not run `{command}`: {message}")]
    VcsUnavailable { command: String, message: String },

    /// The remote installer-version lookup failed.
    #[error("Version check against {url} failed: {message}")]
    RemoteCheck { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for canopy operations.
pub type Result<T> = std::result::Result<T, CanopyError>;
