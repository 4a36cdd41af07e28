// ABOUTME: Unified error handling for storage and state lifecycle operations
// ABOUTME: Defines AppError, AppResult, and conversions from I/O and serde failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

//! # Unified Error Handling
//!
//! A single error type covers everything in this crate that can actually
//! fail: blob storage I/O, snapshot (de)serialization, and lookups against
//! the loaded catalogs. The calculation engine in [`crate::intelligence`]
//! deliberately has no error path — unrecognized inputs degrade to named
//! defaults instead (see the module docs there).

use thiserror::Error;
use uuid::Uuid;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying filesystem operation failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted blob or export snapshot could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An operation required an onboarded profile but none is set
    #[error("no user profile has been created yet")]
    ProfileMissing,

    /// A record referenced an id that is not present in the loaded state
    #[error("unknown {kind} id: {id}")]
    UnknownReference {
        /// Record kind ("food", "template", ...)
        kind: &'static str,
        /// The dangling identifier
        id: Uuid,
    },

    /// Caller-supplied value is outside the acceptable range
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Convenience constructor for invalid input errors
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convenience constructor for dangling-reference errors
    #[must_use]
    pub const fn unknown_reference(kind: &'static str, id: Uuid) -> Self {
        Self::UnknownReference { kind, id }
    }
}
