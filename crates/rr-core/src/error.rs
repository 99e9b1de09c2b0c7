//! # AppError
//!
//! Centralized error handling for Recipe Radar.
//! Every failure here is recoverable: the store is left untouched and the
//! caller decides how to surface the message.

use thiserror::Error;

/// The primary error type for all rr-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Referenced entity does not exist (e.g., Recipe, Tip, Group, Post, User)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, String),

    /// Rejected before mutation (e.g., rating out of range, empty tip text)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No acting identity, or the identity may not sign in (e.g., suspended)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Seed data collides with itself (e.g., duplicate recipe id)
    #[error("conflict: {0}")]
    Conflict(String),
}

impl AppError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound(entity, id.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }
}

/// A specialized Result type for Recipe Radar logic.
pub type Result<T> = std::result::Result<T, AppError>;
