//! # Error Types — Core Failures
//!
//! Defines the error type shared by the foundational crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Higher layers define their own error enums (catalog loading, session
//! transitions); this enum covers only failures that can arise from the
//! primitives themselves.

use thiserror::Error;

/// Errors produced by the foundational types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A timestamp string was malformed or not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An identifier failed a structural requirement.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}
