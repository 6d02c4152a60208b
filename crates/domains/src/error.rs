//! # BoardError
//!
//! Centralized error handling for the Driftboard ecosystem.
//! The `Display` strings of the client-facing variants are part of the API
//! contract and must not change.

use thiserror::Error;

/// The primary error type for all board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Submission is missing its text or its origin address.
    #[error("Missing text or IP")]
    MissingTextOrIp,

    /// Text exceeds the 300-character limit.
    #[error("Message too long")]
    MessageTooLong,

    /// Sender name is not 1-16 characters of `[A-Za-z0-9 ]`.
    #[error("Invalid username format")]
    InvalidUsername,

    /// The sender posted less than a minute ago.
    #[error("Cooldown active")]
    CooldownActive { retry_after_secs: i64 },

    /// The classifier flagged the text or the sender name.
    #[error("Message rejected by moderation")]
    ModerationRejected,

    /// Admin secret mismatch. Carries no detail on purpose.
    #[error("forbidden")]
    Forbidden,

    /// Infrastructure failure (store or classifier unreachable/erroring).
    #[error("internal service error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// A specialized Result type for Driftboard logic.
pub type Result<T> = std::result::Result<T, BoardError>;
