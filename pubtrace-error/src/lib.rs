// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pubtrace latency aggregator
//!
//! The retention store itself can only fail on malformed input, so the
//! taxonomy is deliberately small: [`PubtraceError::InvalidArgument`] for
//! anything the caller handed over in a bad shape, and
//! [`PubtraceError::TaskError`] for the background pruning task.
//!
//! # Examples
//!
//! ```
//! use pubtrace_error::{PubtraceError, Result};
//!
//! fn parse_nanos(nanosec: i64) -> Result<u32> {
//!     if !(0..1_000_000_000).contains(&nanosec) {
//!         return Err(PubtraceError::invalid_argument("nanosec out of range"));
//!     }
//!     Ok(nanosec as u32)
//! }
//!
//! assert!(parse_nanos(-1).is_err());
//! ```

/// Root error type for all pubtrace operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PubtraceError {
    /// A record, timestamp or label was missing a required field or was malformed
    ///
    /// Raised synchronously where the value is constructed. Nothing is
    /// mutated when this error is returned.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong with the argument
        message: String,
    },

    /// The background pruning task failed or panicked
    #[error("Pruning task failed: {context}")]
    TaskError {
        /// Details about the task failure
        context: String,
    },
}

impl PubtraceError {
    /// Create an invalid argument error with the given message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a task error with the given context
    pub fn task_error(context: impl Into<String>) -> Self {
        Self::TaskError {
            context: context.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A failed pruning task can be restarted; the store it was pruning is intact.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::TaskError { .. })
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Retrying with the same input always fails again.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for pubtrace operations
///
/// # Examples
///
/// ```
/// use pubtrace_error::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PubtraceError>;

/// Helper trait for adding context to `Result`s
///
/// The error kind is preserved; only the message is prefixed.
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(PubtraceError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(PubtraceError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(e, &context.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(e, &f()))
    }
}

fn prefix(error: PubtraceError, context: &str) -> PubtraceError {
    match error {
        PubtraceError::InvalidArgument { message } => PubtraceError::InvalidArgument {
            message: format!("{context}: {message}"),
        },
        PubtraceError::TaskError { context: inner } => PubtraceError::TaskError {
            context: format!("{context}: {inner}"),
        },
    }
}
