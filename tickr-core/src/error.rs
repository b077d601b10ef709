// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for tickr timers
//!
//! Every failure a timer can report is a [`TimerError`]. Errors are delivered
//! to awaiting callers through future rejection and never thrown back into
//! the scheduling loop, so the type is `Clone`: one tick may settle many
//! waiters with the same error.
//!
//! # Examples
//!
//! ```
//! use tickr_core::{Result, TimerError};
//!
//! fn next_value() -> Result<u32> {
//!     Err(TimerError::Stopped)
//! }
//!
//! assert!(next_value().unwrap_err().is_stopped());
//! ```

use std::error::Error as StdError;
use std::sync::Arc;

/// Shared, thread-safe error produced by user code.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Root error type for all timer operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimerError {
    /// The timer stopped before the awaited tick fired
    ///
    /// Delivered to every pending `wait_triggered` future when the timer is
    /// stopped, or when the last handle to the timer is dropped.
    #[error("Timer stopped")]
    Stopped,

    /// The user callback returned an error during a tick
    #[error("Timer callback failed: {0}")]
    Callback(#[source] SharedError),

    /// The user callback panicked during a tick
    ///
    /// The panic is caught so the timer keeps its state machine intact.
    #[error("Timer callback panicked: {context}")]
    CallbackPanic {
        /// Panic message, when one could be recovered
        context: String,
    },

    /// The timer was configured with options that can never be satisfied
    #[error("Invalid timer options: {message}")]
    InvalidOptions {
        /// Description of the offending option
        message: String,
    },
}

impl TimerError {
    /// Wrap an error returned by a user callback
    pub fn callback_error(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self::Callback(Arc::from(error.into()))
    }

    /// Create an invalid options error with the given message
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Build a panic error from the payload returned by `catch_unwind`
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let context = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::CallbackPanic { context }
    }

    /// Returns `true` if the error reports that the timer stopped
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Returns `true` if the error came from the user callback
    #[must_use]
    pub const fn is_callback_failure(&self) -> bool {
        matches!(self, Self::Callback(_) | Self::CallbackPanic { .. })
    }

    /// The error returned by the user callback, if any
    #[must_use]
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Callback(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// Specialized Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
