//! Fault type for contract violations.
//!
//! Domain failures travel inside [`Outcome::Fail`] as ordinary values and
//! are never raised. A [`Fault`] is different: it marks programmer error —
//! unwrapping the wrong variant — and is the message behind the panic the
//! unwrap operations raise. The `try_unwrap` family returns it as a value
//! instead.
//!
//! [`Outcome::Fail`]: crate::outcome::Outcome::Fail

use std::fmt;

use thiserror::Error;

/// Contract violation raised when an unwrap targets the wrong variant.
///
/// The mismatched payload is stringified with `Debug` formatting at
/// construction time, so the fault itself stays payload-type free.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    /// `unwrap` was called on a failure.
    #[error("Error: {payload}")]
    UnwrapOnFail { payload: String },

    /// `unwrap_fail` was called on a success.
    #[error("Expected error, got {payload}")]
    UnwrapOnSuccess { payload: String },
}

impl Fault {
    /// Fault for an `unwrap` applied to a failure holding `payload`.
    pub fn unwrap_on_fail(payload: &impl fmt::Debug) -> Self {
        Self::UnwrapOnFail {
            payload: format!("{payload:?}"),
        }
    }

    /// Fault for an `unwrap_fail` applied to a success holding `payload`.
    pub fn unwrap_on_success(payload: &impl fmt::Debug) -> Self {
        Self::UnwrapOnSuccess {
            payload: format!("{payload:?}"),
        }
    }
}
