//! Extension traits for `Outcome` and std `Result` interop.
//!
//! The logged helpers discard a failure while emitting a `tracing` event,
//! for call sites that want a fallback value without hand-writing the
//! match-and-log dance every time.

use std::fmt;

use crate::outcome::Outcome;

/// Logged fallback combinators for outcomes.
pub trait OutcomeExt<T, E> {
    /// Convert to an `Option`, logging the failure if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the success payload or a default, logging the failure if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: fmt::Display> OutcomeExt<T, E> for Outcome<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Fail(e) => {
                tracing::error!("operation failed: {e}");
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Fail(e) => {
                tracing::error!("operation failed, using default: {e}");
                default
            }
        }
    }
}

/// Conversion from std `Result` into [`Outcome`].
///
/// `From` impls cover the owned conversion in both directions; this trait
/// exists so the conversion reads left-to-right at the end of a `?`-style
/// pipeline.
pub trait IntoOutcome<T, E> {
    /// Convert `Ok`/`Err` into `Success`/`Fail`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for std::result::Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}
