//! The `Outcome` container type and its combinators.
//!
//! `Outcome<T, E>` carries either a success payload or a failure payload and
//! never both. Failures flow through the combinators as ordinary values, so
//! a pipeline of fallible steps composes without any step after the first
//! failure being executed.

use std::future::Future;

use crate::error::Fault;

/// A discriminated success-or-error container.
///
/// Exactly one of the two variants holds for every instance. The variants
/// are the only constructors; combinators consume the receiver and build
/// fresh values, never mutating a payload in place.
///
/// # Examples
///
/// ```
/// use outcome_core::{Fail, Outcome, Success};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, String> {
///     if b == 0 {
///         Fail("divisor cannot be 0".to_string())
///     } else {
///         Success(a / b)
///     }
/// }
///
/// assert_eq!(divide(1, 1).map(|x| x + 2).unwrap(), 3);
/// assert!(divide(1, 0).is_fail());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Holds the success payload.
    Success(T),
    /// Holds the failure payload.
    Fail(E),
}

use self::Outcome::{Fail, Success};

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is the success variant.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if this is the failure variant.
    #[inline]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Fail(_))
    }

    /// Returns `true` if this is a success holding a payload equal to
    /// `value`.
    ///
    /// Comparison is value equality, never identity: two independently
    /// constructed successes wrapping equal payloads both match.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Success(v) if v == value)
    }

    /// Returns `true` if this is a failure holding a payload equal to
    /// `error`.
    #[inline]
    pub fn contains_fail(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(self, Fail(e) if e == error)
    }

    /// Converts into an `Option` over the success payload, discarding a
    /// failure.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Success(v) => Some(v),
            Fail(_) => None,
        }
    }

    /// Converts into an `Option` over the failure payload, discarding a
    /// success.
    #[inline]
    pub fn fail(self) -> Option<E> {
        match self {
            Success(_) => None,
            Fail(e) => Some(e),
        }
    }

    /// Borrows the payload, leaving the receiver in place.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Success(ref v) => Success(v),
            Fail(ref e) => Fail(e),
        }
    }

    /// Applies `f` to a success payload, passing a failure through
    /// untouched.
    ///
    /// ```
    /// use outcome_core::{Fail, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(1);
    /// assert_eq!(x.map(|v| v + 2), Success(3));
    ///
    /// let y: Outcome<i32, &str> = Fail("nope");
    /// assert_eq!(y.map(|v| v + 2), Fail("nope"));
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(v) => Success(f(v)),
            Fail(e) => Fail(e),
        }
    }

    /// Applies `f` to a failure payload, passing a success through
    /// untouched.
    #[inline]
    pub fn map_fail<F, O: FnOnce(E) -> F>(self, f: O) -> Outcome<T, F> {
        match self {
            Success(v) => Success(v),
            Fail(e) => Fail(f(e)),
        }
    }

    /// Maps both sides in one operation; equivalent to `map(f).map_fail(g)`.
    #[inline]
    pub fn map_both<U, F, S, O>(self, on_success: S, on_fail: O) -> Outcome<U, F>
    where
        S: FnOnce(T) -> U,
        O: FnOnce(E) -> F,
    {
        match self {
            Success(v) => Success(on_success(v)),
            Fail(e) => Fail(on_fail(e)),
        }
    }

    /// Applies `f` to a success payload, or returns `default` on failure.
    ///
    /// `default` is an eagerly supplied value; `f` is never invoked on
    /// failure and `default` is never consulted on success.
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Success(v) => f(v),
            Fail(_) => default,
        }
    }

    /// Folds both sides to a single value.
    ///
    /// Argument order is (success handler, failure handler).
    #[inline]
    pub fn map_or_else<U, S, O>(self, on_success: S, on_fail: O) -> U
    where
        S: FnOnce(T) -> U,
        O: FnOnce(E) -> U,
    {
        match self {
            Success(v) => on_success(v),
            Fail(e) => on_fail(e),
        }
    }

    /// Returns `other` on success, or the receiver's failure unchanged.
    ///
    /// `other` is eagerly evaluated at the call site; use [`and_then`] when
    /// the second step's side effects must be skipped after a failure.
    ///
    /// [`and_then`]: Outcome::and_then
    ///
    /// ```
    /// use outcome_core::{Fail, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(1);
    /// assert_eq!(x.and(Success::<_, &str>(9)).unwrap(), 9);
    /// assert_eq!(Success::<i32, &str>(1).and(Fail::<i32, _>("x")).unwrap_fail(), "x");
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Fail(e) => Fail(e),
        }
    }

    /// Calls `f` with a success payload, or short-circuits a failure; the
    /// lazy counterpart of [`and`].
    ///
    /// [`and`]: Outcome::and
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(v) => f(v),
            Fail(e) => Fail(e),
        }
    }

    /// Returns the receiver's success unchanged, or `other` on failure.
    ///
    /// `other` is eagerly evaluated at the call site; use [`or_else`] for
    /// the lazy form.
    ///
    /// [`or_else`]: Outcome::or_else
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(v) => Success(v),
            Fail(_) => other,
        }
    }

    /// Calls `f` with a failure payload, or passes a success through; the
    /// lazy counterpart of [`or`].
    ///
    /// [`or`]: Outcome::or
    #[inline]
    pub fn or_else<F, O: FnOnce(E) -> Outcome<T, F>>(self, f: O) -> Outcome<T, F> {
        match self {
            Success(v) => Success(v),
            Fail(e) => f(e),
        }
    }

    /// Runs `f` on a success payload by reference, returning the receiver
    /// unchanged.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Success(ref v) = self {
            f(v);
        }
        self
    }

    /// Runs `f` on a failure payload by reference, returning the receiver
    /// unchanged.
    #[inline]
    pub fn inspect_fail<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Fail(ref e) = self {
            f(e);
        }
        self
    }

    /// Returns the success payload, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(v) => v,
            Fail(_) => default,
        }
    }

    /// Returns the success payload, or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Success(v) => v,
            Fail(e) => f(e),
        }
    }

    /// Invokes exactly one of the two actions with the payload of the
    /// matching variant; the other action is never invoked. Return values
    /// of the actions are discarded.
    #[inline]
    pub fn handle<R, S, F, G>(self, on_success: F, on_fail: G)
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> S,
    {
        match self {
            Success(v) => {
                let _ = on_success(v);
            }
            Fail(e) => {
                let _ = on_fail(e);
            }
        }
    }

    /// Asynchronous counterpart of [`handle`]: constructs and awaits the
    /// future produced by exactly one of the two actions.
    ///
    /// The non-matching action is never invoked, so its future is never
    /// constructed. The returned future completes only after the invoked
    /// action's future completes; a panic inside it propagates to the
    /// caller.
    ///
    /// [`handle`]: Outcome::handle
    pub async fn handle_async<F, G, FutS, FutF>(self, on_success: F, on_fail: G)
    where
        F: FnOnce(T) -> FutS,
        G: FnOnce(E) -> FutF,
        FutS: Future,
        FutF: Future,
    {
        match self {
            Success(v) => {
                let _ = on_success(v).await;
            }
            Fail(e) => {
                let _ = on_fail(e).await;
            }
        }
    }
}

impl<T, E: std::fmt::Debug> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `Error: {payload}` (the failure payload stringified via
    /// `Debug`) when called on a failure. This is a contract violation, not
    /// a recoverable condition; see [`try_unwrap`] for the value-returning
    /// form.
    ///
    /// [`try_unwrap`]: Outcome::try_unwrap
    #[inline]
    #[allow(clippy::panic)]
    pub fn unwrap(self) -> T {
        match self {
            Success(v) => v,
            Fail(e) => panic!("{}", Fault::unwrap_on_fail(&e)),
        }
    }

    /// Returns the success payload, or the [`Fault`] that [`unwrap`] would
    /// have panicked with.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnwrapOnFail`] when called on a failure.
    ///
    /// [`unwrap`]: Outcome::unwrap
    #[inline]
    pub fn try_unwrap(self) -> Result<T, Fault> {
        match self {
            Success(v) => Ok(v),
            Fail(e) => Err(Fault::unwrap_on_fail(&e)),
        }
    }
}

impl<T: std::fmt::Debug, E> Outcome<T, E> {
    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `Expected error, got {payload}` (the success payload
    /// stringified via `Debug`) when called on a success.
    #[inline]
    #[allow(clippy::panic)]
    pub fn unwrap_fail(self) -> E {
        match self {
            Success(v) => panic!("{}", Fault::unwrap_on_success(&v)),
            Fail(e) => e,
        }
    }

    /// Returns the failure payload, or the [`Fault`] that [`unwrap_fail`]
    /// would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnwrapOnSuccess`] when called on a success.
    ///
    /// [`unwrap_fail`]: Outcome::unwrap_fail
    #[inline]
    pub fn try_unwrap_fail(self) -> Result<E, Fault> {
        match self {
            Success(v) => Err(Fault::unwrap_on_success(&v)),
            Fail(e) => Ok(e),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(v) => Success(v),
            Err(e) => Fail(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(v) => Ok(v),
            Fail(e) => Err(e),
        }
    }
}
