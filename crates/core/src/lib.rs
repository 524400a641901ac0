//! Success-or-error container with railway-oriented combinators.
//!
//! [`Outcome<T, E>`] is a closed sum type over exactly two variants —
//! `Success(T)` and `Fail(E)` — so recoverable failures travel as ordinary
//! values checked by the type system instead of as unwound exceptions. Key
//! pieces:
//!
//! - **Combinators**: `map`, `map_fail`, `and_then`, `or_else` and friends
//!   compose fallible steps; once a step fails, downstream steps never run.
//! - **Handling**: `handle` / `handle_async` dispatch exactly one of two
//!   caller-supplied actions by variant.
//! - **Faults**: only `unwrap` / `unwrap_fail` can panic, and only when
//!   applied to the wrong variant; [`Fault`] carries the message and the
//!   `try_unwrap` family returns it as a value.
//!
//! # Example
//!
//! ```
//! use outcome_core::{Fail, Outcome, Success};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, String> {
//!     if b == 0 {
//!         Fail("divisor cannot be 0".to_string())
//!     } else {
//!         Success(a / b)
//!     }
//! }
//!
//! let doubled = divide(10, 2)
//!     .map(|v| v * 2)
//!     .map_fail(|e| e.to_uppercase());
//! assert_eq!(doubled, Success(10));
//!
//! divide(1, 0).handle(
//!     |v| println!("got {v}"),
//!     |e| eprintln!("failed: {e}"),
//! );
//! ```

pub mod error;
pub mod ext;
pub mod outcome;
pub mod prelude;

pub use error::Fault;
pub use ext::{IntoOutcome, OutcomeExt};
pub use outcome::Outcome;
pub use outcome::Outcome::{Fail, Success};
