//! Convenience re-exports: `use outcome_core::prelude::*;`.

pub use crate::error::Fault;
pub use crate::ext::{IntoOutcome, OutcomeExt};
pub use crate::outcome::Outcome;
pub use crate::outcome::Outcome::{Fail, Success};
