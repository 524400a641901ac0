//! Property-based tests for the `Outcome` combinators.
//!
//! Uses proptest to validate:
//! - Functor laws on both the success and failure sides
//! - `map_both` coherence with sequential `map` + `map_fail`
//! - Short-circuiting of the binary combinators
//! - Value-equality semantics of the contains family

#![allow(clippy::unwrap_used)]

use std::cell::Cell;

use outcome_core::Outcome;
use outcome_core::Outcome::{Fail, Success};
use proptest::prelude::*;

proptest! {
    /// Property: mapping twice equals mapping the composition.
    #[test]
    fn prop_map_composition(v in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let f = move |x: i32| x.wrapping_add(a);
        let g = move |x: i32| x.wrapping_mul(b);

        let sequential = Success::<i32, String>(v).map(f).map(g);
        let composed = Success::<i32, String>(v).map(move |x| g(f(x)));
        prop_assert_eq!(sequential, composed);
    }

    /// Property: `map` leaves a failure untouched and never runs the mapper.
    #[test]
    fn prop_map_leaves_fail_untouched(e in ".*") {
        let invoked = Cell::new(false);
        let out = Fail::<i32, String>(e.clone()).map(|x| {
            invoked.set(true);
            x
        });
        prop_assert!(!invoked.get());
        prop_assert_eq!(out, Fail(e));
    }

    /// Property: `map_fail` leaves a success untouched and never runs the
    /// mapper.
    #[test]
    fn prop_map_fail_leaves_success_untouched(v in any::<i32>()) {
        let invoked = Cell::new(false);
        let out = Success::<i32, String>(v).map_fail(|e| {
            invoked.set(true);
            e
        });
        prop_assert!(!invoked.get());
        prop_assert_eq!(out, Success(v));
    }

    /// Property: `map_both` equals sequential `map` then `map_fail`, on
    /// either variant.
    #[test]
    fn prop_map_both_coherence(v in any::<i32>(), e in ".*", take_success in any::<bool>()) {
        let on_ok = |x: i32| x.wrapping_mul(2);
        let on_err = |s: String| s.len();

        let outcome: Outcome<i32, String> = if take_success {
            Success(v)
        } else {
            Fail(e)
        };

        prop_assert_eq!(
            outcome.clone().map_both(on_ok, on_err),
            outcome.map(on_ok).map_fail(on_err)
        );
    }

    /// Property: `and` forwards `other` on success and the receiver's own
    /// failure otherwise.
    #[test]
    fn prop_and_table(v in any::<i32>(), w in any::<i32>(), e in ".*", f in ".*") {
        prop_assert_eq!(
            Success::<i32, String>(v).and(Success(w)),
            Success::<i32, String>(w)
        );
        prop_assert_eq!(
            Success::<i32, String>(v).and(Fail(f.clone())),
            Fail::<i32, String>(f.clone())
        );
        prop_assert_eq!(
            Fail::<i32, String>(e.clone()).and(Success(w)),
            Fail::<i32, String>(e.clone())
        );
        prop_assert_eq!(
            Fail::<i32, String>(e.clone()).and(Fail(f)),
            Fail::<i32, String>(e)
        );
    }

    /// Property: `or` forwards the receiver's success and `other` otherwise.
    #[test]
    fn prop_or_table(v in any::<i32>(), w in any::<i32>(), e in ".*", f in ".*") {
        prop_assert_eq!(
            Success::<i32, String>(v).or(Success::<i32, String>(w)),
            Success::<i32, String>(v)
        );
        prop_assert_eq!(
            Success::<i32, String>(v).or(Fail::<i32, String>(f.clone())),
            Success::<i32, String>(v)
        );
        prop_assert_eq!(
            Fail::<i32, String>(e.clone()).or(Success::<i32, String>(w)),
            Success::<i32, String>(w)
        );
        prop_assert_eq!(
            Fail::<i32, String>(e).or(Fail::<i32, String>(f.clone())),
            Fail::<i32, String>(f)
        );
    }

    /// Property: `and_then` runs the step exactly once on success and never
    /// on failure.
    #[test]
    fn prop_and_then_short_circuits(v in any::<i32>(), e in ".*") {
        let calls = Cell::new(0u32);
        let step = |x: i32| {
            calls.set(calls.get() + 1);
            Success::<i32, String>(x)
        };

        prop_assert_eq!(Success::<i32, String>(v).and_then(step), Success(v));
        prop_assert_eq!(calls.get(), 1);

        prop_assert_eq!(Fail::<i32, String>(e.clone()).and_then(step), Fail(e));
        prop_assert_eq!(calls.get(), 1);
    }

    /// Property: `map_or` returns the default on failure without running the
    /// mapper, and the mapped value on success without consulting the
    /// default.
    #[test]
    fn prop_map_or(v in any::<i32>(), d in any::<i32>(), e in ".*") {
        let invoked = Cell::new(false);
        let out = Fail::<i32, String>(e).map_or(d, |x| {
            invoked.set(true);
            x
        });
        prop_assert!(!invoked.get());
        prop_assert_eq!(out, d);

        prop_assert_eq!(
            Success::<i32, String>(v).map_or(d, |x| x.wrapping_add(1)),
            v.wrapping_add(1)
        );
    }

    /// Property: `contains` matches any independently constructed success
    /// wrapping an equal payload.
    #[test]
    fn prop_contains_value_equality(v in any::<i32>(), w in any::<i32>()) {
        let a = Success::<i32, String>(v);
        let b = Success::<i32, String>(v);
        prop_assert!(a.contains(&v));
        prop_assert!(b.contains(&v));
        prop_assert_eq!(a.contains(&w), v == w);
        prop_assert!(!Fail::<i32, String>("e".to_string()).contains(&v));
    }

    /// Property: `contains_fail` is the symmetric check on the failure side.
    #[test]
    fn prop_contains_fail_value_equality(e in ".*", f in ".*") {
        let a = Fail::<i32, String>(e.clone());
        prop_assert!(a.contains_fail(&e));
        prop_assert_eq!(a.contains_fail(&f), e == f);
        prop_assert!(!Success::<i32, String>(1).contains_fail(&e));
    }

    /// Property: converting to std `Result` and back is the identity.
    #[test]
    fn prop_std_result_round_trip(v in any::<i32>(), e in ".*", take_success in any::<bool>()) {
        let outcome: Outcome<i32, String> = if take_success {
            Success(v)
        } else {
            Fail(e)
        };
        let through: Outcome<i32, String> =
            std::result::Result::from(outcome.clone()).into();
        prop_assert_eq!(through, outcome);
    }
}
