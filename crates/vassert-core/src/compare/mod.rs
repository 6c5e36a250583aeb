//! Structural value comparator.
//!
//! Compares two [`Value`](crate::value::Value)s either shallowly (identity or
//! primitive equality) or deeply (recursive structural walk), producing a
//! [`ComparisonResult`] with one [`Mismatch`] per leaf disagreement.
//!
//! ## Entry point
//!
//! ```
//! use vassert_core::compare::{compare, Mode};
//! use vassert_core::value::Value;
//!
//! let got = Value::record("T", [("V", Value::seq(["1", "2"]))]);
//! let want = Value::record("T", [("V", Value::seq(["1", "3"]))]);
//!
//! let result = compare(&got, &want, Mode::Deep);
//! assert_eq!(result.mismatches[0].path.to_string(), "V[1]");
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: the walk never stops at the first mismatch unless a
//!   mismatch limit is configured.
//! - **Determinism**: records are walked in declaration order, sequences in
//!   index order and mappings in sorted key order.
//! - **No failure path**: irregular inputs degrade to leaf mismatches.

pub mod engine;
pub mod model;

pub use engine::{compare, compare_with, is_nil, is_not_nil, shallow_equal};
pub use model::{Check, ComparisonResult, Mismatch, MismatchKind, Mode};
