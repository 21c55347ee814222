//! # wick-normal
//!
//! The normal-ordering rewrite engine.
//!
//! Repeatedly applies the canonical commutation identity
//! `a a* = a* a + 1` to an [`Expression`](wick_algebra::Expression) until
//! every term is normal-ordered: per operator identity, all conjugated
//! occurrences precede all unconjugated ones. The rewrite preserves
//! algebraic equality and reaches a unique fixpoint; an iteration cap
//! guards against unanticipated cyclic behavior.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;

pub use engine::{normal_order, NormalOrderConfig, NormalOrderError, NormalOrderer};
