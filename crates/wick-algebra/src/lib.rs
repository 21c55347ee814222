//! # wick-algebra
//!
//! Term and expression layer of the wick operator algebra.
//!
//! This crate provides:
//! - [`Term`]: a canonicalized ordered product of symbols
//! - [`cmp_terms`]: the recursive total order over terms
//! - [`Expression`]: a canonicalized ordered sum of terms with
//!   distributive multiplication
//! - Bidirectional text forms for both, resolved against a
//!   [`SymbolBank`](wick_core::SymbolBank)
//!
//! Canonical form is the load-bearing property: once a term or expression
//! is constructed, structural equality coincides with algebraic equality
//! (up to the commutation identity, which the `wick-normal` crate
//! eliminates).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expression;
pub mod ordering;
pub mod term;

#[cfg(test)]
mod proptests;

pub use expression::Expression;
pub use ordering::cmp_terms;
pub use term::Term;
