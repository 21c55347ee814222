//! # wick-core
//!
//! Symbol layer of the wick operator algebra.
//!
//! This crate provides:
//! - The closed [`Behavior`] enumeration classifying symbols
//! - The immutable [`Symbol`] value type with its conjugation involution
//! - The strict total order [`cmp_symbols`] used by term canonicalization
//! - The [`SymbolBank`] that text parsers resolve names against
//!
//! ## Design Principles
//!
//! - **Value semantics**: symbols are small immutable values, compared by
//!   canonical text form rather than identity
//! - **Closed behavior set**: the behavior enumeration is exhaustive, so
//!   per-behavior rules (hermitian conjugation, ordering rank) are checked
//!   at compile time

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bank;
pub mod behavior;
pub mod error;
pub mod ordering;
pub mod symbol;

pub use bank::SymbolBank;
pub use behavior::Behavior;
pub use error::AlgebraError;
pub use ordering::cmp_symbols;
pub use symbol::Symbol;
