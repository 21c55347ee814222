//! # Wick
//!
//! Canonicalization and normal ordering for bosonic operator algebra.
//!
//! Wick manipulates products of commuting scalars and non-commuting
//! annihilation-type operators, as they appear in bosonic perturbation
//! calculations:
//!
//! - every product is placed into one canonical form, so structural
//!   equality coincides with algebraic equality;
//! - expressions containing order-violating `a a*` pairs are rewritten
//!   into an equivalent normal-ordered sum by repeated application of the
//!   commutation identity `a a* = a* a + 1`.
//!
//! ## Quick Start
//!
//! ```rust
//! use wick::prelude::*;
//!
//! let bank = SymbolBank::default();
//! let expr = Expression::parse("a a* a a*^2 a", &bank)?;
//! let ordered = normal_order(&expr)?;
//! assert_eq!(ordered.to_string(), "a*^3 a^3 + 5 a*^2 a^2 + 4 a* a");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use wick_algebra::{cmp_terms, Expression, Term};
pub use wick_core::{cmp_symbols, AlgebraError, Behavior, Symbol, SymbolBank};
pub use wick_normal::{normal_order, NormalOrderConfig, NormalOrderError, NormalOrderer};

/// Convenience re-exports for consumers of the full kernel.
pub mod prelude {
    pub use wick_algebra::{Expression, Term};
    pub use wick_core::{AlgebraError, Behavior, Symbol, SymbolBank};
    pub use wick_normal::{normal_order, NormalOrderer};
}
