//! The closed set of algebraic behaviors a symbol can have.

use std::fmt;
use std::str::FromStr;

use crate::error::AlgebraError;

/// The algebraic class of a [`Symbol`](crate::Symbol).
///
/// Variants are declared in ordering-rank order; the derived `Ord` is the
/// primary key of the symbol order. The hermitian behaviors (`Zero`, `One`,
/// `Real`) are invariant under conjugation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Behavior {
    /// The additive identity. Absorbs any product it appears in.
    Zero,
    /// The multiplicative identity. Dropped from any product it appears in.
    One,
    /// A commuting real scalar.
    Real,
    /// A commuting complex scalar.
    Complex,
    /// An annihilation-type operator obeying `a a* = a* a + 1` with its
    /// own conjugate.
    Annihilation,
}

impl Behavior {
    /// All behaviors, in rank order.
    pub const ALL: [Behavior; 5] = [
        Behavior::Zero,
        Behavior::One,
        Behavior::Real,
        Behavior::Complex,
        Behavior::Annihilation,
    ];

    /// Returns the position of this behavior in the rank order.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Returns true if symbols of this behavior are invariant under
    /// conjugation.
    #[must_use]
    pub const fn is_hermitian(self) -> bool {
        matches!(self, Behavior::Zero | Behavior::One | Behavior::Real)
    }

    /// Returns the lowercase name of the behavior.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Behavior::Zero => "zero",
            Behavior::One => "one",
            Behavior::Real => "real",
            Behavior::Complex => "complex",
            Behavior::Annihilation => "annihilation",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Behavior {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| AlgebraError::InvalidBehavior(s.to_owned()))
    }
}
