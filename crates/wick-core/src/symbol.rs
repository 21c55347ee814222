//! The atomic symbol value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::behavior::Behavior;
use crate::error::AlgebraError;

/// A named scalar or operator appearing in a product.
///
/// A symbol is an immutable value: transforms such as [`Symbol::conj`]
/// return a new symbol. Equality follows the canonical text form, so all
/// zero symbols compare equal and all one symbols compare equal regardless
/// of the name they were built with.
#[derive(Clone, Debug)]
pub struct Symbol {
    name: String,
    behavior: Behavior,
    conjugated: bool,
}

impl Symbol {
    /// Creates a new unconjugated symbol.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidName`] if `name` is empty or contains
    /// whitespace.
    pub fn new(name: impl Into<String>, behavior: Behavior) -> Result<Self, AlgebraError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(AlgebraError::InvalidName(name));
        }
        Ok(Self {
            name,
            behavior,
            conjugated: false,
        })
    }

    /// Builds a symbol from a name known to be well-formed.
    pub(crate) fn new_unchecked(name: &str, behavior: Behavior) -> Self {
        Self {
            name: name.to_owned(),
            behavior,
            conjugated: false,
        }
    }

    /// The canonical zero sentinel, the additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self::new_unchecked("0", Behavior::Zero)
    }

    /// The canonical one sentinel, the multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self::new_unchecked("1", Behavior::One)
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbol's behavior class.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Returns true if the symbol carries a conjugation mark.
    #[must_use]
    pub fn is_conjugated(&self) -> bool {
        self.conjugated
    }

    /// Returns true if this symbol has the zero behavior.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.behavior == Behavior::Zero
    }

    /// Returns true if this symbol has the one behavior.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.behavior == Behavior::One
    }

    /// Returns the conjugate of this symbol.
    ///
    /// Hermitian behaviors are fixed points; everything else flips the
    /// conjugation mark. Applying `conj` twice always returns the original
    /// symbol.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            name: self.name.clone(),
            behavior: self.behavior,
            conjugated: !self.behavior.is_hermitian() && !self.conjugated,
        }
    }

    /// Returns this symbol with the conjugation mark cleared.
    #[must_use]
    pub fn unconjugated(&self) -> Self {
        Self {
            name: self.name.clone(),
            behavior: self.behavior,
            conjugated: false,
        }
    }

    /// Returns true if both symbols denote the same identity, ignoring
    /// conjugation.
    ///
    /// Identity is name plus behavior; for the zero and one sentinels the
    /// name is irrelevant, like everywhere else.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.behavior == other.behavior
            && (matches!(self.behavior, Behavior::Zero | Behavior::One)
                || self.name == other.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.behavior {
            Behavior::Zero => write!(f, "0"),
            Behavior::One => write!(f, "1"),
            _ => {
                write!(f, "{}", self.name)?;
                if self.conjugated {
                    write!(f, "*")?;
                }
                Ok(())
            }
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other) && self.conjugated == other.conjugated
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.behavior.hash(state);
        self.conjugated.hash(state);
        // Zero and one symbols are equal regardless of name.
        if !matches!(self.behavior, Behavior::Zero | Behavior::One) {
            self.name.hash(state);
        }
    }
}
