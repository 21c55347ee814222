//! The ordered symbol bank used by the text parsers.

use rustc_hash::FxHashSet;

use crate::behavior::Behavior;
use crate::error::AlgebraError;
use crate::symbol::Symbol;

/// An ordered collection of named symbols, unique by name.
///
/// Term and expression parsing resolve tokens against a bank. The bank is
/// implicitly extended with the `0` and `1` sentinels, so those names
/// always resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolBank {
    symbols: Vec<Symbol>,
}

impl SymbolBank {
    /// Creates a bank from an ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::AmbiguousBank`] if two symbols share a name.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, AlgebraError> {
        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol.name()) {
                return Err(AlgebraError::AmbiguousBank(symbol.name().to_owned()));
            }
        }
        Ok(Self { symbols })
    }

    /// Looks up a symbol by exact name.
    ///
    /// Falls back to the `0`/`1` sentinels when the bank itself does not
    /// define those names.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Symbol> {
        if let Some(symbol) = self.symbols.iter().find(|s| s.name() == name) {
            return Some(symbol.clone());
        }
        match name {
            "0" => Some(Symbol::zero()),
            "1" => Some(Symbol::one()),
            _ => None,
        }
    }

    /// Returns the bank's symbols in their declared order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Default for SymbolBank {
    /// The stock bank: `k`, `n`, `x` real, `xi`, `zeta`, `z` complex,
    /// `a`, `b` annihilation.
    fn default() -> Self {
        let symbols = vec![
            Symbol::new_unchecked("k", Behavior::Real),
            Symbol::new_unchecked("n", Behavior::Real),
            Symbol::new_unchecked("x", Behavior::Real),
            Symbol::new_unchecked("xi", Behavior::Complex),
            Symbol::new_unchecked("zeta", Behavior::Complex),
            Symbol::new_unchecked("z", Behavior::Complex),
            Symbol::new_unchecked("a", Behavior::Annihilation),
            Symbol::new_unchecked("b", Behavior::Annihilation),
        ];
        Self { symbols }
    }
}
