//! Canonicalized products of symbols.

use std::fmt;
use std::ops::Mul;

use smallvec::{smallvec, SmallVec};

use wick_core::{cmp_symbols, AlgebraError, Behavior, Symbol, SymbolBank};

/// Inline storage for the symbol sequence of a term.
type SymbolSeq = SmallVec<[Symbol; 4]>;

/// A canonicalized ordered product of symbols.
///
/// Construction enforces the canonical invariants:
/// - any zero constituent collapses the product to the single zero symbol;
/// - one constituents are dropped, and an empty product becomes one;
/// - the remaining symbols are stably sorted by the symbol order, which
///   preserves the relative placement of same-name operators (their order
///   is the non-commuting part of the product).
///
/// Terms are immutable; every transform returns a new term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    symbols: SymbolSeq,
}

impl Term {
    /// Builds the canonical term for a product of symbols.
    #[must_use]
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut symbols: SymbolSeq = symbols.into_iter().collect();
        if symbols.iter().any(Symbol::is_zero) {
            return Self::zero();
        }
        symbols.retain(|s| !s.is_one());
        if symbols.is_empty() {
            return Self::one();
        }
        symbols.sort_by(cmp_symbols);
        Self { symbols }
    }

    /// The zero term, the additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            symbols: smallvec![Symbol::zero()],
        }
    }

    /// The one term, the empty product.
    #[must_use]
    pub fn one() -> Self {
        Self {
            symbols: smallvec![Symbol::one()],
        }
    }

    /// Parses a term from space-separated `name[*][^power]` tokens.
    ///
    /// Tokens resolve against `bank` (implicitly extended with the `0`/`1`
    /// sentinels); a trailing `*` conjugates the resolved symbol and
    /// `^power` repeats it. An empty token stands for one.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::UnknownSymbol`] for names absent from the bank and
    /// [`AlgebraError::InvalidConstructorInput`] for malformed powers.
    pub fn parse(text: &str, bank: &SymbolBank) -> Result<Self, AlgebraError> {
        let mut symbols = Vec::new();
        for token in text.split_whitespace() {
            let (symbol, power) = parse_token(token, bank)?;
            symbols.extend(std::iter::repeat(symbol).take(power));
        }
        Ok(Self::new(symbols))
    }

    /// Returns the canonical symbol sequence, left to right.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns true if this is the zero term.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.symbols.len() == 1 && self.symbols[0].is_zero()
    }

    /// Returns true if this is the one term.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.symbols.len() == 1 && self.symbols[0].is_one()
    }

    /// Groups maximal runs of equal adjacent symbols into
    /// `(symbol, count)` pairs, in term order.
    #[must_use]
    pub fn group_runs(&self) -> Vec<(Symbol, usize)> {
        let mut runs: Vec<(Symbol, usize)> = Vec::new();
        for symbol in &self.symbols {
            match runs.last_mut() {
                Some((prev, count)) if prev == symbol => *count += 1,
                _ => runs.push((symbol.clone(), 1)),
            }
        }
        runs
    }

    /// Counts the symbols matching every given filter.
    #[must_use]
    pub fn count_matching(
        &self,
        name: Option<&str>,
        behavior: Option<Behavior>,
        conjugated: Option<bool>,
    ) -> usize {
        self.symbols
            .iter()
            .filter(|s| {
                name.map_or(true, |n| s.name() == n)
                    && behavior.map_or(true, |b| s.behavior() == b)
                    && conjugated.map_or(true, |c| s.is_conjugated() == c)
            })
            .count()
    }

    /// Counts the occurrences of an identity, either conjugation.
    #[must_use]
    pub fn count_identity(&self, identity: &Symbol) -> usize {
        self.symbols
            .iter()
            .filter(|s| s.same_identity(identity))
            .count()
    }

    /// The degree of the term: the number of complex and annihilation
    /// symbols it contains.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| matches!(s.behavior(), Behavior::Complex | Behavior::Annihilation))
            .count()
    }

    /// Returns the distinct identities present, each as an unconjugated
    /// symbol, in first-appearance order.
    #[must_use]
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        let mut seen: Vec<Symbol> = Vec::new();
        for symbol in &self.symbols {
            let unconjugated = symbol.unconjugated();
            if !seen.contains(&unconjugated) {
                seen.push(unconjugated);
            }
        }
        seen
    }

    /// Returns the dominant symbol: the identity of the highest-ranked
    /// behavior present, ties broken by smallest name, unconjugated.
    ///
    /// The zero and one terms have no dominant symbol.
    #[must_use]
    pub fn dominant_symbol(&self) -> Option<Symbol> {
        if self.is_zero() || self.is_one() {
            return None;
        }
        // Canonical order sorts by behavior rank then name, so the last
        // symbol carries the top behavior and the first symbol of that
        // behavior carries its smallest name.
        let top = self.symbols.last()?.behavior();
        self.symbols
            .iter()
            .find(|s| s.behavior() == top)
            .map(Symbol::unconjugated)
    }

    /// Returns a new term with every occurrence of the dominant identity
    /// removed, either conjugation.
    #[must_use]
    pub fn delete_dominant(&self) -> Self {
        match self.dominant_symbol() {
            Some(dominant) => Self::new(
                self.symbols
                    .iter()
                    .filter(|s| !s.same_identity(&dominant))
                    .cloned(),
            ),
            None => self.clone(),
        }
    }

    /// Returns the conjugate of the term: `(AB)* = B* A*`.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.symbols.iter().rev().map(Symbol::conj))
    }

    /// Returns true if every identity present is normal-ordered.
    #[must_use]
    pub fn is_normal_ordered(&self) -> bool {
        self.distinct_symbols()
            .iter()
            .all(|s| self.is_normal_ordered_for(s))
    }

    /// Returns true if the given identity's occurrences form a conjugated
    /// run followed by an unconjugated run.
    ///
    /// Only annihilation operators carry an ordering constraint; scalars
    /// commute with their conjugate, so any arrangement of them is
    /// normal-ordered.
    #[must_use]
    pub fn is_normal_ordered_for(&self, identity: &Symbol) -> bool {
        if identity.behavior() != Behavior::Annihilation {
            return true;
        }
        let mut seen_unconjugated = false;
        for symbol in self.symbols.iter().filter(|s| s.same_identity(identity)) {
            if symbol.is_conjugated() {
                if seen_unconjugated {
                    return false;
                }
            } else {
                seen_unconjugated = true;
            }
        }
        true
    }

    /// The conjugation marks of an identity's occurrences, in term order.
    pub(crate) fn conjugation_flags(&self, identity: &Symbol) -> Vec<bool> {
        self.symbols
            .iter()
            .filter(|s| s.same_identity(identity))
            .map(Symbol::is_conjugated)
            .collect()
    }
}

/// Parses one `name[*][^power]` token; the conjugation mark is also
/// accepted after the power.
fn parse_token(token: &str, bank: &SymbolBank) -> Result<(Symbol, usize), AlgebraError> {
    let mut rest = token;
    let mut conjugated = false;
    if let Some(stripped) = rest.strip_suffix('*') {
        conjugated = true;
        rest = stripped;
    }

    let (mut name, power) = match rest.split_once('^') {
        Some((name, power)) => {
            let power = power
                .parse::<usize>()
                .map_err(|_| AlgebraError::InvalidConstructorInput(token.to_owned()))?;
            (name, power)
        }
        None => (rest, 1),
    };
    if let Some(stripped) = name.strip_suffix('*') {
        conjugated = true;
        name = stripped;
    }

    if name.is_empty() {
        if conjugated {
            return Err(AlgebraError::UnknownSymbol(String::new()));
        }
        return Ok((Symbol::one(), power));
    }

    let symbol = bank
        .resolve(name)
        .ok_or_else(|| AlgebraError::UnknownSymbol(name.to_owned()))?;
    Ok((if conjugated { symbol.conj() } else { symbol }, power))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, count)) in self.group_runs().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
            if count > 1 {
                write!(f, "^{count}")?;
            }
        }
        Ok(())
    }
}

impl From<Symbol> for Term {
    fn from(symbol: Symbol) -> Self {
        Self::new([symbol])
    }
}

impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        Term::new(self.symbols.into_iter().chain(rhs.symbols))
    }
}

impl Mul<Symbol> for Term {
    type Output = Term;

    fn mul(self, rhs: Symbol) -> Term {
        self * Term::from(rhs)
    }
}

impl Mul<Term> for Symbol {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        Term::from(self) * rhs
    }
}
