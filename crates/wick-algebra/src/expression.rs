//! Canonicalized sums of terms.

use std::fmt;
use std::ops::{Add, Mul};

use wick_core::{AlgebraError, Symbol, SymbolBank};

use crate::ordering::cmp_terms;
use crate::term::Term;

/// A canonicalized ordered sum of terms.
///
/// Terms are kept strictly decreasing in the term order; repetition
/// encodes integer multiplicity. Zero terms are dropped unless the sum
/// would be empty, in which case the expression is the single zero term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Builds the canonical expression for a sum of terms.
    #[must_use]
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut terms: Vec<Term> = terms.into_iter().collect();
        terms.sort_by(|a, b| cmp_terms(b, a));
        terms.retain(|t| !t.is_zero());
        if terms.is_empty() {
            terms.push(Term::zero());
        }
        Self { terms }
    }

    /// The zero expression, the empty sum.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::zero()],
        }
    }

    /// Parses an expression from `+`-delimited term texts.
    ///
    /// Each segment is trimmed and may start with an integer multiplicity:
    /// a bare integer stands for that many one terms, `"<k> <term>"` for
    /// `k` copies of the parsed term.
    ///
    /// # Errors
    ///
    /// Propagates term parsing errors;
    /// [`AlgebraError::InvalidConstructorInput`] for an unreadable
    /// multiplicity token.
    pub fn parse(text: &str, bank: &SymbolBank) -> Result<Self, AlgebraError> {
        if text.trim().is_empty() {
            return Ok(Self::zero());
        }
        let mut terms = Vec::new();
        for segment in text.split('+') {
            let (multiplicity, term_text) = split_multiplicity(segment.trim())?;
            let term = Term::parse(term_text, bank)?;
            terms.extend(std::iter::repeat(term).take(multiplicity));
        }
        Ok(Self::new(terms))
    }

    /// Returns the canonical term sequence, highest order first.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero expression.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_zero()
    }

    /// Returns the conjugate expression, conjugating every term.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.terms.iter().map(Term::conj))
    }
}

/// Splits an optional leading integer multiplicity off a trimmed segment.
fn split_multiplicity(segment: &str) -> Result<(usize, &str), AlgebraError> {
    let head = segment.split_whitespace().next().unwrap_or("");
    if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return Ok((1, segment));
    }
    let multiplicity = head
        .parse::<usize>()
        .map_err(|_| AlgebraError::InvalidConstructorInput(head.to_owned()))?;
    Ok((multiplicity, segment[head.len()..].trim_start()))
}

/// Distributes the product of two canonical term sequences, left factors
/// kept on the left.
fn distribute(lhs: &Expression, rhs: &Expression) -> Expression {
    let mut terms = Vec::with_capacity(lhs.terms.len() * rhs.terms.len());
    for left in &lhs.terms {
        for right in &rhs.terms {
            terms.push(left.clone() * right.clone());
        }
    }
    Expression::new(terms)
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut i = 0;
        while i < self.terms.len() {
            let term = &self.terms[i];
            let mut multiplicity = 1;
            while i + multiplicity < self.terms.len() && self.terms[i + multiplicity] == *term {
                multiplicity += 1;
            }
            if i > 0 {
                write!(f, " + ")?;
            }
            if multiplicity > 1 {
                if term.is_one() {
                    write!(f, "{multiplicity}")?;
                } else {
                    write!(f, "{multiplicity} {term}")?;
                }
            } else {
                write!(f, "{term}")?;
            }
            i += multiplicity;
        }
        Ok(())
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Self::new([term])
    }
}

impl From<Symbol> for Expression {
    fn from(symbol: Symbol) -> Self {
        Self::from(Term::from(symbol))
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        Expression::new(self.terms.into_iter().chain(rhs.terms))
    }
}

impl Add<Term> for Expression {
    type Output = Expression;

    fn add(self, rhs: Term) -> Expression {
        self + Expression::from(rhs)
    }
}

impl Add<Symbol> for Expression {
    type Output = Expression;

    fn add(self, rhs: Symbol) -> Expression {
        self + Expression::from(rhs)
    }
}

impl Add<Expression> for Term {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        Expression::from(self) + rhs
    }
}

impl Add<Expression> for Symbol {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        Expression::from(self) + rhs
    }
}

impl Add for Term {
    type Output = Expression;

    fn add(self, rhs: Term) -> Expression {
        Expression::new([self, rhs])
    }
}

impl Add<Symbol> for Term {
    type Output = Expression;

    fn add(self, rhs: Symbol) -> Expression {
        self + Term::from(rhs)
    }
}

impl Add<Term> for Symbol {
    type Output = Expression;

    fn add(self, rhs: Term) -> Expression {
        Term::from(self) + rhs
    }
}

impl Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        distribute(&self, &rhs)
    }
}

impl Mul<Term> for Expression {
    type Output = Expression;

    fn mul(self, rhs: Term) -> Expression {
        distribute(&self, &Expression::from(rhs))
    }
}

impl Mul<Symbol> for Expression {
    type Output = Expression;

    fn mul(self, rhs: Symbol) -> Expression {
        distribute(&self, &Expression::from(rhs))
    }
}

impl Mul<Expression> for Term {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        distribute(&Expression::from(self), &rhs)
    }
}

impl Mul<Expression> for Symbol {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        distribute(&Expression::from(self), &rhs)
    }
}
