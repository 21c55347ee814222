//! The normal-ordering fixpoint loop.
//!
//! One rewrite step finds the first term violating normal order, locates
//! the leftmost adjacent `(a, a*)` pair of the violating identity and
//! replaces the term with its expansion under `a a* = a* a + 1`, fully
//! distributed and spliced back into the canonical term sequence. Each
//! step removes one inversion of the rewritten term's operator multiset
//! (at the cost of a shorter correction term), so the loop converges the
//! way a bubble sort does.

use thiserror::Error;

use wick_algebra::{Expression, Term};
use wick_core::Behavior;

/// Errors raised by the rewrite engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormalOrderError {
    /// The fixpoint loop did not converge within the configured cap.
    #[error("normal ordering did not converge within {0} iterations")]
    IterationLimit(usize),
}

/// Configuration for the rewrite engine.
#[derive(Clone, Copy, Debug)]
pub struct NormalOrderConfig {
    /// Maximum number of rewrite steps before giving up.
    pub iter_limit: usize,
}

impl Default for NormalOrderConfig {
    fn default() -> Self {
        Self { iter_limit: 10_000 }
    }
}

/// The normal-ordering rewrite engine.
#[derive(Clone, Debug, Default)]
pub struct NormalOrderer {
    config: NormalOrderConfig,
}

impl NormalOrderer {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: NormalOrderConfig) -> Self {
        Self { config }
    }

    /// Rewrites an expression until every term is normal-ordered.
    ///
    /// The result is algebraically equal to the input and is its unique
    /// normal form.
    ///
    /// # Errors
    ///
    /// [`NormalOrderError::IterationLimit`] if the fixpoint is not
    /// reached within the configured number of steps.
    pub fn normal_order(&self, expr: &Expression) -> Result<Expression, NormalOrderError> {
        let mut current = expr.clone();
        for _ in 0..self.config.iter_limit {
            let violating = current
                .terms()
                .iter()
                .position(|t| !t.is_normal_ordered());
            let Some(index) = violating else {
                return Ok(current);
            };
            current = rewrite_first_violation(&current, index);
        }
        if current.terms().iter().all(Term::is_normal_ordered) {
            return Ok(current);
        }
        Err(NormalOrderError::IterationLimit(self.config.iter_limit))
    }
}

/// Applies one commutation step to the term at `index`.
///
/// The violating pair is the leftmost adjacent `(unconjugated,
/// conjugated)` pair of a single operator identity; canonical sorting
/// keeps each identity's occurrences contiguous, so a term that violates
/// normal order always exposes such a pair.
fn rewrite_first_violation(expr: &Expression, index: usize) -> Expression {
    let terms = expr.terms();
    let symbols = terms[index].symbols();

    let pair_at = symbols.windows(2).position(|pair| {
        pair[0].behavior() == Behavior::Annihilation
            && pair[0].same_identity(&pair[1])
            && !pair[0].is_conjugated()
            && pair[1].is_conjugated()
    });
    let Some(j) = pair_at else {
        // Unreachable for canonical terms; returning the input unchanged
        // lets the iteration cap report the anomaly.
        return expr.clone();
    };

    let before = Term::new(symbols[..j].iter().cloned());
    let after = Term::new(symbols[j + 2..].iter().cloned());
    let swapped = Term::new([symbols[j + 1].clone(), symbols[j].clone()]);

    // before * (s2 s1 + 1) * after, fully distributed.
    let expansion = before * Expression::new([swapped, Term::one()]) * after;

    let spliced = terms[..index]
        .iter()
        .cloned()
        .chain(expansion.terms().iter().cloned())
        .chain(terms[index + 1..].iter().cloned());
    Expression::new(spliced)
}

/// Normal-orders an expression with the default configuration.
///
/// # Errors
///
/// [`NormalOrderError::IterationLimit`] if the fixpoint is not reached
/// within the default cap.
pub fn normal_order(expr: &Expression) -> Result<Expression, NormalOrderError> {
    NormalOrderer::new().normal_order(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wick_core::SymbolBank;

    fn expr(text: &str) -> Expression {
        Expression::parse(text, &SymbolBank::default()).unwrap()
    }

    fn ordered(text: &str) -> Expression {
        normal_order(&expr(text)).unwrap()
    }

    #[test]
    fn test_single_inversion() {
        assert_eq!(ordered("a a*"), expr("a* a + 1"));
        assert_eq!(ordered("a a*").to_string(), "a* a + 1");
    }

    #[test]
    fn test_longer_word() {
        assert_eq!(ordered("a* a* a a* a a a"), expr("a*^3 a^4 + a*^2 a^3"));
        assert_eq!(
            ordered("a* a* a a* a a a").to_string(),
            "a*^3 a^4 + a*^2 a^3"
        );
    }

    #[test]
    fn test_word_with_multiplicities() {
        assert_eq!(
            ordered("a a* a a*^2 a"),
            expr("a*^3 a^3 + 5 a*^2 a^2 + 4 a* a")
        );
        assert_eq!(
            ordered("a a* a a*^2 a").to_string(),
            "a*^3 a^3 + 5 a*^2 a^2 + 4 a* a"
        );
    }

    #[test]
    fn test_scalar_factors_carry_through() {
        assert_eq!(ordered("k xi a a*"), expr("k xi a* a + k xi"));
    }

    #[test]
    fn test_independent_modes() {
        assert_eq!(ordered("a b b*"), expr("a b* b + a"));
        assert_eq!(ordered("a a* b b*"), expr("a* a b* b + a* a + b* b + 1"));
    }

    #[test]
    fn test_already_normal_is_fixpoint() {
        let inputs = ["a* a", "a*^2 a^3 + x", "z z* + 1", "0"];
        for text in inputs {
            assert_eq!(ordered(text), expr(text));
        }
    }

    #[test]
    fn test_idempotent() {
        let once = ordered("a a* a a*^2 a");
        assert_eq!(normal_order(&once).unwrap(), once);
    }

    #[test]
    fn test_every_term_normal_ordered() {
        let result = ordered("a a* a a* + b b* a a* + z* z a a*");
        assert!(result.terms().iter().all(Term::is_normal_ordered));
    }

    #[test]
    fn test_sum_rewrites_termwise() {
        assert_eq!(ordered("a a* + a a*"), expr("2 a* a + 2"));
        assert_eq!(ordered("a a* + x"), expr("a* a + x + 1"));
    }

    #[test]
    fn test_iteration_limit() {
        let engine = NormalOrderer::with_config(NormalOrderConfig { iter_limit: 1 });
        let err = engine.normal_order(&expr("a a a*^2"));
        assert_eq!(err, Err(NormalOrderError::IterationLimit(1)));
    }

    #[test]
    fn test_conjugation_commutes_with_ordering() {
        let e = expr("a a* a");
        assert_eq!(
            normal_order(&e.conj()).unwrap(),
            normal_order(&e).unwrap().conj()
        );
    }
}
