//! The recursive total order over terms.
//!
//! Read `a < b` as "a is naturally written to the right of b": expressions
//! display their highest-order term first. The comparator is an ordered
//! chain of rules that stops at the first discriminator and recurses on
//! the residual terms once the dominant identity is exhausted.

use std::cmp::Ordering;

use wick_core::{AlgebraError, Symbol};

use crate::term::Term;

/// Compares two canonical terms.
///
/// Rule chain, stopping at the first discriminator:
/// 1. zero sorts below everything, one below everything but zero;
/// 2. degree (complex + annihilation symbol count), lower sorts lower;
/// 3. the dominant symbol's behavior rank;
/// 4. occurrence count of the dominant identity, either conjugation;
/// 5. the dominant identity's name, reverse lexicographic;
/// 6. conjugated occurrence count of the dominant identity;
/// 7. normalness of the dominant identity's occurrence pattern, the more
///    normal-ordered term sorting higher;
/// 8. recursion on both terms with the dominant identity deleted.
///
/// Rules 4 and 6 guarantee equal occurrence counts before rule 7 runs, so
/// the comparator itself is pure; the count guard is only observable
/// through [`Term::normalness_cmp`].
#[must_use]
pub fn cmp_terms(a: &Term, b: &Term) -> Ordering {
    match (a.is_zero(), b.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match (a.is_one(), b.is_one()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    match a.degree().cmp(&b.degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    let (Some(dom_a), Some(dom_b)) = (a.dominant_symbol(), b.dominant_symbol()) else {
        // Zero and one terms were handled above; everything else has a
        // dominant symbol.
        return Ordering::Equal;
    };

    match dom_a.behavior().cmp(&dom_b.behavior()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match a.count_identity(&dom_a).cmp(&b.count_identity(&dom_b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Later name sorts lower.
    match dom_b.name().cmp(dom_a.name()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    let dags_a = a.count_matching(Some(dom_a.name()), Some(dom_a.behavior()), Some(true));
    let dags_b = b.count_matching(Some(dom_b.name()), Some(dom_b.behavior()), Some(true));
    match dags_a.cmp(&dags_b) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match normalness(a, b, &dom_a) {
        Ordering::Equal => {}
        ord => return ord,
    }

    cmp_terms(&a.delete_dominant(), &b.delete_dominant())
}

/// Walks matching occurrences of `identity` position by position; at the
/// first conjugation mismatch, the term showing the conjugated occurrence
/// is more normal and sorts higher.
///
/// Callers must have established equal occurrence counts.
fn normalness(a: &Term, b: &Term, identity: &Symbol) -> Ordering {
    let flags_a = a.conjugation_flags(identity);
    let flags_b = b.conjugation_flags(identity);
    for (flag_a, flag_b) in flags_a.into_iter().zip(flags_b) {
        match (flag_a, flag_b) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }
    }
    Ordering::Equal
}

impl Term {
    /// Compares how well two terms respect normal order for one identity.
    ///
    /// Returns `Greater` if `self` is more normal-ordered than `other`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::OrderMismatch`] if the two terms do not contain the
    /// identity the same number of times.
    pub fn normalness_cmp(
        &self,
        other: &Term,
        identity: &Symbol,
    ) -> Result<Ordering, AlgebraError> {
        if self.count_identity(identity) != other.count_identity(identity) {
            return Err(AlgebraError::OrderMismatch(identity.name().to_owned()));
        }
        Ok(normalness(self, other, identity))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_terms(self, other)
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wick_core::SymbolBank;

    fn term(text: &str) -> Term {
        Term::parse(text, &SymbolBank::default()).unwrap()
    }

    #[test]
    fn test_sentinel_chain() {
        // 0 < 1 < x < z < a for real x, complex z, annihilation a.
        let chain = [term("0"), term("1"), term("x"), term("z"), term("a")];
        for window in chain.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[1] > window[0]);
        }
        assert_eq!(cmp_terms(&term("0"), &term("0")), Ordering::Equal);
        assert_eq!(cmp_terms(&term("1"), &term("1")), Ordering::Equal);
    }

    #[test]
    fn test_degree_rule() {
        assert!(term("a") < term("a^2"));
        assert!(term("k^3 z") < term("z^2"));
        assert!(term("x^5") < term("z"));
    }

    #[test]
    fn test_dominant_behavior_rule() {
        assert!(term("z") < term("a"));
        assert!(term("z^2") < term("z a"));
    }

    #[test]
    fn test_dominant_count_rule() {
        assert!(term("z a") < term("a^2"));
        assert!(term("a* b^2") < term("b* b^2"));
    }

    #[test]
    fn test_reverse_name_rule() {
        // Later names sort lower, so `a` terms display first.
        assert!(term("b") < term("a"));
        assert!(term("n") < term("k"));
        assert!(term("zeta") < term("xi"));
    }

    #[test]
    fn test_conjugation_count_rule() {
        assert!(term("a a") < term("a* a"));
        assert!(term("a* a") < term("a* a*"));
        assert!(term("z z") < term("z* z"));
    }

    #[test]
    fn test_normalness_rule() {
        // Same degree, counts and daggers; the normal-ordered pattern
        // sorts higher.
        assert!(term("a a*") < term("a* a"));
        assert!(term("a* a a* a") < term("a*^2 a^2"));
    }

    #[test]
    fn test_residual_recursion() {
        // Dominant identity ties completely; the scalar residual decides.
        assert!(term("x a") < term("n a"));
        assert!(term("z a* a") < term("z* a* a"));
    }

    #[test]
    fn test_totality_on_distinct_terms() {
        let terms = [
            term("0"),
            term("1"),
            term("k"),
            term("x"),
            term("z"),
            term("z*"),
            term("a"),
            term("a* a"),
            term("a a*"),
            term("b^2"),
        ];
        for (i, left) in terms.iter().enumerate() {
            for (j, right) in terms.iter().enumerate() {
                let ord = cmp_terms(left, right);
                assert_eq!(ord, cmp_terms(right, left).reverse());
                assert_eq!(ord == Ordering::Equal, i == j);
            }
        }
    }

    #[test]
    fn test_sorting_terms() {
        let mut terms = vec![term("a* a"), term("1"), term("a a*"), term("x"), term("0")];
        terms.sort();
        let texts: Vec<String> = terms.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["0", "1", "x", "a a*", "a* a"]);
    }

    #[test]
    fn test_normalness_cmp() {
        let bank = SymbolBank::default();
        let a = bank.resolve("a").unwrap();
        assert_eq!(
            term("a* a").normalness_cmp(&term("a a*"), &a),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            term("a* a").normalness_cmp(&term("a* a"), &a),
            Ok(Ordering::Equal)
        );
        assert_eq!(
            term("a").normalness_cmp(&term("a^2"), &a),
            Err(AlgebraError::OrderMismatch("a".to_owned()))
        );
    }
}
