//! Property-based tests for the term and expression algebra.

use proptest::prelude::*;

use wick_core::{cmp_symbols, Symbol, SymbolBank};

use crate::{cmp_terms, Expression, Term};

/// The symbol pool: the stock bank, conjugates of its non-hermitian
/// members, and the sentinels.
fn pool() -> Vec<Symbol> {
    let bank = SymbolBank::default();
    let mut pool: Vec<Symbol> = bank.symbols().to_vec();
    let conjugates: Vec<Symbol> = pool
        .iter()
        .filter(|s| !s.behavior().is_hermitian())
        .map(Symbol::conj)
        .collect();
    pool.extend(conjugates);
    pool.push(Symbol::one());
    pool
}

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    proptest::sample::select(pool())
}

fn arb_term() -> impl Strategy<Value = Term> {
    proptest::collection::vec(arb_symbol(), 0..6).prop_map(Term::new)
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    proptest::collection::vec(arb_term(), 0..4).prop_map(Expression::new)
}

proptest! {
    // Canonical form

    #[test]
    fn term_canonicalization_idempotent(t in arb_term()) {
        prop_assert_eq!(Term::new(t.symbols().to_vec()), t);
    }

    #[test]
    fn expression_canonicalization_idempotent(e in arb_expression()) {
        prop_assert_eq!(Expression::new(e.terms().to_vec()), e);
    }

    #[test]
    fn zero_absorbs_any_product(t in arb_term()) {
        let mut symbols = t.symbols().to_vec();
        symbols.push(Symbol::zero());
        prop_assert_eq!(Term::new(symbols), Term::zero());
    }

    #[test]
    fn one_never_survives(t in arb_term()) {
        let mut symbols = t.symbols().to_vec();
        symbols.push(Symbol::one());
        prop_assert_eq!(Term::new(symbols), t.clone());
        if t.symbols().len() > 1 {
            prop_assert!(t.symbols().iter().all(|s| !s.is_one()));
        }
    }

    // Conjugation

    #[test]
    fn symbol_conj_involution(s in arb_symbol()) {
        prop_assert_eq!(s.conj().conj(), s);
    }

    #[test]
    fn term_conj_involution(t in arb_term()) {
        prop_assert_eq!(t.conj().conj(), t);
    }

    #[test]
    fn expression_conj_involution(e in arb_expression()) {
        prop_assert_eq!(e.conj().conj(), e);
    }

    #[test]
    fn conj_is_product_antihomomorphism(s in arb_term(), t in arb_term()) {
        let product = s.clone() * t.clone();
        prop_assert_eq!(product.conj(), t.conj() * s.conj());
    }

    // Orders

    #[test]
    fn symbol_order_antisymmetric(a in arb_symbol(), b in arb_symbol()) {
        prop_assert_eq!(cmp_symbols(&a, &b), cmp_symbols(&b, &a).reverse());
    }

    #[test]
    fn term_order_antisymmetric(a in arb_term(), b in arb_term()) {
        prop_assert_eq!(cmp_terms(&a, &b), cmp_terms(&b, &a).reverse());
    }

    #[test]
    fn term_order_consistent_with_equality(a in arb_term(), b in arb_term()) {
        prop_assert_eq!(cmp_terms(&a, &b) == std::cmp::Ordering::Equal, a == b);
    }

    #[test]
    fn term_order_transitive(a in arb_term(), b in arb_term(), c in arb_term()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    // Algebra laws

    #[test]
    fn expression_addition_commutative(e in arb_expression(), f in arb_expression()) {
        prop_assert_eq!(e.clone() + f.clone(), f + e);
    }

    #[test]
    fn expression_addition_associative(
        e in arb_expression(),
        f in arb_expression(),
        g in arb_expression(),
    ) {
        prop_assert_eq!((e.clone() + f.clone()) + g.clone(), e + (f + g));
    }

    #[test]
    fn multiplication_distributes_over_addition(
        e in arb_expression(),
        f in arb_expression(),
        g in arb_expression(),
    ) {
        let left = e.clone() * (f.clone() + g.clone());
        let right = e.clone() * f + e * g;
        prop_assert_eq!(left, right);
    }

    #[test]
    fn zero_annihilates(e in arb_expression()) {
        prop_assert_eq!(e.clone() * Expression::zero(), Expression::zero());
        prop_assert_eq!(Expression::zero() * e, Expression::zero());
    }

    // Text round trips

    #[test]
    fn term_print_parse_round_trip(t in arb_term()) {
        let bank = SymbolBank::default();
        let reparsed = Term::parse(&t.to_string(), &bank).unwrap();
        prop_assert_eq!(reparsed.to_string(), t.to_string());
        prop_assert_eq!(reparsed, t);
    }

    #[test]
    fn expression_print_parse_round_trip(e in arb_expression()) {
        let bank = SymbolBank::default();
        let reparsed = Expression::parse(&e.to_string(), &bank).unwrap();
        prop_assert_eq!(reparsed.to_string(), e.to_string());
        prop_assert_eq!(reparsed, e);
    }
}
