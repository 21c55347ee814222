//! The strict total order over symbols.

use std::cmp::Ordering;

use crate::behavior::Behavior;
use crate::symbol::Symbol;

/// Compares two symbols for canonical placement inside a term.
///
/// The primary key is the behavior rank. Within a behavior:
/// - all zeros compare equal, and all ones compare equal;
/// - scalars and operators compare by name lexicographically;
/// - on a tied name, commuting scalars place the unconjugated symbol
///   first, while annihilation operators compare equal — their relative
///   placement carries physical meaning and is resolved by term-level
///   normalness, not here.
///
/// This is a free comparison function rather than an `Ord` impl: two
/// same-name annihilation symbols with different conjugation marks compare
/// `Equal` here while being unequal values, which `Ord` forbids.
#[must_use]
pub fn cmp_symbols(a: &Symbol, b: &Symbol) -> Ordering {
    match a.behavior().cmp(&b.behavior()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    match a.behavior() {
        Behavior::Zero | Behavior::One => Ordering::Equal,
        Behavior::Annihilation => a.name().cmp(b.name()),
        Behavior::Real | Behavior::Complex => a
            .name()
            .cmp(b.name())
            .then_with(|| a.is_conjugated().cmp(&b.is_conjugated())),
    }
}
