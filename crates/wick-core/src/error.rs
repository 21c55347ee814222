//! Errors raised by symbol construction, parsing and comparison.

use thiserror::Error;

/// Errors produced by the symbol and term algebra.
///
/// Every failure is synchronous and local to the call that raised it;
/// nothing is retried and no partial result is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A behavior name outside the fixed enumeration was supplied.
    #[error("behavior `{0}` is not implemented")]
    InvalidBehavior(String),

    /// A symbol name was empty or contained whitespace.
    #[error("invalid symbol name `{0}`: names must be non-empty and free of whitespace")]
    InvalidName(String),

    /// A parsed token referred to a name absent from the symbol bank.
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),

    /// The supplied symbol bank contains two symbols with the same name.
    #[error("ambiguous symbol bank: duplicate name `{0}`")]
    AmbiguousBank(String),

    /// Two terms were compared for normalness with differing occurrence
    /// counts of the identity under comparison.
    #[error("compared terms do not have the same order in `{0}`")]
    OrderMismatch(String),

    /// A constructor or parser argument had a malformed shape, such as a
    /// non-numeric power or multiplicity token.
    #[error("malformed constructor input `{0}`")]
    InvalidConstructorInput(String),
}
