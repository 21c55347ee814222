//! Normal-ordering walkthrough.
//!
//! Run with: cargo run --example perturbation

use wick::prelude::*;
use wick::Expression as Expr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bank = SymbolBank::default();

    println!("=== Wick: normal-ordering examples ===\n");

    // A single inversion: the commutation identity itself.
    let simple = Expr::parse("a a*", &bank)?;
    println!("{}  =>  {}", simple, normal_order(&simple)?);

    // A longer word of one mode.
    let word = Expr::parse("a* a* a a* a a a", &bank)?;
    println!("{}  =>  {}", word, normal_order(&word)?);

    // Scalars ride along unchanged; only operators reorder.
    let driven = Expr::parse("k xi a a* + xi* xi", &bank)?;
    println!("{}  =>  {}", driven, normal_order(&driven)?);

    // Two independent modes reorder independently.
    let modes = Expr::parse("a a* b b*", &bank)?;
    println!("{}  =>  {}", modes, normal_order(&modes)?);

    // Conjugation models the adjoint: (AB)* = B* A*.
    let term = Term::parse("k^2 x xi*^2 xi zeta a*^2 a a", &bank)?;
    println!("\n({})* = {}", term, term.conj());

    Ok(())
}
