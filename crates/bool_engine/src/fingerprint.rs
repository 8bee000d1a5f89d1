//! Structural fingerprints for the rewrite loop's seen-set.
//!
//! Two structurally equal trees always hash to the same value regardless
//! of node identity, so the fingerprint can stand in for the canonical
//! standard-notation string without the string round-trip.

use bool_ast::Expr;

// TAG constants for mixing expression variants
const TAG_CONST: u64 = 0x1234567890ABCDEF;
const TAG_VAR: u64 = 0xFEDCBA0987654321;
const TAG_NOT: u64 = 0xABCDEF1234567890;
const TAG_AND: u64 = 0x2345678901BCDEF0;
const TAG_OR: u64 = 0x3456789012CDEF01;
const TAG_XOR: u64 = 0x4567890123DEF012;
const TAG_XNOR: u64 = 0x5678901234EF0123;
const TAG_NAND: u64 = 0x6789012345F01234;
const TAG_NOR: u64 = 0x7890123456012345;

/// Mix two u64 values (splitmix64-style)
#[inline]
fn mix(tag: u64, a: u64, b: u64) -> u64 {
    let mut x = tag
        .wrapping_add(a)
        .wrapping_add(b.wrapping_mul(0x9E3779B97F4A7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Mix single value with tag
#[inline]
fn mix1(tag: u64, a: u64) -> u64 {
    mix(tag, a, 0)
}

/// Hash a string (FNV-1a style)
fn hash_str(s: &str) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for byte in s.bytes() {
        h ^= byte as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

/// Compute the structural fingerprint of an expression tree.
pub fn expr_fingerprint(expr: &Expr) -> u64 {
    match expr {
        Expr::Const(v) => mix1(TAG_CONST, *v as u64),
        Expr::Var(name) => mix1(TAG_VAR, hash_str(name)),
        Expr::Not(inner) => mix1(TAG_NOT, expr_fingerprint(inner)),
        Expr::And(l, r) => mix(TAG_AND, expr_fingerprint(l), expr_fingerprint(r)),
        Expr::Or(l, r) => mix(TAG_OR, expr_fingerprint(l), expr_fingerprint(r)),
        Expr::Xor(l, r) => mix(TAG_XOR, expr_fingerprint(l), expr_fingerprint(r)),
        Expr::Xnor(l, r) => mix(TAG_XNOR, expr_fingerprint(l), expr_fingerprint(r)),
        Expr::Nand(l, r) => mix(TAG_NAND, expr_fingerprint(l), expr_fingerprint(r)),
        Expr::Nor(l, r) => mix(TAG_NOR, expr_fingerprint(l), expr_fingerprint(r)),
    }
}
