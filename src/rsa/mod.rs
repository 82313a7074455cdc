//! Toy RSA over arbitrary-precision integers.
//!
//! Modular exponentiation, extended-Euclid modular inverses, and a
//! per-character textbook RSA scheme built on them. This is a teaching
//! construction: one small integer per character, no padding, no
//! security. It must never be mistaken for production cryptography.

mod arith;
mod keys;

pub use arith::{gcd, is_prime_small, mod_inverse, mod_pow, ArithmeticError};
pub use keys::{
    ciphertext_from_csv, ciphertext_to_csv, CipherError, KeyError, KeyPair,
};
