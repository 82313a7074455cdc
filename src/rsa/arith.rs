//! Modular arithmetic over arbitrary-precision integers.
//!
//! All operations run on `BigUint`/`BigInt`: key moduli are products of
//! two primes and intermediate squarings exceed 64 bits even for small
//! classroom primes, so fixed-width arithmetic would overflow silently.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use thiserror::Error;

/// Errors raised by the modular primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    /// Reduction modulo zero is undefined.
    #[error("modulus must be at least 1")]
    ZeroModulus,

    /// `a` has no inverse modulo `m` because `gcd(a, m) != 1`.
    #[error("{a} has no inverse modulo {modulus}")]
    NoInverse {
        /// The element whose inverse was requested.
        a: BigUint,
        /// The modulus.
        modulus: BigUint,
    },
}

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// Processes exponent bits least-significant first, squaring the base
/// at each position and multiplying it into the accumulator when the
/// bit is set. `modulus == 1` always yields 0.
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, ArithmeticError> {
    if modulus.is_zero() {
        return Err(ArithmeticError::ZeroModulus);
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();
    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = &result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1;
    }
    Ok(result)
}

/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Computes the inverse of `a` modulo `modulus`, in `[0, modulus)`.
///
/// Uses the iterative extended Euclidean algorithm to obtain Bézout
/// coefficients; fails with [`ArithmeticError::NoInverse`] when
/// `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    if modulus.is_zero() {
        return Err(ArithmeticError::ZeroModulus);
    }

    let m = BigInt::from(modulus.clone());
    let mut old_r = BigInt::from(a % modulus);
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(ArithmeticError::NoInverse {
            a: a.clone(),
            modulus: modulus.clone(),
        });
    }

    // Normalize the Bézout coefficient into [0, m)
    let inverse = ((old_s % &m) + &m) % &m;
    Ok(inverse.to_biguint().unwrap_or_default())
}

/// Trial-division primality test for demo-scale integers.
///
/// Returns false for `n < 2`. Not suitable for cryptographically sized
/// inputs; the loop is quadratic in the magnitude of `n`.
pub fn is_prime_small(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if (n % &two).is_zero() {
        return n == &two;
    }

    let mut i = BigUint::from(3u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 2u32;
    }
    true
}
