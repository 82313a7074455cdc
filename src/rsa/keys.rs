//! Key generation and per-character encryption.
//!
//! Textbook RSA from two caller-supplied primes. Characters are encoded
//! as their Unicode code points and exponentiated individually, which
//! leaks every repetition — the point of the accompanying frequency
//! charts, and the reason this must never be used for real secrecy.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use thiserror::Error;

use super::arith::{gcd, is_prime_small, mod_inverse, mod_pow, ArithmeticError};

/// Public exponent candidates, tried in order.
///
/// 65537 is the conventional choice; 17 is the fallback the original
/// demo used when 65537 divides phi's factors at tiny prime sizes.
const EXPONENT_CANDIDATES: [u32; 2] = [65537, 17];

/// Errors raised by key generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    /// A supplied factor failed the primality test.
    #[error("{0} is not prime")]
    NotPrime(BigUint),

    /// The two primes must be distinct.
    #[error("the two primes must differ")]
    EqualPrimes,

    /// No candidate public exponent is coprime to phi.
    #[error("no usable public exponent for phi = {phi}")]
    NoUsableExponent {
        /// Euler's totient of the modulus.
        phi: BigUint,
    },
}

/// Errors raised by encryption and decryption.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CipherError {
    /// A plaintext code point is not strictly below the modulus, so its
    /// residue would be ambiguous.
    #[error("code point {code_point} does not fit under modulus {modulus}")]
    MessageTooLarge {
        /// The offending character's code point.
        code_point: u32,
        /// The key modulus.
        modulus: BigUint,
    },

    /// A decrypted value is not a valid Unicode code point.
    #[error("decrypted value {0} is not a valid character")]
    UnrepresentableValue(BigUint),

    /// Comma-separated ciphertext contained a non-integer field.
    #[error("malformed ciphertext field: {0:?}")]
    MalformedCiphertext(String),
}

/// A generated RSA key pair.
///
/// Immutable once created; discarded wholesale when new keys are
/// generated. Holds both exponents because the toy demos always play
/// both sides of the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPair {
    modulus: BigUint,
    public_exponent: BigUint,
    private_exponent: BigUint,
}

impl KeyPair {
    /// Generates a key pair from two distinct small primes.
    ///
    /// Computes `n = p*q` and `phi = (p-1)(q-1)`, picks the first
    /// exponent candidate coprime to phi, and derives the private
    /// exponent as its inverse modulo phi.
    pub fn generate(p: &BigUint, q: &BigUint) -> Result<Self, KeyError> {
        if !is_prime_small(p) {
            return Err(KeyError::NotPrime(p.clone()));
        }
        if !is_prime_small(q) {
            return Err(KeyError::NotPrime(q.clone()));
        }
        if p == q {
            return Err(KeyError::EqualPrimes);
        }

        let modulus = p * q;
        let phi = (p - BigUint::one()) * (q - BigUint::one());

        let public_exponent = EXPONENT_CANDIDATES
            .iter()
            .map(|&candidate| BigUint::from(candidate))
            .find(|candidate| gcd(candidate, &phi).is_one())
            .ok_or_else(|| KeyError::NoUsableExponent { phi: phi.clone() })?;

        let private_exponent = match mod_inverse(&public_exponent, &phi) {
            Ok(inverse) => inverse,
            // Unreachable once the gcd check passed, but surfaced
            // rather than panicked on.
            Err(ArithmeticError::NoInverse { .. } | ArithmeticError::ZeroModulus) => {
                return Err(KeyError::NoUsableExponent { phi });
            }
        };

        tracing::info!(
            modulus = %modulus,
            public_exponent = %public_exponent,
            "Generated toy RSA key pair"
        );

        Ok(Self {
            modulus,
            public_exponent,
            private_exponent,
        })
    }

    /// The public modulus `n`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The public exponent `e`.
    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    /// The private exponent `d`.
    pub fn private_exponent(&self) -> &BigUint {
        &self.private_exponent
    }

    /// Encrypts a message one character at a time.
    ///
    /// Every code point must be strictly below the modulus; otherwise
    /// the encoding would be ambiguous modulo `n` and the whole
    /// operation fails without output.
    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<BigUint>, CipherError> {
        plaintext
            .chars()
            .map(|ch| {
                let code_point = ch as u32;
                let message = BigUint::from(code_point);
                if message >= self.modulus {
                    return Err(CipherError::MessageTooLarge {
                        code_point,
                        modulus: self.modulus.clone(),
                    });
                }
                // modulus >= 6 for any valid key pair, so mod_pow cannot fail
                mod_pow(&message, &self.public_exponent, &self.modulus)
                    .map_err(|_| CipherError::UnrepresentableValue(message))
            })
            .collect()
    }

    /// Decrypts a sequence of cipher values back into text.
    pub fn decrypt(&self, ciphertext: &[BigUint]) -> Result<String, CipherError> {
        ciphertext
            .iter()
            .map(|value| {
                let recovered = mod_pow(value, &self.private_exponent, &self.modulus)
                    .map_err(|_| CipherError::UnrepresentableValue(value.clone()))?;
                recovered
                    .to_u32()
                    .and_then(char::from_u32)
                    .ok_or(CipherError::UnrepresentableValue(recovered))
            })
            .collect()
    }
}

/// Renders cipher values as comma-separated integer text.
pub fn ciphertext_to_csv(ciphertext: &[BigUint]) -> String {
    ciphertext
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses comma-separated integer text into cipher values.
///
/// Empty fields are skipped so trailing commas round-trip; any
/// non-numeric field fails the whole parse.
pub fn ciphertext_from_csv(text: &str) -> Result<Vec<BigUint>, CipherError> {
    text.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<BigUint>()
                .map_err(|_| CipherError::MalformedCiphertext(field.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn textbook_keys() -> KeyPair {
        KeyPair::generate(&big(61), &big(53)).unwrap()
    }

    #[test]
    fn test_textbook_key_generation() {
        let keys = textbook_keys();
        assert_eq!(keys.modulus(), &big(3233));
        assert_eq!(keys.public_exponent(), &big(65537));

        // e * d ≡ 1 (mod phi), phi = 60 * 52 = 3120
        let product = keys.public_exponent() * keys.private_exponent();
        assert_eq!(product % big(3120), big(1));
    }

    #[test]
    fn test_rejects_non_prime_input() {
        assert!(matches!(
            KeyPair::generate(&big(15), &big(53)),
            Err(KeyError::NotPrime(_))
        ));
        assert!(matches!(
            KeyPair::generate(&big(61), &big(1)),
            Err(KeyError::NotPrime(_))
        ));
    }

    #[test]
    fn test_rejects_equal_primes() {
        assert!(matches!(
            KeyPair::generate(&big(61), &big(61)),
            Err(KeyError::EqualPrimes)
        ));
    }

    #[test]
    fn test_round_trip_textbook_message() {
        let keys = textbook_keys();
        let ciphertext = keys.encrypt("Hi").unwrap();
        assert_eq!(keys.decrypt(&ciphertext).unwrap(), "Hi");
    }

    #[test]
    fn test_round_trip_longer_message() {
        let keys = KeyPair::generate(&big(101), &big(113)).unwrap();
        let message = "Attack at dawn!";
        let ciphertext = keys.encrypt(message).unwrap();
        assert_eq!(keys.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn test_message_too_large_for_tiny_modulus() {
        // n = 5 * 7 = 35 < 'H' (72)
        let keys = KeyPair::generate(&big(5), &big(7)).unwrap();
        assert!(matches!(
            keys.encrypt("Hi"),
            Err(CipherError::MessageTooLarge { code_point: 72, .. })
        ));
    }

    #[test]
    fn test_identical_characters_share_ciphertext() {
        // The weakness the demo is built to expose
        let keys = textbook_keys();
        let ciphertext = keys.encrypt("aa").unwrap();
        assert_eq!(ciphertext[0], ciphertext[1]);
    }

    #[test]
    fn test_csv_round_trip() {
        let keys = textbook_keys();
        let ciphertext = keys.encrypt("Hi").unwrap();

        let csv = ciphertext_to_csv(&ciphertext);
        let parsed = ciphertext_from_csv(&csv).unwrap();
        assert_eq!(parsed, ciphertext);
    }

    #[test]
    fn test_csv_tolerates_spacing_and_trailing_comma() {
        let parsed = ciphertext_from_csv(" 12, 34 ,56, ").unwrap();
        assert_eq!(parsed, vec![big(12), big(34), big(56)]);
    }

    #[test]
    fn test_csv_rejects_garbage() {
        assert!(matches!(
            ciphertext_from_csv("12,abc,34"),
            Err(CipherError::MalformedCiphertext(_))
        ));
    }
}
