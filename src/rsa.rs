// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigInt;

use crate::ciphertext::Ciphertext;
use crate::crypto::{Decrypt, Encrypt};
use crate::error::Result;
use crate::key::{PrivateKey, PublicKey};
use crate::keypair::KeyPair;

pub struct Rsa;

impl Rsa {
    /// Generate a keypair from the primes `p` and `q`.
    ///
    /// See [`crate::KeyPairBuilder`] to supply the exponent source.
    pub fn generate_keypair(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Result<KeyPair> {
        KeyPair::generate(p, q)
    }

    /// Encrypts a text message character by character.
    ///
    /// ## Limitations
    ///
    /// There is no padding: equal characters produce equal ciphertext values.
    /// A character whose code point is not below `n` is encrypted anyway and
    /// will not decrypt back to itself.
    pub fn encrypt(pub_key: &PublicKey, plaintext: &str) -> Ciphertext {
        pub_key.encrypt(plaintext)
    }

    /// Decrypts a ciphertext produced by [`Rsa::encrypt`].
    pub fn decrypt(priv_key: &PrivateKey, ciphertext: &Ciphertext) -> Result<String> {
        priv_key.decrypt(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::Error;
    use num_bigint_dig::BigUint;

    #[test]
    fn end_to_end() {
        let keypair = Rsa::generate_keypair(61, 53).unwrap();
        let message = "Meet me at noon.";

        let ciphertext = Rsa::encrypt(keypair.public_key(), message);
        let decrypted = Rsa::decrypt(keypair.private_key(), &ciphertext).unwrap();

        assert_eq!(ciphertext.len(), message.chars().count());
        assert_eq!(decrypted, message);
    }

    #[test]
    fn textbook_example() {
        let public = PublicKey::new(BigUint::from(17u32), BigUint::from(3233u32)).unwrap();
        let private = PrivateKey::new(BigUint::from(2753u32), BigUint::from(3233u32)).unwrap();

        let ciphertext = Rsa::encrypt(&public, "A");
        assert_eq!(ciphertext.values(), &[BigUint::from(2790u32)]);
        assert_eq!(Rsa::decrypt(&private, &ciphertext).unwrap(), "A");
    }

    #[test]
    fn invalid_primes() {
        assert!(matches!(Rsa::generate_keypair(4, 7), Err(Error::InvalidInput(_))));
        assert!(matches!(Rsa::generate_keypair(5, 5), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn wrong_private_key_garbles_message() {
        let public = PublicKey::new(BigUint::from(17u32), BigUint::from(3233u32)).unwrap();
        let other = PrivateKey::new(BigUint::from(1u32), BigUint::from(3233u32)).unwrap();

        let ciphertext = Rsa::encrypt(&public, "secret");
        let garbled = Rsa::decrypt(&other, &ciphertext).unwrap();

        // d = 1 hands back the raw ciphertext values as characters
        let expected: String = [1230u32, 1313, 281, 2412, 1313, 884]
            .into_iter()
            .filter_map(char::from_u32)
            .collect();
        assert_eq!(garbled, expected);
        assert_ne!(garbled, "secret");
    }
}
