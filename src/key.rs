// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::{Error, Result};

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public half of a keypair: the encryption exponent `e` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub(crate) e: BigUint,
    pub(crate) n: BigUint,
}

impl PublicKey {
    /// Construct a public key from its components.
    ///
    /// The exponent must be non-zero and the modulus greater than one.
    pub fn new(e: BigUint, n: BigUint) -> Result<Self> {
        if e.is_zero() || n <= BigUint::one() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { e, n })
    }

    /// Return the public exponent `e`.
    #[inline]
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Return the modulus `n`.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

/// Private half of a keypair: the decryption exponent `d` and modulus `n`.
///
/// `d` is wiped from memory when the key is dropped.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    pub(crate) d: BigUint,
    #[zeroize(skip)]
    pub(crate) n: BigUint,
}

impl PrivateKey {
    /// Construct a private key from its components.
    ///
    /// The exponent must be non-zero and the modulus greater than one.
    pub fn new(d: BigUint, n: BigUint) -> Result<Self> {
        if d.is_zero() || n <= BigUint::one() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { d, n })
    }

    /// Return the private exponent `d`.
    #[inline]
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// Return the modulus `n`.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }
}

#[cfg(feature = "expose-secret")]
impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn public_key_accessors() {
        let key = PublicKey::new(BigUint::from(17u32), BigUint::from(3233u32)).unwrap();

        assert_eq!(key.exponent(), &BigUint::from(17u32));
        assert_eq!(key.modulus(), &BigUint::from(3233u32));
    }

    #[test]
    fn public_key_displays_as_tuple() {
        let key = PublicKey::new(BigUint::from(17u32), BigUint::from(3233u32)).unwrap();
        assert_eq!(key.to_string(), "(17, 3233)");
    }

    #[test]
    fn rejects_degenerate_public_keys() {
        let zero_exp = PublicKey::new(BigUint::zero(), BigUint::from(3233u32));
        assert!(matches!(zero_exp, Err(Error::InvalidPublicKey)));

        let unit_modulus = PublicKey::new(BigUint::from(17u32), BigUint::one());
        assert!(matches!(unit_modulus, Err(Error::InvalidPublicKey)));

        let zero_modulus = PublicKey::new(BigUint::from(17u32), BigUint::zero());
        assert!(matches!(zero_modulus, Err(Error::InvalidPublicKey)));
    }

    #[test]
    fn rejects_degenerate_private_keys() {
        let zero_exp = PrivateKey::new(BigUint::zero(), BigUint::from(3233u32));
        assert!(matches!(zero_exp, Err(Error::InvalidPrivateKey)));

        let unit_modulus = PrivateKey::new(BigUint::from(2753u32), BigUint::one());
        assert!(matches!(unit_modulus, Err(Error::InvalidPrivateKey)));
    }

    #[test]
    fn private_key_zeroize_clears_exponent() {
        let mut key = PrivateKey::new(BigUint::from(2753u32), BigUint::from(3233u32)).unwrap();
        key.zeroize();

        assert_ne!(key.exponent(), &BigUint::from(2753u32));
        assert_eq!(key.modulus(), &BigUint::from(3233u32));
    }
}
