// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod source;

pub use source::{ExponentSource, ScriptedExponents};

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::math::{is_coprime, is_prime, mod_inverse};
use crate::{Decrypt, Encrypt};

use num_bigint_dig::{BigInt, BigUint};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// A public and private key sharing the modulus `n = p·q`.
///
/// The exponents satisfy `e·d ≡ 1 (mod φ)` with `φ = (p - 1)(q - 1)`.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a keypair from two primes, drawing `e` from OS entropy.
    pub fn generate(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Result<Self> {
        KeyPairBuilder::new(p, q).build()
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }

    /// Split into `(public, private)`.
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.secret)
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, plaintext: &str) -> Ciphertext {
        self.public.encrypt(plaintext)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        self.secret.decrypt(ciphertext)
    }
}

/// Builder for generating a keypair from caller-supplied primes.
#[derive(Debug)]
pub struct KeyPairBuilder<S = StdRng> {
    p: BigInt,
    q: BigInt,
    source: S,
}

impl KeyPairBuilder<StdRng> {
    /// Create a builder for the primes `p` and `q`.
    ///
    /// The public exponent is drawn from a `StdRng` seeded from OS entropy
    /// unless another source is supplied.
    pub fn new(p: impl Into<BigInt>, q: impl Into<BigInt>) -> Self {
        Self { p: p.into(), q: q.into(), source: StdRng::from_entropy() }
    }
}

impl<S: ExponentSource> KeyPairBuilder<S> {
    /// Replace the source of public exponent candidates.
    pub fn exponent_source<T: ExponentSource>(self, source: T) -> KeyPairBuilder<T> {
        KeyPairBuilder { p: self.p, q: self.q, source }
    }

    /// Validate the primes and derive the keypair.
    pub fn build(mut self) -> Result<KeyPair> {
        generate_keypair(&self.p, &self.q, &mut self.source)
    }
}

/// Derive a keypair from the primes `p` and `q`.
///
/// Fails with [`Error::InvalidInput`] if either number is not prime or both
/// are equal. The public exponent is resampled from `source` until it lies in
/// `[2, φ)` and is coprime with φ; there is no retry limit.
pub fn generate_keypair<S>(p: &BigInt, q: &BigInt, source: &mut S) -> Result<KeyPair>
where
    S: ExponentSource + ?Sized,
{
    if !(is_prime(p) && is_prime(q)) {
        return Err(Error::InvalidInput("Both numbers must be prime.".into()));
    }
    if p == q {
        return Err(Error::InvalidInput("p and q cannot be the same".into()));
    }

    let p = unsigned(p)?;
    let q = unsigned(q)?;

    let n = &p * &q;
    let phi = (&p - 1u32) * (&q - 1u32);

    let low = BigUint::from(2u32);
    if phi <= low {
        return Err(Error::InvalidInput(format!(
            "no public exponent is coprime with φ = {phi}"
        )));
    }

    let mut rejected = 0u64;
    let e = loop {
        let candidate = source
            .next_candidate(&low, &phi)
            .ok_or(Error::ExponentSourceExhausted)?;

        if candidate >= low && candidate < phi && is_coprime(&candidate, &phi) {
            break candidate;
        }

        trace!(%candidate, %phi, "rejected public exponent candidate");
        rejected += 1;
    };

    let d = mod_inverse(&e, &phi);

    debug!(modulus_bits = n.bits(), rejected, "generated keypair");

    let public = PublicKey::new(e, n.clone())?;
    let secret = PrivateKey::new(d, n)?;

    Ok(KeyPair { public, secret })
}

fn unsigned(value: &BigInt) -> Result<BigUint> {
    value
        .to_biguint()
        .ok_or_else(|| Error::InvalidInput(format!("{value} is negative")))
}
