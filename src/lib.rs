// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Textbook RSA
//!
//! RSA over two caller-supplied primes, encrypting text one character at a
//! time: every Unicode scalar value `m` becomes `m^e mod n`.
//!
//! Reference: [Rivest, Shamir & Adleman (1978), CACM](https://doi.org/10.1145/359340.359342)
//!
//! ## Security
//!
//! This is the unpadded schoolbook scheme. Encryption is deterministic and
//! leaks character frequencies, primality is checked by trial division, and
//! nothing stops a caller from choosing a modulus smaller than the
//! characters being encrypted. Characters with a code point `>= n` are
//! encrypted anyway and do not survive the round trip.
//!
//! ## Example
//!
//! ```rust
//! use textbook_rsa::{KeyPair, Rsa};
//!
//! let keypair = KeyPair::generate(61, 53).expect("key generation failed");
//! let message = "hello world";
//!
//! let ciphertext = Rsa::encrypt(keypair.public_key(), message);
//! let decrypted = Rsa::decrypt(keypair.private_key(), &ciphertext).expect("decryption failed");
//! assert_eq!(message, decrypted);
//! ```

mod ciphertext;
mod crypto;
mod error;
mod key;
mod keypair;
mod math;
mod rsa;

pub use ciphertext::*;
pub use crypto::{Decrypt, Encrypt};
pub use error::*;
pub use key::*;
pub use keypair::{ExponentSource, KeyPair, KeyPairBuilder, ScriptedExponents, generate_keypair};
pub use math::{is_prime, mod_inverse};
pub use rsa::*;
