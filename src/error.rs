// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// Errors that can occur while generating keys or decrypting.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Exponent source ran out of candidates")]
    ExponentSourceExhausted,

    #[error("Decrypted value {0} is not a valid character")]
    InvalidCodePoint(BigUint),
}

pub type Result<T> = std::result::Result<T, Error>;
