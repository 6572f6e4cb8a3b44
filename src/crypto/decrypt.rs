// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Decrypt;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::PrivateKey;

use num_traits::ToPrimitive;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        ciphertext
            .iter()
            .map(|c| {
                // m = c^d mod n
                let m = c.modpow(&self.d, &self.n);

                match m.to_u32().and_then(char::from_u32) {
                    Some(ch) => Ok(ch),
                    None => Err(Error::InvalidCodePoint(m)),
                }
            })
            .collect()
    }
}
