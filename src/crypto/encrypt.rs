// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Encrypt;
use crate::ciphertext::Ciphertext;
use crate::key::PublicKey;

use num_bigint_dig::BigUint;
use tracing::warn;

impl Encrypt for PublicKey {
    fn encrypt(&self, plaintext: &str) -> Ciphertext {
        plaintext
            .chars()
            .map(|ch| {
                let code = u32::from(ch);
                let m = BigUint::from(code);

                // Still transformed, but reduces mod n and cannot come back as `ch`.
                if m >= self.n {
                    warn!(
                        code,
                        modulus = %self.n,
                        "character code exceeds modulus and will not decrypt to the original character"
                    );
                }

                // c = m^e mod n
                m.modpow(&self.e, &self.n)
            })
            .collect()
    }
}
