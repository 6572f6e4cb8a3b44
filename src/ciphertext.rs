// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::ops::Deref;

use num_bigint_dig::BigUint;

/// Encrypted message: one value per plaintext character, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    values: Vec<BigUint>,
}

impl Ciphertext {
    pub fn new(values: Vec<BigUint>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    pub fn into_values(self) -> Vec<BigUint> {
        self.values
    }
}

impl Deref for Ciphertext {
    type Target = [BigUint];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<BigUint>> for Ciphertext {
    fn from(values: Vec<BigUint>) -> Self {
        Self { values }
    }
}

impl FromIterator<BigUint> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Ciphertext {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// Rendered as a bracketed list: `[2790, 524]`
impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
