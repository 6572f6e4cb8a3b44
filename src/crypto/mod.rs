mod decrypt;
mod encrypt;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Encrypts text one character at a time.
pub trait Encrypt {
    /// Encrypt every character of `plaintext` independently, in order.
    ///
    /// Each character's code point must be strictly smaller than the modulus
    /// `n` to survive a round trip. Larger codes are still encrypted, but
    /// decrypt to `code mod n` instead of the original character.
    fn encrypt(&self, plaintext: &str) -> Ciphertext;
}

/// Recovers text from a per-character ciphertext.
pub trait Decrypt {
    /// Decrypt every value in order and reassemble the string.
    ///
    /// Fails with [`crate::Error::InvalidCodePoint`] when a decrypted value is
    /// not a Unicode scalar value.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String>;
}
