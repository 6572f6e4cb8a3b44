#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use textbook_rsa::{Decrypt, Encrypt, KeyPair};

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    // n = 1201 · 1213 exceeds U+10FFFF, so every char is below the modulus
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate(1201, 1213).unwrap());

    let message = String::from_utf8_lossy(data);

    let ciphertext = keypair.encrypt(&message);
    assert_eq!(ciphertext.len(), message.chars().count());

    let decrypted = match keypair.decrypt(&ciphertext) {
        Ok(text) => text,
        Err(e) => panic!("Decryption failed for valid ciphertext ({e})! Input was: {:?}", data),
    };

    assert_eq!(message, decrypted, "Plaintext mismatch for input {:?}", data);
});
