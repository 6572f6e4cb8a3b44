#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::{BigInt, BigUint};
use rand::SeedableRng;
use rand::rngs::StdRng;

use textbook_rsa::{Decrypt, Encrypt, Error, generate_keypair, is_prime};

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }

    let p = u16::from_be_bytes([data[0], data[1]]) as u32;
    let q = u16::from_be_bytes([data[2], data[3]]) as u32;
    let seed = u64::from_be_bytes(data[4..12].try_into().unwrap());
    let mut rng = StdRng::seed_from_u64(seed);

    let (bp, bq) = (BigInt::from(p), BigInt::from(q));
    let result = generate_keypair(&bp, &bq, &mut rng);

    let valid = is_prime(&bp) && is_prime(&bq) && p != q && p * q != 6;
    let keypair = match result {
        Ok(keypair) => {
            assert!(valid, "accepted invalid primes ({p}, {q})");
            keypair
        }
        Err(Error::InvalidInput(_)) => {
            assert!(!valid, "rejected valid primes ({p}, {q})");
            return;
        }
        Err(e) => panic!("unexpected error for ({p}, {q}): {e}"),
    };

    let n = p as u64 * q as u64;
    let phi = BigUint::from((p as u64 - 1) * (q as u64 - 1));
    let e = keypair.public_key().exponent();
    let d = keypair.private_key().exponent();

    assert_eq!(keypair.public_key().modulus(), &BigUint::from(n));
    assert_eq!((e * d) % &phi, BigUint::from(1u32));

    // only characters below the modulus are expected to survive
    let message: String = String::from_utf8_lossy(&data[12..])
        .chars()
        .filter(|ch| (*ch as u64) < n)
        .collect();

    let decrypted = keypair.decrypt(&keypair.encrypt(&message)).unwrap();
    assert_eq!(message, decrypted);
});
