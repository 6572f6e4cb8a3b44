// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Deterministic primality test by trial division.
///
/// After ruling out multiples of 2 and 3, only divisors of the form 6k ± 1
/// (5, 7, 11, 13, ...) are tried, up to `√n`. The cost grows with `√n`, so
/// this is meant for the small primes a caller types in by hand.
pub fn is_prime(n: &BigInt) -> bool {
    let three = BigInt::from(3u32);

    if *n <= BigInt::one() {
        return false;
    }
    if *n <= three {
        return true;
    }
    if n.is_even() || (n % &three).is_zero() {
        return false;
    }

    let two = BigInt::from(2u32);
    let six = BigInt::from(6u32);
    let mut i = BigInt::from(5u32);

    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
            return false;
        }
        i += &six;
    }

    true
}

/// Multiplicative inverse of `a` modulo `m`, normalized into `[0, m)`.
///
/// Iterative extended Euclid. The caller guarantees `gcd(a, m) = 1`; the
/// result is unspecified otherwise, but the loop always terminates.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    let m0 = BigInt::from_biguint(Sign::Plus, m.clone());

    let mut a = BigInt::from_biguint(Sign::Plus, a.clone());
    let mut m = m0.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() && !m.is_zero() {
        let q = &a / &m;
        let r = &a % &m;
        a = std::mem::replace(&mut m, r);

        let next = &x1 - &q * &x0;
        x1 = std::mem::replace(&mut x0, next);
    }

    if x1.is_negative() {
        x1 += &m0;
    }

    x1.to_biguint().unwrap_or_default()
}

#[inline]
pub(crate) fn is_coprime(a: &BigUint, b: &BigUint) -> bool {
    a.gcd(b).is_one()
}
