// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, RandBigInt};
use rand::RngCore;

/// Supplies public exponent candidates to the keypair generator.
///
/// The generator keeps asking until a candidate lies in `[low, high)` and is
/// coprime with φ, so a source may return anything; unsuitable values are
/// simply skipped. Returning `None` ends the search.
pub trait ExponentSource {
    /// Draw the next candidate from `[low, high)`.
    fn next_candidate(&mut self, low: &BigUint, high: &BigUint) -> Option<BigUint>;
}

/// Any random number generator samples uniformly from the requested range.
impl<R: RngCore + ?Sized> ExponentSource for R {
    fn next_candidate(&mut self, low: &BigUint, high: &BigUint) -> Option<BigUint> {
        Some(self.gen_biguint_range(low, high))
    }
}

/// Replays a fixed sequence of candidates, ignoring the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedExponents<I> {
    candidates: I,
}

impl<I> ScriptedExponents<I>
where
    I: Iterator<Item = BigUint>,
{
    pub fn new<T>(candidates: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self { candidates: candidates.into_iter() }
    }
}

impl<I> ExponentSource for ScriptedExponents<I>
where
    I: Iterator<Item = BigUint>,
{
    fn next_candidate(&mut self, _low: &BigUint, _high: &BigUint) -> Option<BigUint> {
        self.candidates.next()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use num_traits::ToPrimitive;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_stays_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let low = BigUint::from(2u32);
        let high = BigUint::from(10u32);

        for _ in 0..1000 {
            let c = rng.next_candidate(&low, &high).unwrap();
            assert!(c >= low && c < high, "candidate {c} out of range");
        }
    }

    #[test]
    fn rng_covers_small_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let low = BigUint::from(2u32);
        let high = BigUint::from(6u32);

        let mut seen = [false; 6];
        for _ in 0..500 {
            let c = rng.next_candidate(&low, &high).unwrap();
            seen[c.to_usize().unwrap()] = true;
        }
        assert_eq!(seen, [false, false, true, true, true, true]);
    }

    #[test]
    fn scripted_replays_in_order_then_ends() {
        let mut source = ScriptedExponents::new([3u32, 5, 7].map(BigUint::from));
        let (low, high) = (BigUint::from(2u32), BigUint::from(4u32));

        assert_eq!(source.next_candidate(&low, &high), Some(BigUint::from(3u32)));
        assert_eq!(source.next_candidate(&low, &high), Some(BigUint::from(5u32)));
        assert_eq!(source.next_candidate(&low, &high), Some(BigUint::from(7u32)));
        assert_eq!(source.next_candidate(&low, &high), None);
    }
}
