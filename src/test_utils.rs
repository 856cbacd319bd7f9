use rand_xoshiro::rand_core::RngCore;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::constants::{OFFSET, RADIX};

#[must_use]
pub fn make_message(seed: u64, length: usize) -> Vec<u8> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut message = vec![0; length];
    rng.fill_bytes(&mut message);
    message
}

/// Random characters drawn from the alphabet. Not every triplet is the image of
/// a byte pair: about 5% of them exceed 16 bits.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn make_text(seed: u64, triplets: usize) -> String {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    (0..triplets * 3)
        .map(|_| char::from((rng.next_u32() % u32::from(RADIX)) as u8 + OFFSET))
        .collect()
}
