//! Unique number sampling
//!
//! One draw picks `PICK_COUNT` distinct values from `1..=DOMAIN_SIZE` by
//! rejection: sample uniformly, resample on a repeat. The domain is large
//! enough relative to the pick count that the loop always terminates.

use rand::Rng;

use crate::consts::{DOMAIN_SIZE, PICK_COUNT};

/// Draw `PICK_COUNT` distinct numbers, returned in generation order.
pub fn pick(rng: &mut impl Rng) -> [u8; PICK_COUNT] {
    let mut picked = [0u8; PICK_COUNT];
    let mut count = 0;

    while count < PICK_COUNT {
        let candidate = rng.random_range(1..=DOMAIN_SIZE);
        if !picked[..count].contains(&candidate) {
            picked[count] = candidate;
            count += 1;
        }
    }

    picked
}
