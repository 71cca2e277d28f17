//! The mulberry32 generator and date seeding.

use orrery_calendar::TimeComponents;
use rand::{RngCore, SeedableRng};

/// A 32-bit mulberry32 generator.
///
/// Small and fast, with a 32-bit state. Used for date-seeded weather so a
/// given calendar date always produces the same draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a 32-bit seed.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Seed for the date in `c`: `year * 10000 + month * 100 + day`, using the
/// components' internal year and 0-based month and day, truncated to 32
/// bits.
pub fn date_seed(c: &TimeComponents) -> u32 {
    (i64::from(c.year) * 10_000 + c.month as i64 * 100 + i64::from(c.day_of_month)) as u32
}

/// A uniform draw in `[0, 1)` from the next 32 bits of `rng`.
pub(crate) fn unit(rng: &mut impl RngCore) -> f64 {
    f64::from(rng.next_u32()) / 4_294_967_296.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_reference_sequence() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
        assert_eq!(rng.next_u32(), 958_946_056);

        let mut rng = Mulberry32::new(12_345);
        assert_eq!(rng.next_u32(), 4_207_900_869);
        assert_eq!(rng.next_u32(), 1_317_490_944);
    }

    #[test]
    fn unit_draws() {
        let mut rng = Mulberry32::new(10_203);
        assert_relative_eq!(unit(&mut rng), 0.415_307_832_648_977_64, epsilon = 1e-15);
        assert_relative_eq!(unit(&mut rng), 0.946_407_182_607_799_8, epsilon = 1e-15);
    }

    #[test]
    fn seedable_from_bytes() {
        let mut a = Mulberry32::from_seed(12_345u32.to_le_bytes());
        let mut b = Mulberry32::new(12_345);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut rng = Mulberry32::new(0);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        assert_eq!(&buf[..4], &1_144_304_738u32.to_le_bytes());
        assert_eq!(&buf[4..], &1_416_247u32.to_le_bytes()[..2]);
    }

    #[test]
    fn date_seed_layout() {
        assert_eq!(date_seed(&TimeComponents::new(1, 2, 3)), 10_203);
        assert_eq!(date_seed(&TimeComponents::new(1492, 11, 29)), 14_921_129);
        assert_eq!(date_seed(&TimeComponents::new(-1, 0, 0)), (-10_000i64) as u32);
    }
}
