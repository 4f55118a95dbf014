//! RNG module - seedable randomness for the simulation
//!
//! Every random decision in a run (obstacle archetype, flying height, rescue
//! operands) goes through [`GameRng`], so a seed fully determines a session
//! given the same input and clock.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::ObstacleKind;

/// Archetype draw table; ground obstacles are twice as likely as flying ones.
const ARCHETYPE_TABLE: [ObstacleKind; 3] = [
    ObstacleKind::Ground,
    ObstacleKind::Ground,
    ObstacleKind::Flying,
];

/// PCG-backed random source.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[lo, hi]`
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform integer in `[lo, hi]`
    pub fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    /// Weighted archetype choice (Ground 2 : Flying 1)
    pub fn archetype(&mut self) -> ObstacleKind {
        ARCHETYPE_TABLE[self.rng.random_range(0..ARCHETYPE_TABLE.len())]
    }

    /// Derive a fresh seed, used to give each session its own stream.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
