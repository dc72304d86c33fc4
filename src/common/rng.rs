use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::common::config;

/// Seeded gameplay RNG (enemy fire cadence).
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Seed from `SPACE_INVADERS_SEED`, or from OS entropy when unset.
    pub fn from_config() -> Self {
        Self::seeded(config::rng_seed().unwrap_or_else(rand::random))
    }
}
