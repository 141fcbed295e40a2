use super::Player;
use crate::moves::Move;
use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt::Debug;

/// Uniformly random player. Plays the opponent, and the user under autoplay.
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive an independent stream from a parent generator.
impl<R: RngCore> From<&mut R> for Robot {
    fn from(parent: &mut R) -> Self {
        Self {
            rng: SmallRng::from_rng(parent),
        }
    }
}

impl Player for Robot {
    fn choose(&mut self) -> Option<Move> {
        Some(self.rng.random())
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}
