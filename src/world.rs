//! Per-level state the manager works against each frame.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bot::ThinkContext;
use crate::physics::Physics;
use crate::viewport::WorldBounds;

/// Level extents, the physics subsystem and the level's random source.
///
/// The random source is seeded explicitly so a level replays identically for
/// the same seed.
#[derive(Debug)]
pub struct World<P> {
    /// Size of the level.
    pub bounds: WorldBounds,
    /// Collision subsystem bots are registered with.
    pub physics: P,
    rng: ChaCha8Rng,
}

impl<P: Physics> World<P> {
    /// A level of the given size using `physics`, seeded with `seed`.
    pub fn new(bounds: WorldBounds, physics: P, seed: u64) -> Self {
        Self {
            bounds,
            physics,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Context handed to bot behaviours this frame.
    pub fn think_context(&mut self) -> ThinkContext<'_> {
        ThinkContext {
            bounds: self.bounds,
            rng: &mut self.rng,
        }
    }
}
