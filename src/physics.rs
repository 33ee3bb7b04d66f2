//! Boundary with the physics and collision subsystem.
//!
//! The manager only needs to tell physics which bots take part in collision
//! detection. [`CollisionRegistry`] is a minimal in-memory implementation
//! used by the headless demo and tests.

use hashbrown::HashSet;

use crate::arena::BotId;

/// Registration hooks the manager calls when bots enter or leave a level.
#[cfg_attr(test, mockall::automock)]
pub trait Physics: Send {
    /// Starts tracking `bot` as a collidable object.
    fn add_collidable(&mut self, bot: BotId);

    /// Stops tracking `bot`. Returns whether it was tracked.
    fn remove_collidable(&mut self, bot: BotId) -> bool;
}

/// Set of bots currently registered for collision.
#[derive(Debug, Default, Clone)]
pub struct CollisionRegistry {
    collidables: HashSet<BotId>,
}

impl CollisionRegistry {
    /// Whether `bot` is registered.
    #[must_use]
    pub fn contains(&self, bot: BotId) -> bool {
        self.collidables.contains(&bot)
    }

    /// Number of registered bots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }
}

impl Physics for CollisionRegistry {
    fn add_collidable(&mut self, bot: BotId) {
        self.collidables.insert(bot);
    }

    fn remove_collidable(&mut self, bot: BotId) -> bool {
        self.collidables.remove(&bot)
    }
}
