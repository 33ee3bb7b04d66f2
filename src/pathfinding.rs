//! Pathfinder boundary.
//!
//! Path search itself lives outside this crate; the manager only asks the
//! installed pathfinder to refresh each sprite's path once per frame.

use crate::entity::Sprite;

/// Per-frame path refresh for one sprite.
#[cfg_attr(test, mockall::automock)]
pub trait Pathfinder: Send {
    /// Updates `sprite`'s route, typically by steering its velocity.
    fn update_path(&mut self, sprite: &mut Sprite);
}
