//! Utility helpers for tests.
//!
//! Fixtures build small levels quickly; the recording collaborators capture
//! the order in which the manager visits sprites so tests can assert on it.

use std::sync::{Arc, Mutex, PoisonError};

use glam::Vec3;
use sidescroll::{
    Bot, Camera, CameraSettings, CollisionRegistry, ImageId, Pathfinder, Sprite, SpriteType,
    SpriteTypeId, Think, ThinkContext, World, WorldBounds,
};

/// Shared, thread-safe event log.
pub type Log<T> = Arc<Mutex<Vec<T>>>;

/// Snapshot of `log`, tolerating a poisoned lock from a failed assertion.
pub fn entries<T: Clone>(log: &Log<T>) -> Vec<T> {
    log.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn record<T>(log: &Log<T>, value: T) {
    log.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(value);
}

/// A square, animation-free sprite type.
pub fn square_type(name: &str, image: u32, side: u32) -> SpriteType {
    SpriteType::new(name, ImageId(image), side, side)
}

/// A level of the given size with an in-memory collision registry.
pub fn world(width: f32, height: f32) -> World<CollisionRegistry> {
    World::new(
        WorldBounds::new(width, height),
        CollisionRegistry::default(),
        0,
    )
}

/// A camera at the origin with default settings.
pub fn camera(width: f32, height: f32) -> Camera {
    Camera::new(width, height, CameraSettings::default())
}

/// Pathfinder that only records the position of every sprite it visits.
#[derive(Debug, Clone, Default)]
pub struct RecordingPathfinder {
    /// Positions in visiting order.
    pub visits: Log<Vec3>,
}

impl Pathfinder for RecordingPathfinder {
    fn update_path(&mut self, sprite: &mut Sprite) {
        record(&self.visits, sprite.position);
    }
}

/// Behaviour that records its label and the sprite's animation counter each
/// time it thinks, leaving the sprite untouched.
#[derive(Debug, Clone)]
pub struct RecordingBrain {
    label: u32,
    thoughts: Log<(u32, u32)>,
}

impl RecordingBrain {
    /// A brain writing `(label, animation_counter)` pairs into `thoughts`.
    pub fn new(label: u32, thoughts: Log<(u32, u32)>) -> Self {
        Self { label, thoughts }
    }
}

impl Think for RecordingBrain {
    fn think(&mut self, sprite: &mut Sprite, _ctx: &mut ThinkContext<'_>) {
        record(&self.thoughts, (self.label, sprite.animation_counter()));
    }
}

/// A bot of `sprite_type` at `(x, y)` driven by a [`RecordingBrain`].
pub fn recording_bot(
    sprite_type: SpriteTypeId,
    x: f32,
    y: f32,
    label: u32,
    thoughts: &Log<(u32, u32)>,
) -> Bot {
    Bot::new(
        Sprite::new(sprite_type, x, y),
        RecordingBrain::new(label, Arc::clone(thoughts)),
    )
}
