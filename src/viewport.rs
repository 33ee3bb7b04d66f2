//! The camera window into the game world.
//!
//! [`Viewport`] is the contract the manager relies on for visibility tests
//! and camera motion. [`Camera`] is a plain rectangular implementation with a
//! configurable centring tolerance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::CAMERA_CENTERING_TOLERANCE;

/// Size of the playable world in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl WorldBounds {
    /// Bounds of a `width` by `height` world.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds as a vector.
    #[must_use]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Camera contract used for visibility tests and follow motion.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Top-left corner of the view in world coordinates.
    fn position(&self) -> Vec2;

    /// Width and height of the view.
    fn size(&self) -> Vec2;

    /// Centre of the view in world coordinates.
    fn center(&self) -> Vec2 {
        self.position() + self.size() * 0.5
    }

    /// Whether the world rectangle at `(x, y)` of size `(width, height)`
    /// overlaps the view.
    fn is_visible(&self, x: f32, y: f32, width: f32, height: f32) -> bool;

    /// Whether `point` is close enough to the centre to count as centred.
    fn is_centered_on(&self, point: Vec2) -> bool;

    /// Moves the view by `delta`, keeping it inside `bounds`.
    fn move_by(&mut self, delta: Vec2, bounds: WorldBounds);
}

/// Runtime configuration for [`Camera`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Largest per-axis distance from the view centre that still counts as
    /// centred.
    pub centering_tolerance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            centering_tolerance: CAMERA_CENTERING_TOLERANCE,
        }
    }
}

/// Rectangular camera clamped to the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    size: Vec2,
    settings: CameraSettings,
}

impl Camera {
    /// A camera of the given size at the world origin.
    #[must_use]
    pub fn new(width: f32, height: f32, settings: CameraSettings) -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(width, height),
            settings,
        }
    }

    /// Places the camera at `position`, clamped to `bounds`.
    pub fn set_position(&mut self, position: Vec2, bounds: WorldBounds) {
        self.position = clamp_to_world(position, self.size, bounds);
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

impl Viewport for Camera {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn is_visible(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        let far = self.position + self.size;
        x + width > self.position.x && x < far.x && y + height > self.position.y && y < far.y
    }

    fn is_centered_on(&self, point: Vec2) -> bool {
        let offset = (point - self.center()).abs();
        let tolerance = self.settings.centering_tolerance;
        offset.x <= tolerance && offset.y <= tolerance
    }

    fn move_by(&mut self, delta: Vec2, bounds: WorldBounds) {
        self.position = clamp_to_world(self.position + delta, self.size, bounds);
    }
}

/// Clamps a view origin so the view stays within `[0, world - view]`.
///
/// A view larger than the world is pinned to the origin.
#[must_use]
pub fn clamp_to_world(origin: Vec2, view: Vec2, bounds: WorldBounds) -> Vec2 {
    let max = (bounds.size() - view).max(Vec2::ZERO);
    origin.clamp(Vec2::ZERO, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WORLD: WorldBounds = WorldBounds::new(1000.0, 800.0);

    fn camera() -> Camera {
        Camera::new(200.0, 100.0, CameraSettings::default())
    }

    #[rstest]
    #[case::inside(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0))]
    #[case::negative(Vec2::new(-5.0, -1.0), Vec2::ZERO)]
    #[case::past_far_edge(Vec2::new(900.0, 750.0), Vec2::new(800.0, 700.0))]
    fn moves_are_clamped_to_world(#[case] delta: Vec2, #[case] expected: Vec2) {
        let mut cam = camera();
        cam.move_by(delta, WORLD);
        assert_eq!(cam.position(), expected);
    }

    #[test]
    fn oversized_view_pins_to_origin() {
        let mut cam = Camera::new(2000.0, 2000.0, CameraSettings::default());
        cam.move_by(Vec2::new(50.0, 50.0), WORLD);
        assert_eq!(cam.position(), Vec2::ZERO);
    }

    #[rstest]
    #[case::overlapping(150.0, 50.0, 100.0, 100.0, true)]
    #[case::touching_right_edge(200.0, 0.0, 10.0, 10.0, false)]
    #[case::left_of_view(-20.0, 0.0, 20.0, 20.0, false)]
    #[case::straddling_left_edge(-10.0, 0.0, 20.0, 20.0, true)]
    #[case::below_view(0.0, 100.0, 10.0, 10.0, false)]
    fn visibility_is_rectangle_overlap(
        #[case] x: f32,
        #[case] y: f32,
        #[case] width: f32,
        #[case] height: f32,
        #[case] expected: bool,
    ) {
        assert_eq!(camera().is_visible(x, y, width, height), expected);
    }

    #[test]
    fn centring_uses_tolerance_on_each_axis() {
        let cam = camera();
        let center = cam.center();
        assert_eq!(center, Vec2::new(100.0, 50.0));
        assert!(cam.is_centered_on(center + Vec2::splat(CAMERA_CENTERING_TOLERANCE)));
        assert!(!cam.is_centered_on(center + Vec2::new(CAMERA_CENTERING_TOLERANCE + 1.0, 0.0)));
    }

    #[test]
    fn settings_deserialise_with_defaults() {
        let parsed: CameraSettings =
            serde_json::from_str("{}").unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(parsed, CameraSettings::default());
    }
}
