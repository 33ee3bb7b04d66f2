//! The body shared by the player and every bot.
//!
//! A [`Sprite`] carries position, motion and presentation state. What it
//! looks like comes from its [`SpriteType`], looked up through the catalog on
//! each update and render pass.

use glam::{Vec2, Vec3};

use crate::constants::{IDLE_STATE, OPAQUE_ALPHA};
use crate::numeric::dimension_to_f32;
use crate::sprite_type::{ImageId, SpriteType, SpriteTypeCatalog, SpriteTypeId};

/// Logical state of a sprite, e.g. `"IDLE"` or `"WALKING"`.
///
/// The state selects the animation sequence played from the sprite type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteState(String);

impl SpriteState {
    /// Wraps an arbitrary state name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The resting state every sprite starts in.
    #[must_use]
    pub fn idle() -> Self {
        Self::new(IDLE_STATE)
    }

    /// Whether this is the resting state.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.0 == IDLE_STATE
    }

    /// Borrows the state name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SpriteState {
    fn default() -> Self {
        Self::idle()
    }
}

impl From<&str> for SpriteState {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Axis-aligned box relative to a sprite's position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingVolume {
    /// Offset of the box's top-left corner from the sprite position.
    pub offset: Vec2,
    /// Width and height of the box.
    pub size: Vec2,
}

impl BoundingVolume {
    /// A box exactly covering a texture of the given type.
    #[must_use]
    pub fn tight(sprite_type: &SpriteType) -> Self {
        Self {
            offset: Vec2::ZERO,
            size: Vec2::new(
                dimension_to_f32(sprite_type.texture_width()),
                dimension_to_f32(sprite_type.texture_height()),
            ),
        }
    }
}

/// How a sprite's rotation evolves on each update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Rotation only changes when set explicitly.
    #[default]
    Fixed,
    /// Rotation follows the direction of travel while moving.
    FaceVelocity,
}

/// Position, motion and presentation state of one on-screen entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// World position; `z` orders drawing.
    pub position: Vec3,
    /// World units travelled per frame.
    pub velocity: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// How [`Sprite::update_sprite`] treats rotation.
    pub rotation_mode: RotationMode,
    /// Opacity, 0 transparent to 255 opaque.
    pub alpha: u8,
    /// Shared artwork, if assigned.
    pub sprite_type: Option<SpriteTypeId>,
    /// Collision and centring box.
    pub bounding_volume: BoundingVolume,
    state: SpriteState,
    frame_index: usize,
    animation_counter: u32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_mode: RotationMode::Fixed,
            alpha: OPAQUE_ALPHA,
            sprite_type: None,
            bounding_volume: BoundingVolume::default(),
            state: SpriteState::idle(),
            frame_index: 0,
            animation_counter: 0,
        }
    }
}

impl Sprite {
    /// A sprite of `sprite_type` resting at `(x, y)`.
    #[must_use]
    pub fn new(sprite_type: SpriteTypeId, x: f32, y: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
            sprite_type: Some(sprite_type),
            ..Self::default()
        }
    }

    /// Builder-style setter for [`Sprite::rotation_mode`].
    #[must_use]
    pub const fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.rotation_mode = mode;
        self
    }

    /// Current logical state.
    #[must_use]
    pub const fn state(&self) -> &SpriteState {
        &self.state
    }

    /// Switches state and restarts the animation when the state changes.
    pub fn set_state(&mut self, state: impl Into<SpriteState>) {
        let next = state.into();
        if next != self.state {
            self.state = next;
            self.frame_index = 0;
            self.animation_counter = 0;
        }
    }

    /// Index of the current frame in the state's sequence.
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Updates spent on the current frame so far.
    #[must_use]
    pub const fn animation_counter(&self) -> u32 {
        self.animation_counter
    }

    /// Centre of the bounding volume in world coordinates.
    #[must_use]
    pub fn bounding_center(&self) -> Vec2 {
        self.position.truncate() + self.bounding_volume.offset + self.bounding_volume.size * 0.5
    }

    /// Sizes the bounding volume to the texture of the sprite's type.
    ///
    /// Leaves the volume untouched when the type is not in `catalog`.
    pub fn affix_tight_bounding_volume(&mut self, catalog: &SpriteTypeCatalog) {
        if let Some(sprite_type) = self.sprite_type.and_then(|id| catalog.get(id)) {
            self.bounding_volume = BoundingVolume::tight(sprite_type);
        }
    }

    /// Image to draw this frame, if the sprite's type is known.
    #[must_use]
    pub fn current_image(&self, catalog: &SpriteTypeCatalog) -> Option<ImageId> {
        let sprite_type = catalog.get(self.sprite_type?)?;
        Some(sprite_type.image_for(self.state.as_str(), self.frame_index))
    }

    /// Advances animation by one update and refreshes rotation.
    ///
    /// The counter always advances; frames roll over once the current
    /// frame's duration is spent, wrapping at the end of the sequence.
    pub fn update_sprite(&mut self, catalog: &SpriteTypeCatalog) {
        self.animation_counter = self.animation_counter.saturating_add(1);

        let current = self
            .sprite_type
            .and_then(|id| catalog.get(id))
            .and_then(|sprite_type| sprite_type.animation(self.state.as_str()));
        if let Some(sequence) = current {
            let duration = sequence
                .frame(self.frame_index)
                .map_or(1, |frame| frame.duration.max(1));
            if self.animation_counter >= duration {
                self.animation_counter = 0;
                self.frame_index = (self.frame_index + 1) % sequence.len().max(1);
            }
        }

        if self.rotation_mode == RotationMode::FaceVelocity && self.velocity != Vec2::ZERO {
            self.rotation = self.velocity.y.atan2(self.velocity.x);
        }
    }
}
