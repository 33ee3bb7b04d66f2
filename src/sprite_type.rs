//! Shared visual descriptors and the catalog that owns them.
//!
//! A [`SpriteType`] describes artwork shared by many sprites: the texture,
//! its dimensions and one animation sequence per logical state. Sprites hold
//! a [`SpriteTypeId`] into the [`SpriteTypeCatalog`] rather than a reference,
//! so the catalog can be cleared and reloaded without leaving sprites
//! pointing at freed descriptors. Ids carry the catalog epoch they were
//! issued in; clearing starts a new epoch, so an id from before a reload
//! resolves to nothing instead of to whichever type took its index.

use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

/// Opaque handle of an image owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ImageId(pub u32);

/// Index of a [`SpriteType`] in its [`SpriteTypeCatalog`], tagged with the
/// catalog epoch that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteTypeId {
    epoch: u32,
    index: usize,
}

impl SpriteTypeId {
    /// The id of the `index`-th type in a catalog that was never cleared.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { epoch: 0, index }
    }

    /// Registration order within the issuing epoch, starting at zero.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Number of times the catalog had been cleared when this id was issued.
    #[must_use]
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

impl fmt::Display for SpriteTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)?;
        if self.epoch > 0 {
            write!(f, "@{}", self.epoch)?;
        }
        Ok(())
    }
}

/// One frame of an animation: the image to show and for how many updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Image drawn while this frame is current.
    pub image: ImageId,
    /// Number of sprite updates the frame stays on screen. Zero behaves as one.
    pub duration: u32,
}

/// Ordered frames played for one logical sprite state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationSequence {
    frames: Vec<AnimationFrame>,
}

impl AnimationSequence {
    /// Builds a sequence from its frames.
    #[must_use]
    pub const fn new(frames: Vec<AnimationFrame>) -> Self {
        Self { frames }
    }

    /// Frame at `index`, if the sequence has one.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&AnimationFrame> {
        self.frames.get(index)
    }

    /// Number of frames in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Artwork shared by every sprite of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteType {
    name: String,
    texture: ImageId,
    texture_width: u32,
    texture_height: u32,
    animations: HashMap<String, AnimationSequence>,
}

impl SpriteType {
    /// Creates a sprite type with no animations; sprites of this type draw
    /// `texture` until a sequence for their state is added.
    #[must_use]
    pub fn new(name: impl Into<String>, texture: ImageId, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            texture,
            texture_width: width,
            texture_height: height,
            animations: HashMap::new(),
        }
    }

    /// Adds the sequence played while a sprite is in `state`.
    #[must_use]
    pub fn with_animation(mut self, state: impl Into<String>, sequence: AnimationSequence) -> Self {
        self.animations.insert(state.into(), sequence);
        self
    }

    /// Human-readable name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fallback image for states without an animation.
    #[must_use]
    pub const fn texture(&self) -> ImageId {
        self.texture
    }

    /// Width of the texture in world units.
    #[must_use]
    pub const fn texture_width(&self) -> u32 {
        self.texture_width
    }

    /// Height of the texture in world units.
    #[must_use]
    pub const fn texture_height(&self) -> u32 {
        self.texture_height
    }

    /// Sequence for `state`, if one was registered.
    #[must_use]
    pub fn animation(&self, state: &str) -> Option<&AnimationSequence> {
        self.animations.get(state)
    }

    /// Image shown for `state` at `frame_index`, falling back to the texture.
    #[must_use]
    pub fn image_for(&self, state: &str, frame_index: usize) -> ImageId {
        self.animation(state)
            .and_then(|sequence| sequence.frame(frame_index))
            .map_or(self.texture, |frame| frame.image)
    }
}

/// Append-only store of sprite types for the current level.
#[derive(Debug, Default)]
pub struct SpriteTypeCatalog {
    types: Vec<SpriteType>,
    epoch: u32,
}

impl SpriteTypeCatalog {
    /// Appends `sprite_type` and returns its index.
    pub fn register(&mut self, sprite_type: SpriteType) -> SpriteTypeId {
        let id = SpriteTypeId {
            epoch: self.epoch,
            index: self.types.len(),
        };
        self.types.push(sprite_type);
        id
    }

    /// Looks up a type; `None` for indices past the end and for ids issued
    /// before the last [`clear`](Self::clear).
    #[must_use]
    pub fn get(&self, id: SpriteTypeId) -> Option<&SpriteType> {
        if id.epoch != self.epoch {
            return None;
        }
        self.types.get(id.index)
    }

    /// Whether `id` refers to a registered type.
    #[must_use]
    pub fn contains(&self, id: SpriteTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Drops every registered type and returns how many were released.
    ///
    /// Ids handed out so far stop resolving, even once new types reuse
    /// their indices. Clearing an empty catalog keeps the epoch.
    pub fn clear(&mut self) -> usize {
        let released = self.types.len();
        if released > 0 {
            self.types.clear();
            self.epoch = self.epoch.wrapping_add(1);
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker() -> SpriteType {
        SpriteType::new("walker", ImageId(7), 32, 48).with_animation(
            "WALKING",
            AnimationSequence::new(vec![
                AnimationFrame {
                    image: ImageId(1),
                    duration: 4,
                },
                AnimationFrame {
                    image: ImageId(2),
                    duration: 4,
                },
            ]),
        )
    }

    #[test]
    fn register_returns_sequential_indices() {
        let mut catalog = SpriteTypeCatalog::default();
        assert_eq!(catalog.register(walker()), SpriteTypeId::new(0));
        assert_eq!(catalog.register(walker()), SpriteTypeId::new(1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn lookup_past_the_end_is_none() {
        let mut catalog = SpriteTypeCatalog::default();
        catalog.register(walker());
        assert!(catalog.get(SpriteTypeId::new(1)).is_none());
        assert!(!catalog.contains(SpriteTypeId::new(1)));
    }

    #[test]
    fn image_falls_back_to_texture() {
        let sprite_type = walker();
        assert_eq!(sprite_type.image_for("WALKING", 1), ImageId(2));
        assert_eq!(sprite_type.image_for("WALKING", 9), ImageId(7));
        assert_eq!(sprite_type.image_for("IDLE", 0), ImageId(7));
    }

    #[test]
    fn clear_reports_released_count_once() {
        let mut catalog = SpriteTypeCatalog::default();
        catalog.register(walker());
        catalog.register(walker());
        assert_eq!(catalog.clear(), 2);
        assert_eq!(catalog.clear(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn ids_from_before_a_clear_stop_resolving() {
        let mut catalog = SpriteTypeCatalog::default();
        let hero = catalog.register(SpriteType::new("hero", ImageId(1), 8, 8));
        catalog.clear();
        let rock = catalog.register(SpriteType::new("rock", ImageId(99), 8, 8));

        assert_eq!(rock.index(), hero.index());
        assert_ne!(rock, hero);
        assert!(catalog.get(hero).is_none());
        assert!(!catalog.contains(hero));
        assert_eq!(catalog.get(rock).map(SpriteType::name), Some("rock"));
        assert_eq!(rock.to_string(), "#0@1");
    }

    #[test]
    fn clearing_an_empty_catalog_keeps_ids_valid() {
        let mut catalog = SpriteTypeCatalog::default();
        assert_eq!(catalog.clear(), 0);
        assert_eq!(catalog.register(walker()), SpriteTypeId::new(0));
    }
}
