//! Sprite and entity management for 2D side-scrolling games.
//!
//! [`EntityManager`] owns the player, the level's bots and the catalog of
//! shared sprite types. Once per frame it refreshes paths, moves the camera
//! after the player, runs bot behaviour, advances animations and submits
//! visible sprites to a render queue. Rendering, physics and pathfinding stay
//! behind the [`Viewport`], [`RenderQueue`], [`Physics`] and [`Pathfinder`]
//! traits.
//!
//! ```
//! use sidescroll::prelude::*;
//!
//! let mut world = World::new(WorldBounds::new(2000.0, 1000.0), CollisionRegistry::default(), 7);
//! let mut camera = Camera::new(640.0, 480.0, CameraSettings::default());
//! let mut manager = EntityManager::default();
//!
//! let crate_type = manager.register_sprite_type(SpriteType::new("crate", ImageId(1), 32, 32));
//! manager.spawn_bot(&mut world, crate_type, 100.0, 100.0).unwrap();
//!
//! manager.update(&mut world, &mut camera);
//! let mut frame = RenderList::default();
//! assert_eq!(manager.submit_render_list(&mut frame, &camera), 1);
//! ```
pub mod arena;
pub mod bot;
pub mod constants;
pub mod entity;
pub mod error;
pub mod follow;
pub mod logging;
pub mod manager;
pub mod numeric;
pub mod pathfinding;
pub mod physics;
pub mod render;
pub mod settings;
pub mod sprite_type;
pub mod viewport;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use arena::BotId;
pub use bot::{Bot, BotSettings, RandomJumping, Think, ThinkContext};
pub use entity::{BoundingVolume, RotationMode, Sprite, SpriteState};
pub use error::{ManagerError, SettingsError};
pub use follow::{plan_camera_move, FollowInput, FollowSettings};
pub use logging::init as init_logging;
pub use manager::{EntityManager, UnloadReport};
pub use pathfinding::Pathfinder;
pub use physics::{CollisionRegistry, Physics};
pub use render::{RenderItem, RenderList, RenderQueue};
pub use settings::ManagerSettings;
pub use sprite_type::{
    AnimationFrame, AnimationSequence, ImageId, SpriteType, SpriteTypeCatalog, SpriteTypeId,
};
pub use viewport::{Camera, CameraSettings, Viewport, WorldBounds};
pub use world::World;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sidescroll::prelude::*;
    //! ```

    pub use crate::{
        Bot, BotId, Camera, CameraSettings, CollisionRegistry, EntityManager, ImageId,
        ManagerSettings, Pathfinder, Physics, RenderList, RenderQueue, Sprite, SpriteType,
        SpriteTypeId, Think, ThinkContext, Viewport, World, WorldBounds,
    };
}
