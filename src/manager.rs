//! The entity manager: player, bots, sprite types and the per-frame loop.
//!
//! Each frame the host calls [`EntityManager::update`] and then
//! [`EntityManager::submit_render_list`]. The update runs three passes in a
//! fixed order: pathfinding for every sprite, camera follow, then animation
//! (with each bot thinking right before its animation advances). Sprites are
//! always visited player first, then bots in the order they were added.

use glam::Vec2;
use log::{debug, trace};

use crate::arena::{BotArena, BotId};
use crate::bot::{Bot, RandomJumping};
use crate::constants::OPAQUE_ALPHA;
use crate::entity::{RotationMode, Sprite, SpriteState};
use crate::error::ManagerError;
use crate::follow::{plan_camera_move, FollowInput};
use crate::numeric::{dimension_to_f32, round_to_i32};
use crate::pathfinding::Pathfinder;
use crate::physics::Physics;
use crate::render::{RenderItem, RenderQueue};
use crate::settings::ManagerSettings;
use crate::sprite_type::{SpriteType, SpriteTypeCatalog, SpriteTypeId};
use crate::viewport::{Viewport, WorldBounds};
use crate::world::World;

/// What a clear or unload released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnloadReport {
    /// Bots dropped and unregistered from physics.
    pub bots_released: usize,
    /// Sprite types dropped from the catalog.
    pub sprite_types_released: usize,
    /// Whether a pathfinder was dropped.
    pub pathfinder_released: bool,
}

impl UnloadReport {
    /// Whether nothing was released.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bots_released == 0 && self.sprite_types_released == 0 && !self.pathfinder_released
    }
}

/// Owner of every sprite in a level.
pub struct EntityManager {
    player: Sprite,
    bots: BotArena<Bot>,
    sprite_types: SpriteTypeCatalog,
    pathfinder: Option<Box<dyn Pathfinder>>,
    settings: ManagerSettings,
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new(ManagerSettings::default())
    }
}

impl std::fmt::Debug for EntityManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityManager")
            .field("player", &self.player)
            .field("bots", &self.bots.len())
            .field("sprite_types", &self.sprite_types.len())
            .field("has_pathfinder", &self.pathfinder.is_some())
            .finish_non_exhaustive()
    }
}

impl EntityManager {
    /// An empty level with a resting player that turns to face its velocity.
    #[must_use]
    pub fn new(settings: ManagerSettings) -> Self {
        Self {
            player: Sprite::default().with_rotation_mode(RotationMode::FaceVelocity),
            bots: BotArena::default(),
            sprite_types: SpriteTypeCatalog::default(),
            pathfinder: None,
            settings,
        }
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    /// The player sprite.
    #[must_use]
    pub const fn player(&self) -> &Sprite {
        &self.player
    }

    /// The player sprite, mutably.
    pub fn player_mut(&mut self) -> &mut Sprite {
        &mut self.player
    }

    /// Installs the pathfinder, returning the one it replaces.
    pub fn set_pathfinder(
        &mut self,
        pathfinder: impl Pathfinder + 'static,
    ) -> Option<Box<dyn Pathfinder>> {
        self.pathfinder.replace(Box::new(pathfinder))
    }

    /// Whether a pathfinder is installed.
    #[must_use]
    pub const fn has_pathfinder(&self) -> bool {
        self.pathfinder.is_some()
    }

    /// Adds a sprite type to the catalog and returns its index.
    ///
    /// Indices are handed out sequentially from zero.
    pub fn register_sprite_type(&mut self, sprite_type: SpriteType) -> SpriteTypeId {
        let id = self.sprite_types.register(sprite_type);
        debug!("registered sprite type {id}");
        id
    }

    /// Looks up a registered sprite type.
    #[must_use]
    pub fn lookup_sprite_type(&self, id: SpriteTypeId) -> Option<&SpriteType> {
        self.sprite_types.get(id)
    }

    /// The sprite type catalog.
    #[must_use]
    pub const fn sprite_types(&self) -> &SpriteTypeCatalog {
        &self.sprite_types
    }

    /// Number of registered sprite types.
    #[must_use]
    pub fn sprite_type_count(&self) -> usize {
        self.sprite_types.len()
    }

    /// Creates a random-jumping bot resting at `(x, y)`.
    ///
    /// The bot uses the default behaviour parameters from settings, starts
    /// idle and opaque, is registered with physics and gets a bounding volume
    /// fitted to its texture.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::SpriteTypeNotFound`] when `sprite_type` is not
    /// registered.
    pub fn spawn_bot<P: Physics>(
        &mut self,
        world: &mut World<P>,
        sprite_type: SpriteTypeId,
        x: f32,
        y: f32,
    ) -> Result<BotId, ManagerError> {
        let mut sprite = Sprite::new(sprite_type, x, y);
        sprite.set_state(SpriteState::idle());
        sprite.alpha = OPAQUE_ALPHA;
        let brain = RandomJumping::new(self.settings.bot.clone());
        self.add_bot(world, Bot::new(sprite, brain))
    }

    /// Takes ownership of an externally built bot.
    ///
    /// The bot joins the end of the update order, is registered with physics
    /// and gets a bounding volume fitted to its texture.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::UntypedBot`] when the bot has no sprite type and
    /// [`ManagerError::SpriteTypeNotFound`] when its type is not registered.
    pub fn add_bot<P: Physics>(
        &mut self,
        world: &mut World<P>,
        mut bot: Bot,
    ) -> Result<BotId, ManagerError> {
        let sprite_type = bot.sprite.sprite_type.ok_or(ManagerError::UntypedBot)?;
        if !self.sprite_types.contains(sprite_type) {
            return Err(ManagerError::SpriteTypeNotFound(sprite_type));
        }
        bot.sprite.affix_tight_bounding_volume(&self.sprite_types);
        let id = self.bots.insert(bot);
        world.physics.add_collidable(id);
        debug!("added bot {id} of type {sprite_type}");
        Ok(id)
    }

    /// Unlinks a bot from the level and physics and hands it back.
    ///
    /// # Errors
    ///
    /// Returns [`ManagerError::BotNotFound`] when `id` is unknown or the bot
    /// was already removed.
    pub fn remove_bot<P: Physics>(
        &mut self,
        world: &mut World<P>,
        id: BotId,
    ) -> Result<Bot, ManagerError> {
        let bot = self.bots.remove(id).ok_or(ManagerError::BotNotFound(id))?;
        if !world.physics.remove_collidable(id) {
            debug!("bot {id} was not registered with physics");
        }
        debug!("removed bot {id}");
        Ok(bot)
    }

    /// A managed bot, if `id` is live.
    #[must_use]
    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(id)
    }

    /// A managed bot, mutably, if `id` is live.
    pub fn bot_mut(&mut self, id: BotId) -> Option<&mut Bot> {
        self.bots.get_mut(id)
    }

    /// Whether `id` refers to a managed bot.
    #[must_use]
    pub fn contains_bot(&self, id: BotId) -> bool {
        self.bots.contains(id)
    }

    /// Bots in update order.
    pub fn bots(&self) -> impl Iterator<Item = (BotId, &Bot)> + '_ {
        self.bots.iter()
    }

    /// Bot ids in update order.
    #[must_use]
    pub fn bot_ids(&self) -> &[BotId] {
        self.bots.ids()
    }

    /// Number of managed bots.
    #[must_use]
    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }

    /// Shifts every bot right by the configured reset offset.
    pub fn reset_bots(&mut self) {
        let offset = self.settings.reset_offset;
        self.bots.for_each_mut(|_, bot| bot.sprite.position.x += offset);
        debug!("reset {} bots by {offset}", self.bots.len());
    }

    /// Releases every bot and sprite type, keeping the pathfinder.
    ///
    /// Each bot is unregistered from physics exactly once. Calling this on an
    /// empty manager releases nothing.
    pub fn clear_sprites<P: Physics>(&mut self, world: &mut World<P>) -> UnloadReport {
        let drained = self.bots.drain();
        for (id, _bot) in &drained {
            if !world.physics.remove_collidable(*id) {
                debug!("bot {id} was not registered with physics");
            }
        }
        let report = UnloadReport {
            bots_released: drained.len(),
            sprite_types_released: self.sprite_types.clear(),
            pathfinder_released: false,
        };
        if !report.is_empty() {
            debug!(
                "cleared {} bots and {} sprite types",
                report.bots_released, report.sprite_types_released
            );
        }
        report
    }

    /// Releases every bot, every sprite type and the pathfinder.
    ///
    /// A second call finds nothing left and returns an empty report.
    pub fn unload_all<P: Physics>(&mut self, world: &mut World<P>) -> UnloadReport {
        let mut report = self.clear_sprites(world);
        report.pathfinder_released = self.pathfinder.take().is_some();
        if report.pathfinder_released {
            debug!("released pathfinder");
        }
        report
    }

    /// Queues a draw command for `sprite` if it overlaps the viewport.
    ///
    /// Screen coordinates are the world position minus the camera offset,
    /// rounded to whole pixels. Sprites without a registered type are never
    /// queued. Returns whether an item was queued.
    pub fn submit_visible<Q, V>(&self, sprite: &Sprite, queue: &mut Q, viewport: &V) -> bool
    where
        Q: RenderQueue + ?Sized,
        V: Viewport + ?Sized,
    {
        let Some(sprite_type) = sprite.sprite_type.and_then(|id| self.sprite_types.get(id))
        else {
            debug!("skipping sprite without a registered type");
            return false;
        };

        let width = sprite_type.texture_width();
        let height = sprite_type.texture_height();
        let position = sprite.position;
        if !viewport.is_visible(
            position.x,
            position.y,
            dimension_to_f32(width),
            dimension_to_f32(height),
        ) {
            return false;
        }

        let camera = viewport.position();
        queue.push(RenderItem {
            image: sprite_type.image_for(sprite.state().as_str(), sprite.frame_index()),
            x: round_to_i32(position.x - camera.x),
            y: round_to_i32(position.y - camera.y),
            z: round_to_i32(position.z),
            alpha: sprite.alpha,
            width,
            height,
            rotation: sprite.rotation,
        });
        true
    }

    /// Queues every visible sprite: the player, then bots in update order.
    ///
    /// Returns how many items were queued.
    pub fn submit_render_list<Q, V>(&self, queue: &mut Q, viewport: &V) -> usize
    where
        Q: RenderQueue + ?Sized,
        V: Viewport + ?Sized,
    {
        let mut queued = usize::from(self.submit_visible(&self.player, queue, viewport));
        for (_, bot) in self.bots.iter() {
            queued += usize::from(self.submit_visible(&bot.sprite, queue, viewport));
        }
        trace!("queued {queued} render items");
        queued
    }

    /// Advances the level by one frame.
    ///
    /// Runs pathfinding for every sprite, moves the camera to follow the
    /// player, then lets each bot think and advances every animation.
    pub fn update<P, V>(&mut self, world: &mut World<P>, viewport: &mut V)
    where
        P: Physics,
        V: Viewport + ?Sized,
    {
        self.update_paths();
        self.follow_player(world.bounds, viewport);

        self.player.update_sprite(&self.sprite_types);
        let sprite_types = &self.sprite_types;
        self.bots.for_each_mut(|_, bot| {
            bot.think(&mut world.think_context());
            bot.sprite.update_sprite(sprite_types);
        });
    }

    fn update_paths(&mut self) {
        let Some(pathfinder) = self.pathfinder.as_mut() else {
            trace!("no pathfinder installed; skipping path updates");
            return;
        };
        pathfinder.update_path(&mut self.player);
        self.bots
            .for_each_mut(|_, bot| pathfinder.update_path(&mut bot.sprite));
    }

    /// Camera displacement the follow pass would apply this frame, before
    /// the viewport clamps it to `bounds`.
    #[must_use]
    pub fn plan_follow<V>(&self, viewport: &V, bounds: WorldBounds) -> Option<Vec2>
    where
        V: Viewport + ?Sized,
    {
        let player_center = self.player.bounding_center();
        let input = FollowInput {
            player_center,
            player_velocity: self.player.velocity,
            player_idle: self.player.state().is_idle(),
            player_centered: viewport.is_centered_on(player_center),
            view_position: viewport.position(),
            view_size: viewport.size(),
            view_center: viewport.center(),
            world: bounds,
        };
        plan_camera_move(&input, &self.settings.follow)
    }

    fn follow_player<V>(&self, bounds: WorldBounds, viewport: &mut V)
    where
        V: Viewport + ?Sized,
    {
        if let Some(delta) = self.plan_follow(viewport, bounds) {
            trace!("camera moves by {delta:?}");
            viewport.move_by(delta, bounds);
        }
    }
}
