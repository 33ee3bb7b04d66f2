//! Non-player entities and their decision making.
//!
//! A [`Bot`] pairs a [`Sprite`] with a [`Think`] behaviour. The manager
//! calls `think` once per frame for every bot, in collection order, right
//! before advancing that bot's animation.

use glam::Vec2;
use log::trace;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::constants::{BOT_MAX_THINK_CYCLES, BOT_MAX_VELOCITY, BOT_MIN_THINK_CYCLES};
use crate::entity::Sprite;
use crate::viewport::WorldBounds;

/// What a behaviour may consult while deciding.
pub struct ThinkContext<'a> {
    /// Extents of the level.
    pub bounds: WorldBounds,
    /// Level-wide random source.
    pub rng: &'a mut dyn RngCore,
}

/// Per-frame decision step of a bot.
pub trait Think: Send {
    /// Inspects and steers `sprite` for the coming frame.
    fn think(&mut self, sprite: &mut Sprite, ctx: &mut ThinkContext<'_>);
}

/// Parameters of the built-in random-jumping behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Fewest frames between decisions.
    pub min_think_cycles: u32,
    /// Most frames between decisions.
    pub max_think_cycles: u32,
    /// Largest velocity component a decision picks.
    pub max_velocity: f32,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            min_think_cycles: BOT_MIN_THINK_CYCLES,
            max_think_cycles: BOT_MAX_THINK_CYCLES,
            max_velocity: BOT_MAX_VELOCITY,
        }
    }
}

/// Waits a random number of frames, then jumps in a random direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomJumping {
    settings: BotSettings,
    cycles_remaining: u32,
}

impl RandomJumping {
    /// A bot that makes its first decision on its first frame.
    #[must_use]
    pub const fn new(settings: BotSettings) -> Self {
        Self {
            settings,
            cycles_remaining: 0,
        }
    }

    /// Frames left before the next decision.
    #[must_use]
    pub const fn cycles_remaining(&self) -> u32 {
        self.cycles_remaining
    }

    /// Jump speed from settings; non-finite speeds keep the bot grounded.
    fn jump_speed(&self) -> f32 {
        let max = self.settings.max_velocity.abs();
        if max.is_finite() {
            max
        } else {
            trace!("ignoring non-finite max velocity {max}");
            0.0
        }
    }

    fn pick_jump(&self, rng: &mut dyn RngCore) -> Vec2 {
        let max = self.jump_speed();
        // Sampled as a unit fraction so `-max..=max` never has to be spanned.
        let vx = rng.gen_range(-1.0_f32..=1.0) * max;
        Vec2::new(vx, -max)
    }

    fn pick_cycles(&self, rng: &mut dyn RngCore) -> u32 {
        let min = self.settings.min_think_cycles;
        let max = self.settings.max_think_cycles.max(min);
        rng.gen_range(min..=max)
    }
}

impl Think for RandomJumping {
    fn think(&mut self, sprite: &mut Sprite, ctx: &mut ThinkContext<'_>) {
        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
            return;
        }
        sprite.velocity = self.pick_jump(ctx.rng);
        self.cycles_remaining = self.pick_cycles(ctx.rng);
        trace!(
            "bot jumped with velocity {:?}, next decision in {} frames",
            sprite.velocity,
            self.cycles_remaining
        );
    }
}

/// A non-player entity: a sprite steered by a behaviour.
pub struct Bot {
    /// The bot's body.
    pub sprite: Sprite,
    brain: Box<dyn Think>,
}

impl Bot {
    /// Combines a body with a behaviour.
    pub fn new(sprite: Sprite, brain: impl Think + 'static) -> Self {
        Self {
            sprite,
            brain: Box::new(brain),
        }
    }

    /// Runs one decision step.
    pub fn think(&mut self, ctx: &mut ThinkContext<'_>) {
        self.brain.think(&mut self.sprite, ctx);
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("sprite", &self.sprite)
            .finish_non_exhaustive()
    }
}
