//! Headless demo: spawns a level of random-jumping bots and runs it for a
//! number of frames, logging what the camera and renderer would see.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sidescroll::prelude::*;
use sidescroll::{init_logging, AnimationFrame, AnimationSequence};

/// Sprite manager demo for a side-scrolling level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON settings file overriding the defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Number of bots to spawn
    #[arg(short, long, default_value_t = 12)]
    bots: u16,

    /// Seed for the level's random source
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

/// Moves each sprite along its velocity; stands in for a real pathfinder.
struct Drift;

impl Pathfinder for Drift {
    fn update_path(&mut self, sprite: &mut Sprite) {
        sprite.position += sprite.velocity.extend(0.0);
    }
}

const WORLD_WIDTH: f32 = 3200.0;
const WORLD_HEIGHT: f32 = 1200.0;
const BOT_SPACING: f32 = 160.0;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match &args.settings {
        Some(path) => ManagerSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ManagerSettings::default(),
    };

    let bounds = WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT);
    let mut world = World::new(bounds, CollisionRegistry::default(), args.seed);
    let mut camera = Camera::new(800.0, 600.0, settings.camera.clone());
    let mut manager = EntityManager::new(settings);
    manager.set_pathfinder(Drift);

    let player_type = manager.register_sprite_type(SpriteType::new("player", ImageId(1), 32, 48));
    let bot_type = manager.register_sprite_type(
        SpriteType::new("jumper", ImageId(10), 32, 32).with_animation(
            "IDLE",
            AnimationSequence::new(vec![
                AnimationFrame {
                    image: ImageId(11),
                    duration: 8,
                },
                AnimationFrame {
                    image: ImageId(12),
                    duration: 8,
                },
            ]),
        ),
    );

    let player = manager.player_mut();
    player.sprite_type = Some(player_type);
    player.position = glam::Vec3::new(400.0, 300.0, 1.0);
    player.velocity = glam::Vec2::new(2.0, 0.0);
    player.set_state("WALKING");

    for n in 0..args.bots {
        let x = 200.0 + f32::from(n) * BOT_SPACING;
        manager
            .spawn_bot(&mut world, bot_type, x, 500.0)
            .context("spawning demo bot")?;
    }

    let mut frame = RenderList::default();
    let mut drawn = 0_usize;
    for _ in 0..args.frames {
        manager.update(&mut world, &mut camera);
        frame.clear();
        drawn += manager.submit_render_list(&mut frame, &camera);
    }

    info!(
        "simulated {} frames: camera at {:?}, {} bots, {} sprites drawn",
        args.frames,
        camera.position(),
        manager.bot_count(),
        drawn
    );

    let report = manager.unload_all(&mut world);
    info!(
        "unloaded {} bots, {} sprite types (pathfinder released: {})",
        report.bots_released, report.sprite_types_released, report.pathfinder_released
    );
    Ok(())
}
