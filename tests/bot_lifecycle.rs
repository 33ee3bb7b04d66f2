//! Integration tests for adding, removing, resetting and unloading bots.

use glam::Vec3;
use mockall::mock;
use mockall::predicate::eq;
use rstest::rstest;
use sidescroll::{
    BotId, CollisionRegistry, EntityManager, ImageId, ManagerError, Physics, RenderList,
    SpriteTypeId, UnloadReport, World, WorldBounds,
};
use test_utils::{square_type, RecordingPathfinder};

mock! {
    Collisions {}
    impl Physics for Collisions {
        fn add_collidable(&mut self, bot: BotId);
        fn remove_collidable(&mut self, bot: BotId) -> bool;
    }
}

fn level_with_bots(xs: &[f32]) -> (EntityManager, World<CollisionRegistry>, Vec<BotId>) {
    let mut manager = EntityManager::default();
    let mut world = test_utils::world(2000.0, 2000.0);
    let bot_type = manager.register_sprite_type(square_type("bot", 1, 16));
    let ids = xs
        .iter()
        .map(|&x| {
            manager
                .spawn_bot(&mut world, bot_type, x, 0.0)
                .unwrap_or_else(|e| panic!("spawn failed: {e}"))
        })
        .collect();
    (manager, world, ids)
}

#[test]
fn physics_tracks_exactly_the_managed_bots() {
    let (mut manager, mut world, ids) = level_with_bots(&[10.0, 20.0, 30.0]);
    assert_eq!(world.physics.len(), 3);

    let &[first, second, third] = ids.as_slice() else {
        panic!("expected three bots, got {ids:?}");
    };
    manager
        .remove_bot(&mut world, second)
        .unwrap_or_else(|e| panic!("remove failed: {e}"));

    assert_eq!(manager.bot_ids(), &[first, third]);
    assert!(world.physics.contains(first));
    assert!(!world.physics.contains(second));
    assert!(world.physics.contains(third));
}

#[test]
fn removed_handle_is_stale_even_after_slot_reuse() {
    let (mut manager, mut world, ids) = level_with_bots(&[10.0]);
    let &[old] = ids.as_slice() else {
        panic!("expected one bot, got {ids:?}");
    };
    manager
        .remove_bot(&mut world, old)
        .unwrap_or_else(|e| panic!("remove failed: {e}"));

    let fresh = manager
        .spawn_bot(&mut world, SpriteTypeId::new(0), 50.0, 0.0)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));

    assert_ne!(fresh, old);
    assert!(manager.bot(old).is_none());
    assert_eq!(
        manager.remove_bot(&mut world, old).map(|_| ()),
        Err(ManagerError::BotNotFound(old))
    );
    assert!(manager.contains_bot(fresh));
}

#[test]
fn reset_shifts_every_bot_right() {
    let (mut manager, _world, ids) = level_with_bots(&[0.0, 150.0]);
    manager.reset_bots();

    let xs: Vec<f32> = ids
        .iter()
        .filter_map(|id| manager.bot(*id))
        .map(|bot| bot.sprite.position.x)
        .collect();
    assert_eq!(xs, vec![200.0, 350.0]);
}

#[test]
fn clear_releases_bots_and_types_but_keeps_pathfinder() {
    let (mut manager, mut world, _ids) = level_with_bots(&[1.0, 2.0]);
    manager.set_pathfinder(RecordingPathfinder::default());

    let report = manager.clear_sprites(&mut world);

    assert_eq!(
        report,
        UnloadReport {
            bots_released: 2,
            sprite_types_released: 1,
            pathfinder_released: false,
        }
    );
    assert_eq!(manager.bot_count(), 0);
    assert!(world.physics.is_empty());
    assert!(manager.has_pathfinder());
}

#[test]
fn unload_is_idempotent() {
    let (mut manager, mut world, _ids) = level_with_bots(&[1.0, 2.0, 3.0]);
    manager.set_pathfinder(RecordingPathfinder::default());

    let first = manager.unload_all(&mut world);
    assert_eq!(first.bots_released, 3);
    assert!(first.pathfinder_released);
    assert!(!manager.has_pathfinder());
    assert!(world.physics.is_empty());

    let second = manager.unload_all(&mut world);
    assert!(second.is_empty());
}

#[test]
fn unload_unregisters_each_bot_once() {
    let mut manager = EntityManager::default();
    let mut world = World::new(WorldBounds::new(100.0, 100.0), MockCollisions::new(), 3);
    let bot_type = manager.register_sprite_type(square_type("bot", 1, 8));
    world.physics.expect_add_collidable().times(2).return_const(());
    let a = manager
        .spawn_bot(&mut world, bot_type, 0.0, 0.0)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));
    let b = manager
        .spawn_bot(&mut world, bot_type, 8.0, 0.0)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));

    for id in [a, b] {
        world
            .physics
            .expect_remove_collidable()
            .with(eq(id))
            .times(1)
            .return_const(true);
    }

    assert_eq!(manager.unload_all(&mut world).bots_released, 2);
    assert!(manager.unload_all(&mut world).is_empty());
}

#[test]
fn untyped_bot_is_refused() {
    let mut manager = EntityManager::default();
    let mut world = test_utils::world(100.0, 100.0);
    let mut bot = test_utils::recording_bot(
        SpriteTypeId::new(0),
        0.0,
        0.0,
        1,
        &std::sync::Arc::default(),
    );
    bot.sprite.sprite_type = None;

    assert_eq!(
        manager.add_bot(&mut world, bot),
        Err(ManagerError::UntypedBot)
    );
    assert!(world.physics.is_empty());
}

#[rstest]
#[case::clear(false)]
#[case::unload(true)]
fn player_keeps_no_artwork_from_a_cleared_catalog(#[case] unload: bool) {
    let mut manager = EntityManager::default();
    let mut world = test_utils::world(1000.0, 1000.0);
    let camera = test_utils::camera(640.0, 480.0);
    let hero = manager.register_sprite_type(square_type("hero", 1, 32));
    let player = manager.player_mut();
    player.sprite_type = Some(hero);
    player.position = Vec3::new(100.0, 100.0, 0.0);

    if unload {
        manager.unload_all(&mut world);
    } else {
        manager.clear_sprites(&mut world);
    }
    let rock = manager.register_sprite_type(square_type("rock", 99, 32));
    let bot = manager
        .spawn_bot(&mut world, rock, 200.0, 100.0)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));

    assert!(manager.lookup_sprite_type(hero).is_none());
    let mut frame = RenderList::default();
    assert_eq!(manager.submit_render_list(&mut frame, &camera), 1);
    let drawn: Vec<(ImageId, i32)> = frame
        .items()
        .iter()
        .map(|item| (item.image, item.x))
        .collect();
    assert_eq!(drawn, vec![(ImageId(99), 200)]);
    assert!(manager.contains_bot(bot));
}
