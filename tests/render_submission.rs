//! Integration tests for render-list submission.

use glam::{Vec2, Vec3};
use rstest::rstest;
use sidescroll::{EntityManager, ImageId, RenderList, SpriteTypeId, WorldBounds};
use test_utils::square_type;

const WORLD: WorldBounds = WorldBounds::new(4000.0, 4000.0);

fn level() -> (EntityManager, SpriteTypeId) {
    let mut manager = EntityManager::default();
    let id = manager.register_sprite_type(square_type("bot", 42, 32));
    (manager, id)
}

#[rstest]
#[case::origin(Vec2::ZERO, Vec2::new(100.0, 100.0), (100, 100))]
#[case::scrolled(Vec2::new(250.0, 120.0), Vec2::new(300.0, 200.0), (50, 80))]
#[case::partly_off_left(Vec2::new(500.0, 0.0), Vec2::new(480.0, 10.0), (-20, 10))]
#[case::fractional(Vec2::new(10.0, 10.0), Vec2::new(20.6, 30.2), (11, 20))]
fn visible_bot_is_queued_once_at_screen_position(
    #[case] camera_at: Vec2,
    #[case] bot_at: Vec2,
    #[case] screen: (i32, i32),
) {
    let (mut manager, id) = level();
    let mut world = test_utils::world(WORLD.width, WORLD.height);
    let mut camera = test_utils::camera(640.0, 480.0);
    camera.set_position(camera_at, WORLD);
    manager
        .spawn_bot(&mut world, id, bot_at.x, bot_at.y)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));

    let mut frame = RenderList::default();
    assert_eq!(manager.submit_render_list(&mut frame, &camera), 1);

    let [item] = frame.items() else {
        panic!("expected exactly one item, got {:?}", frame.items());
    };
    assert_eq!((item.x, item.y), screen);
    assert_eq!(item.image, ImageId(42));
    assert_eq!((item.width, item.height), (32, 32));
}

#[rstest]
#[case::right_of_view(Vec2::new(640.0, 0.0))]
#[case::below_view(Vec2::new(0.0, 480.0))]
#[case::far_away(Vec2::new(3000.0, 3000.0))]
#[case::just_left_of_view(Vec2::new(-32.0, 0.0))]
fn off_screen_bot_is_not_queued(#[case] bot_at: Vec2) {
    let (mut manager, id) = level();
    let mut world = test_utils::world(WORLD.width, WORLD.height);
    let camera = test_utils::camera(640.0, 480.0);
    manager
        .spawn_bot(&mut world, id, bot_at.x, bot_at.y)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));

    let mut frame = RenderList::default();
    assert_eq!(manager.submit_render_list(&mut frame, &camera), 0);
    assert!(frame.is_empty());
}

#[test]
fn player_is_queued_before_bots_in_insertion_order() {
    let mut manager = EntityManager::default();
    let mut world = test_utils::world(WORLD.width, WORLD.height);
    let camera = test_utils::camera(640.0, 480.0);
    let player_type = manager.register_sprite_type(square_type("player", 1, 32));
    let bot_type = manager.register_sprite_type(square_type("bot", 2, 16));

    let player = manager.player_mut();
    player.sprite_type = Some(player_type);
    player.position = Vec3::new(300.0, 300.0, 5.0);

    for x in [200.0, 100.0, 150.0] {
        manager
            .spawn_bot(&mut world, bot_type, x, 50.0)
            .unwrap_or_else(|e| panic!("spawn failed: {e}"));
    }

    let mut frame = RenderList::default();
    assert_eq!(manager.submit_render_list(&mut frame, &camera), 4);
    let drawn: Vec<(ImageId, i32, i32)> = frame
        .items()
        .iter()
        .map(|item| (item.image, item.x, item.z))
        .collect();
    assert_eq!(
        drawn,
        vec![
            (ImageId(1), 300, 5),
            (ImageId(2), 200, 0),
            (ImageId(2), 100, 0),
            (ImageId(2), 150, 0),
        ]
    );
}

#[test]
fn submission_leaves_sprites_untouched() {
    let (mut manager, id) = level();
    let mut world = test_utils::world(WORLD.width, WORLD.height);
    let camera = test_utils::camera(640.0, 480.0);
    let bot = manager
        .spawn_bot(&mut world, id, 10.0, 10.0)
        .unwrap_or_else(|e| panic!("spawn failed: {e}"));
    let before = manager
        .bot(bot)
        .map(|b| b.sprite.clone())
        .unwrap_or_else(|| panic!("bot missing"));

    let mut frame = RenderList::default();
    manager.submit_render_list(&mut frame, &camera);

    let after = manager
        .bot(bot)
        .map(|b| b.sprite.clone())
        .unwrap_or_else(|| panic!("bot missing"));
    assert_eq!(before, after);
}
