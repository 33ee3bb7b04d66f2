//! Camera-follow decisions.
//!
//! While the player sits near the centre of the view the camera travels with
//! the player's velocity. Once the player drifts away, the camera catches up
//! in fixed steps instead, unless it is already pressed against the edge of
//! the world the player is heading towards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CAMERA_SNAP_DISTANCE, CAMERA_STEP};
use crate::viewport::WorldBounds;

/// Tuning for the catch-up phase of camera follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSettings {
    /// Distance from the view centre, per axis, beyond which the camera
    /// steps towards the player.
    pub snap_distance: f32,
    /// Per-axis displacement applied by one catch-up step.
    pub step: f32,
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            snap_distance: CAMERA_SNAP_DISTANCE,
            step: CAMERA_STEP,
        }
    }
}

/// Snapshot of everything a follow decision depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowInput {
    /// Centre of the player's bounding volume.
    pub player_center: Vec2,
    /// Player velocity.
    pub player_velocity: Vec2,
    /// Whether the player is in its resting state.
    pub player_idle: bool,
    /// Whether the viewport considers the player centred.
    pub player_centered: bool,
    /// Top-left corner of the view.
    pub view_position: Vec2,
    /// Size of the view.
    pub view_size: Vec2,
    /// Point the view treats as its centre.
    pub view_center: Vec2,
    /// World extents.
    pub world: WorldBounds,
}

/// Camera displacement for this frame, or `None` to leave the camera alone.
///
/// The returned delta is unclamped; the viewport enforces world bounds.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use sidescroll::follow::{plan_camera_move, FollowInput, FollowSettings};
/// use sidescroll::viewport::WorldBounds;
///
/// let input = FollowInput {
///     player_center: Vec2::new(300.0, 100.0),
///     player_velocity: Vec2::ZERO,
///     player_idle: true,
///     player_centered: false,
///     view_position: Vec2::ZERO,
///     view_size: Vec2::new(200.0, 200.0),
///     view_center: Vec2::new(100.0, 100.0),
///     world: WorldBounds::new(1000.0, 1000.0),
/// };
/// assert_eq!(
///     plan_camera_move(&input, &FollowSettings::default()),
///     Some(Vec2::new(10.0, 0.0))
/// );
/// ```
#[must_use]
pub fn plan_camera_move(input: &FollowInput, settings: &FollowSettings) -> Option<Vec2> {
    if input.player_centered {
        return (!input.player_idle).then_some(input.player_velocity);
    }

    let center = input.view_center;
    let far_edge = input.view_position + input.view_size;
    let delta = Vec2::new(
        catch_up_axis(
            AxisState {
                player: input.player_center.x,
                velocity: input.player_velocity.x,
                view_center: center.x,
                at_near_edge: input.view_position.x <= 0.0,
                at_far_edge: far_edge.x >= input.world.width,
            },
            settings,
        ),
        catch_up_axis(
            AxisState {
                player: input.player_center.y,
                velocity: input.player_velocity.y,
                view_center: center.y,
                at_near_edge: input.view_position.y <= 0.0,
                at_far_edge: far_edge.y >= input.world.height,
            },
            settings,
        ),
    );

    (delta != Vec2::ZERO).then_some(delta)
}

#[derive(Debug, Clone, Copy)]
struct AxisState {
    player: f32,
    velocity: f32,
    view_center: f32,
    at_near_edge: bool,
    at_far_edge: bool,
}

fn catch_up_axis(axis: AxisState, settings: &FollowSettings) -> f32 {
    let pushing_near_edge = axis.velocity < 0.0 && axis.at_near_edge;
    let pushing_far_edge = axis.velocity > 0.0 && axis.at_far_edge;
    if pushing_near_edge || pushing_far_edge {
        return 0.0;
    }

    let offset = axis.player - axis.view_center;
    if offset > settings.snap_distance {
        settings.step
    } else if offset < -settings.snap_distance {
        -settings.step
    } else {
        0.0
    }
}
