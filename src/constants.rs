//! Defaults for camera-follow, bot behaviour and sprite presentation.
//!
//! These seed [`crate::settings::ManagerSettings::default`]; a settings file
//! may override any of them at start-up.

/// Distance in world units between the player's bounding-volume centre and
/// the viewport centre beyond which the camera starts catching up.
pub const CAMERA_SNAP_DISTANCE: f32 = 64.0;
/// Per-frame camera displacement, per axis, while catching up.
pub const CAMERA_STEP: f32 = 10.0;
/// How far the player may drift from the viewport centre and still count as
/// centred.
pub const CAMERA_CENTERING_TOLERANCE: f32 = 16.0;
/// Logical sprite state meaning "not moving under player control".
pub const IDLE_STATE: &str = "IDLE";
/// Alpha value for a fully opaque sprite.
pub const OPAQUE_ALPHA: u8 = 255;
/// Fewest frames a random-jumping bot waits before its next decision.
pub const BOT_MIN_THINK_CYCLES: u32 = 30;
/// Most frames a random-jumping bot waits before its next decision.
pub const BOT_MAX_THINK_CYCLES: u32 = 120;
/// Largest velocity component a random-jumping bot will pick.
pub const BOT_MAX_VELOCITY: f32 = 1.0;
/// Horizontal shift applied to every bot by a level reset.
pub const BOT_RESET_OFFSET: f32 = 200.0;
