//! Runtime configuration for the entity manager.
//!
//! Every field has a default, so a settings document only needs to name the
//! values it changes:
//!
//! ```json
//! { "follow": { "step": 12.0 }, "bot": { "max_velocity": 2.5 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bot::BotSettings;
use crate::constants::BOT_RESET_OFFSET;
use crate::error::SettingsError;
use crate::follow::FollowSettings;
use crate::viewport::CameraSettings;

/// All tunables of an [`crate::EntityManager`] and its demo camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerSettings {
    /// Camera catch-up tuning.
    pub follow: FollowSettings,
    /// Defaults for bots created by `spawn_bot`.
    pub bot: BotSettings,
    /// Camera centring tolerance.
    pub camera: CameraSettings,
    /// Horizontal shift applied by a bot reset.
    pub reset_offset: f32,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            follow: FollowSettings::default(),
            bot: BotSettings::default(),
            camera: CameraSettings::default(),
            reset_offset: BOT_RESET_OFFSET,
        }
    }
}

impl ManagerSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is malformed and
    /// [`SettingsError::NonFinite`] when a number does not fit an `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidescroll::settings::ManagerSettings;
    /// let settings = ManagerSettings::from_json_str(r#"{"reset_offset": 50.0}"#).unwrap();
    /// assert!((settings.reset_offset - 50.0).abs() < f32::EPSILON);
    /// assert_eq!(settings.follow, Default::default());
    /// ```
    pub fn from_json_str(document: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(document)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every numeric setting is finite.
    ///
    /// Out-of-range JSON numbers such as `1e39` parse to infinity in an
    /// `f32` field.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NonFinite`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("follow.snap_distance", self.follow.snap_distance),
            ("follow.step", self.follow.step),
            ("bot.max_velocity", self.bot.max_velocity),
            ("camera.centering_tolerance", self.camera.centering_tolerance),
            ("reset_offset", self.reset_offset),
        ];
        fields
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |(field, _)| Err(SettingsError::NonFinite { field }))
    }

    /// Reads and parses a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be read, otherwise
    /// the errors of [`ManagerSettings::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let location = path.as_ref();
        let document = fs::read_to_string(location).map_err(|source| SettingsError::Io {
            path: location.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }
}
