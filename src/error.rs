//! Error types surfaced by the entity manager and settings loader.

use std::path::PathBuf;

use thiserror::Error;

use crate::arena::BotId;
use crate::sprite_type::SpriteTypeId;

/// Failures reported by [`crate::EntityManager`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ManagerError {
    /// The sprite type index is not registered in the catalog.
    #[error("sprite type {0} is not registered")]
    SpriteTypeNotFound(SpriteTypeId),
    /// The bot has no sprite type assigned.
    #[error("bot has no sprite type")]
    UntypedBot,
    /// The bot handle is unknown or refers to a bot that was already removed.
    #[error("bot {0} is not managed")]
    BotNotFound(BotId),
}

/// Failures raised while loading [`crate::settings::ManagerSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}")]
    Io {
        /// Location that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings document was not valid JSON for the expected shape.
    #[error("invalid settings document")]
    Parse(#[from] serde_json::Error),
    /// A numeric setting parsed to infinity or NaN.
    #[error("setting `{field}` must be a finite number")]
    NonFinite {
        /// Dotted path of the offending setting.
        field: &'static str,
    },
}
