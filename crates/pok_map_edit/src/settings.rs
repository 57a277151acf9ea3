//! Editor settings

use crate::ConfigError;
use pok_map_core::{TextureId, BASE_TEXTURE};
use serde::{Deserialize, Serialize};

/// Settings that shape how edits are recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorSettings {
    /// Maximum number of undo steps kept. `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Texture reference written by the eraser and when removing objects
    pub base_texture: TextureId,
    /// Stamping onto an existing object replaces it
    pub stamp_replaces: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: None,
            base_texture: BASE_TEXTURE,
            stamp_replaces: true,
        }
    }
}

impl EditorSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings = EditorSettings::from_toml_str("history_limit = 50").unwrap();

        assert_eq!(settings.history_limit, Some(50));
        assert_eq!(settings.base_texture, BASE_TEXTURE);
        assert!(settings.stamp_replaces);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = EditorSettings::from_toml_str("undo_depth = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_round_trip() {
        let settings = EditorSettings {
            history_limit: Some(8),
            base_texture: 2,
            stamp_replaces: false,
        };
        let text = settings.to_toml_string().unwrap();

        assert_eq!(EditorSettings::from_toml_str(&text).unwrap(), settings);
    }
}
