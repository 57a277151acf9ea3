//! Non-player characters placed on a map

use serde::{Deserialize, Serialize};

/// How a placed NPC moves at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NpcMovement {
    #[default]
    Stay,
    Loop,
    Rewind,
    Zone,
}

/// An NPC placed on a map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcInfo {
    /// Sprite sheet name
    pub texture: String,
    /// Dialog file the NPC speaks from
    pub dialog: String,
    pub x: u32,
    pub y: u32,
    pub z: usize,
    #[serde(default)]
    pub movement: NpcMovement,
}

impl NpcInfo {
    pub fn new(texture: impl Into<String>, dialog: impl Into<String>, x: u32, y: u32, z: usize) -> Self {
        Self {
            texture: texture.into(),
            dialog: dialog.into(),
            x,
            y,
            z,
            movement: NpcMovement::default(),
        }
    }
}
