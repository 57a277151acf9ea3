//! Reasons an edit is refused

use pok_map_core::MapId;
use thiserror::Error;

/// Why an editing operation produced no delta.
///
/// Every variant is raised before the grid is touched, so a host can drop
/// the error and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Unknown map {0}")]
    UnknownMap(MapId),
    #[error("Cell ({x}, {y}) is outside the map")]
    OutOfBounds { x: i64, y: i64 },
    #[error("Layer {depth} does not exist (map has {layers})")]
    LayerOutOfRange { depth: usize, layers: usize },
    #[error("Cannot remove the only layer")]
    LastLayer,
    #[error("Edit would not change anything")]
    NoChange,
    #[error("Cell ({x}, {y}) is collidable")]
    CollidableCell { x: u32, y: u32 },
    #[error("Cell ({x}, {y}) already hosts a portal")]
    EndpointOccupied { x: u32, y: u32 },
    #[error("Cannot link a cell to itself")]
    SelfLink,
    #[error("No object at ({x}, {y})")]
    NoObjectAt { x: u32, y: u32 },
    #[error("Cell ({x}, {y}) is already covered by an object")]
    ObjectOccupied { x: u32, y: u32 },
    #[error("No portal at ({x}, {y})")]
    NoLinkAt { x: u32, y: u32 },
    #[error("No NPC at ({x}, {y})")]
    NoNpcAt { x: u32, y: u32 },
    #[error("Cell ({x}, {y}) is already occupied by an NPC")]
    NpcOccupied { x: u32, y: u32 },
    #[error("Unknown object definition {0}")]
    UnknownObject(usize),
    #[error("Map cannot be resized to {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Errors that can occur when loading editor settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
