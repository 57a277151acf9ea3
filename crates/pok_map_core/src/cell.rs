//! Per-cell values stored in a layer

use serde::{Deserialize, Serialize};

/// Index into a grid's texture table
pub type TextureId = u32;

/// Texture reference written into empty cells
pub const BASE_TEXTURE: TextureId = 0;

/// The visible part of a cell: tile graphic and the texture it comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCell {
    /// None means empty/transparent
    pub tile: Option<u32>,
    pub texture: TextureId,
}

impl TileCell {
    pub const EMPTY: Self = Self {
        tile: None,
        texture: BASE_TEXTURE,
    };

    pub const fn new(tile: u32, texture: TextureId) -> Self {
        Self {
            tile: Some(tile),
            texture,
        }
    }

    /// An empty cell that still carries a texture reference
    pub const fn cleared(texture: TextureId) -> Self {
        Self {
            tile: None,
            texture,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }
}

/// Everything a layer stores for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellState {
    pub tile: Option<u32>,
    pub texture: TextureId,
    pub collision: bool,
}

impl CellState {
    pub fn tile_cell(&self) -> TileCell {
        TileCell {
            tile: self.tile,
            texture: self.texture,
        }
    }

    /// True for the value freshly allocated cells carry
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
