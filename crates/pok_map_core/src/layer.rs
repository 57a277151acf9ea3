//! One depth slice of a tile grid

use crate::{CellState, TextureId, TileCell};
use serde::{Deserialize, Serialize};

/// A layer: three parallel arrays indexed by the cell's linear index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    tiles: Vec<Option<u32>>,
    collision: Vec<bool>,
    textures: Vec<TextureId>,
}

impl Layer {
    /// Create an empty layer with `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            tiles: vec![None; size],
            collision: vec![false; size],
            textures: vec![TextureId::default(); size],
        }
    }

    /// Build a layer from its parts. Panics if the lengths differ.
    pub fn from_parts(
        tiles: Vec<Option<u32>>,
        collision: Vec<bool>,
        textures: Vec<TextureId>,
    ) -> Self {
        let layer = Self {
            tiles,
            collision,
            textures,
        };
        layer.assert_consistent();
        layer
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Option<u32>] {
        &self.tiles
    }

    pub fn collision(&self) -> &[bool] {
        &self.collision
    }

    pub fn textures(&self) -> &[TextureId] {
        &self.textures
    }

    pub fn cell(&self, index: usize) -> Option<TileCell> {
        Some(TileCell {
            tile: *self.tiles.get(index)?,
            texture: self.textures[index],
        })
    }

    pub fn set_cell(&mut self, index: usize, cell: TileCell) {
        self.tiles[index] = cell.tile;
        self.textures[index] = cell.texture;
    }

    pub fn collides(&self, index: usize) -> bool {
        self.collision.get(index).copied().unwrap_or(false)
    }

    pub fn set_collision(&mut self, index: usize, collision: bool) {
        self.collision[index] = collision;
    }

    pub fn state(&self, index: usize) -> Option<CellState> {
        Some(CellState {
            tile: *self.tiles.get(index)?,
            texture: self.textures[index],
            collision: self.collision[index],
        })
    }

    pub fn set_state(&mut self, index: usize, state: CellState) {
        self.tiles[index] = state.tile;
        self.textures[index] = state.texture;
        self.collision[index] = state.collision;
    }

    /// Panics if the parallel arrays have drifted apart. A mismatch here
    /// always means an earlier mutation was wrong.
    pub fn assert_consistent(&self) {
        assert_eq!(
            self.tiles.len(),
            self.collision.len(),
            "layer tile/collision arrays differ in length"
        );
        assert_eq!(
            self.tiles.len(),
            self.textures.len(),
            "layer tile/texture arrays differ in length"
        );
    }
}
