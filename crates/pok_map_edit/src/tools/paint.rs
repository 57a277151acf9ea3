//! Pencil and eraser

use crate::tools::check_cell;
use crate::EditError;
use pok_map_core::{MapId, TextureId, TileCell, TileGrid};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cells set to one value on one layer, with what each held before.
///
/// Pencil, eraser and bucket edits all produce a stroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStroke {
    pub map: MapId,
    pub depth: usize,
    /// Touched cells and the value each held before its first write
    pub cells: BTreeMap<usize, TileCell>,
    /// Value every touched cell was set to
    pub new: TileCell,
}

impl TileStroke {
    pub fn new(map: MapId, depth: usize, new: TileCell) -> Self {
        Self {
            map,
            depth,
            cells: BTreeMap::new(),
            new,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Write the stroke value at `index`, remembering the old value
    pub fn apply(&mut self, grid: &mut TileGrid, index: usize) -> Result<(), EditError> {
        check_cell(grid, self.depth, index)?;
        let old = grid.cell(self.depth, index).unwrap_or(TileCell::EMPTY);
        if old == self.new {
            return Err(EditError::NoChange);
        }
        grid.set_cell(self.depth, index, self.new);
        self.cells.entry(index).or_insert(old);
        Ok(())
    }

    /// Append a later stroke of the same gesture. A cell this stroke already
    /// touched keeps its first recorded value.
    pub fn merge(&mut self, other: TileStroke) {
        debug_assert_eq!(self.depth, other.depth, "merging strokes from different layers");
        for (index, old) in other.cells {
            self.cells.entry(index).or_insert(old);
        }
    }

    pub fn undo(&self, grid: &mut TileGrid) {
        for (&index, &old) in &self.cells {
            grid.set_cell(self.depth, index, old);
        }
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        for &index in self.cells.keys() {
            grid.set_cell(self.depth, index, self.new);
        }
    }
}

/// Set one cell to `cell`
pub fn paint(
    grid: &mut TileGrid,
    depth: usize,
    index: usize,
    cell: TileCell,
) -> Result<TileStroke, EditError> {
    let mut stroke = TileStroke::new(grid.id, depth, cell);
    stroke.apply(grid, index)?;
    Ok(stroke)
}

/// Clear one cell to the empty tile on `base_texture`
pub fn erase(
    grid: &mut TileGrid,
    depth: usize,
    index: usize,
    base_texture: TextureId,
) -> Result<TileStroke, EditError> {
    paint(grid, depth, index, TileCell::cleared(base_texture))
}
