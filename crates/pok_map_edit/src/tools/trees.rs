//! Planting a dragged rectangle full of trees

use crate::tools::{check_layer, check_position};
use crate::EditError;
use pok_map_core::{ChangeSet, MapId, TextureId, TileCell, TileGrid};
use serde::{Deserialize, Serialize};

/// Footprint of one tree in cells
pub const TREE_WIDTH: u32 = 4;
pub const TREE_HEIGHT: u32 = 3;
/// Offset between neighboring trees in a planted area
pub const TREE_SPACING: u32 = 2;

/// Where a tree's tiles live in a tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSheet {
    pub texture: TextureId,
    /// Tile index of the tree's top-left cell
    pub first_tile: u32,
    /// Width of the tileset in tiles
    pub atlas_columns: u32,
}

impl TreeSheet {
    pub fn tile_at(&self, x: u32, y: u32) -> u32 {
        self.first_tile + y * self.atlas_columns + x
    }
}

/// Trees that fit along a drag of `span` cells
fn trees_along(span: u32, size: u32) -> u32 {
    if span < size {
        0
    } else {
        1 + (span - size) / TREE_SPACING
    }
}

/// Cells covered by `count` overlapping trees of `size`
fn covered(count: u32, size: u32) -> u32 {
    size + (count - 1) * TREE_SPACING
}

/// Tiles written by one tree-area drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeAreaDelta {
    pub map: MapId,
    pub depth: usize,
    changes: ChangeSet<usize, TileCell>,
}

impl TreeAreaDelta {
    pub fn changes(&self) -> &ChangeSet<usize, TileCell> {
        &self.changes
    }

    pub fn undo(&self, grid: &mut TileGrid) {
        for (&index, &cell) in self.changes.old() {
            grid.set_cell(self.depth, index, cell);
        }
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        for (&index, &cell) in self.changes.new_values() {
            grid.set_cell(self.depth, index, cell);
        }
    }
}

/// Fill the rectangle dragged from `from` to `to` with trees on layer `depth`.
///
/// Trees are laid out on a grid of [`TREE_SPACING`] starting at `from`, as
/// many as fit toward `to` in each direction. Neighbors overlap; rows are
/// drawn top to bottom so lower trees cover the ones behind them. A drag
/// too small for one tree is rejected with [`EditError::NoChange`].
pub fn plant_trees(
    grid: &mut TileGrid,
    depth: usize,
    from: (u32, u32),
    to: (u32, u32),
    sheet: &TreeSheet,
) -> Result<TreeAreaDelta, EditError> {
    check_position(grid, from.0, from.1)?;
    check_position(grid, to.0, to.1)?;
    check_layer(grid, depth)?;

    let columns = trees_along(from.0.abs_diff(to.0), TREE_WIDTH);
    let rows = trees_along(from.1.abs_diff(to.1), TREE_HEIGHT);
    if columns == 0 || rows == 0 {
        return Err(EditError::NoChange);
    }

    // Dragging up or left grows the area from the far corner
    let x0 = if to.0 < from.0 {
        from.0 - covered(columns, TREE_WIDTH)
    } else {
        from.0
    };
    let y0 = if to.1 < from.1 {
        from.1 - covered(rows, TREE_HEIGHT)
    } else {
        from.1
    };

    let mut changes = ChangeSet::new();
    for row in 0..rows {
        for column in 0..columns {
            let (left, top) = (x0 + column * TREE_SPACING, y0 + row * TREE_SPACING);
            for ty in 0..TREE_HEIGHT {
                for tx in 0..TREE_WIDTH {
                    let (x, y) = (left + tx, top + ty);
                    if !grid.contains(x as i64, y as i64) {
                        continue;
                    }
                    let index = grid.index(x, y);
                    let old = grid.cell(depth, index).unwrap_or(TileCell::EMPTY);
                    let new = TileCell::new(sheet.tile_at(tx, ty), sheet.texture);
                    grid.set_cell(depth, index, new);
                    changes.record(index, old, new);
                }
            }
        }
    }

    if changes.is_identity() {
        return Err(EditError::NoChange);
    }
    log::debug!(
        "planted {}x{} trees at ({}, {}) on layer {}",
        columns,
        rows,
        x0,
        y0,
        depth
    );
    Ok(TreeAreaDelta {
        map: grid.id,
        depth,
        changes,
    })
}
