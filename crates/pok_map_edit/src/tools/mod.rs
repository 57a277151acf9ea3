//! Edit operations
//!
//! Every operation mutates a grid and returns the record needed to undo and
//! redo it. A rejected operation returns an error and leaves the grid as it
//! was.

mod autotile;
mod fill;
mod layer;
mod link;
mod npc;
mod paint;
mod resize;
mod stamp;
mod trees;

pub use autotile::{autotile, AutotileEdit};
pub use fill::fill;
pub use layer::{insert_layer, remove_layer, LayerDelta};
pub use link::{connect, disconnect, LinkDelta, LinkEndpoint, UnlinkDelta};
pub use npc::{place_npc, remove_npc, NpcDelta};
pub use paint::{erase, paint, TileStroke};
pub use resize::{resize, DetachedPortals, ResizeDelta};
pub use stamp::{stamp, unstamp, StampDelta};
pub use trees::{plant_trees, TreeAreaDelta, TreeSheet, TREE_HEIGHT, TREE_SPACING, TREE_WIDTH};

use crate::EditError;
use pok_map_core::TileGrid;

/// Reject a cell index or layer the grid does not have
pub(crate) fn check_cell(grid: &TileGrid, depth: usize, index: usize) -> Result<(), EditError> {
    if index >= grid.cell_count() {
        let (x, y) = grid.coords(index);
        return Err(EditError::OutOfBounds {
            x: x as i64,
            y: y as i64,
        });
    }
    check_layer(grid, depth)
}

pub(crate) fn check_layer(grid: &TileGrid, depth: usize) -> Result<(), EditError> {
    if depth >= grid.layer_count() {
        return Err(EditError::LayerOutOfRange {
            depth,
            layers: grid.layer_count(),
        });
    }
    Ok(())
}

pub(crate) fn check_position(grid: &TileGrid, x: u32, y: u32) -> Result<(), EditError> {
    if !grid.contains(x as i64, y as i64) {
        return Err(EditError::OutOfBounds {
            x: x as i64,
            y: y as i64,
        });
    }
    Ok(())
}
