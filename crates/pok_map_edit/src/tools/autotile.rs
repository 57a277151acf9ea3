//! Autotile brush

use crate::tools::check_cell;
use crate::EditError;
use pok_map_autotile::{paint_with_ripple, AutoTilePattern, AutotileDelta};
use pok_map_core::{MapId, TextureId, TileGrid};
use serde::{Deserialize, Serialize};

/// An [`AutotileDelta`] tied to the map it was painted on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutotileEdit {
    pub map: MapId,
    pub delta: AutotileDelta,
}

impl AutotileEdit {
    pub fn join(&mut self, other: AutotileEdit) {
        debug_assert_eq!(self.map, other.map, "joining autotile edits from different maps");
        self.delta.join(other.delta);
    }
}

/// Paint `index` with `pattern`, updating the neighbors that depend on it
pub fn autotile(
    grid: &mut TileGrid,
    depth: usize,
    index: usize,
    texture: TextureId,
    pattern: &AutoTilePattern,
) -> Result<AutotileEdit, EditError> {
    check_cell(grid, depth, index)?;
    let delta = paint_with_ripple(grid, index, depth, texture, pattern);
    // Painting over a settled cell writes the center tile and then decides
    // the same tile as before
    if delta.changes().is_identity() {
        return Err(EditError::NoChange);
    }
    Ok(AutotileEdit { map: grid.id, delta })
}
