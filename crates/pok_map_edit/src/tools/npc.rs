//! Placing and removing NPCs

use crate::commands::Inverse;
use crate::tools::{check_layer, check_position};
use crate::EditError;
use pok_map_core::{MapId, NpcInfo, TileGrid};
use serde::{Deserialize, Serialize};

/// An NPC added to a map's NPC list at `index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDelta {
    pub map: MapId,
    pub index: usize,
    pub npc: NpcInfo,
}

impl NpcDelta {
    pub fn undo(&self, grid: &mut TileGrid) {
        if self.index < grid.npcs.len() {
            grid.npcs.remove(self.index);
        }
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        let at = self.index.min(grid.npcs.len());
        grid.npcs.insert(at, self.npc.clone());
    }
}

pub fn place_npc(grid: &mut TileGrid, npc: NpcInfo) -> Result<NpcDelta, EditError> {
    check_position(grid, npc.x, npc.y)?;
    check_layer(grid, npc.z)?;
    if grid.npc_at(npc.x, npc.y).is_some() {
        return Err(EditError::NpcOccupied { x: npc.x, y: npc.y });
    }

    grid.npcs.push(npc.clone());
    Ok(NpcDelta {
        map: grid.id,
        index: grid.npcs.len() - 1,
        npc,
    })
}

/// Remove the NPC standing at `(x, y)`; undoing puts it back at its list position
pub fn remove_npc(grid: &mut TileGrid, x: u32, y: u32) -> Result<Inverse<NpcDelta>, EditError> {
    let index = grid.npc_at(x, y).ok_or(EditError::NoNpcAt { x, y })?;
    let npc = grid.npcs.remove(index);
    Ok(Inverse(NpcDelta {
        map: grid.id,
        index,
        npc,
    }))
}
