//! Map resizing

use crate::{EditError, Project};
use pok_map_core::{Anchor, Entry, Exit, MapId, RemovedRecords, ResizeOutcome};
use serde::{Deserialize, Serialize};

/// Portal records taken out of one map because the other half of their
/// pair was cropped away
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetachedPortals {
    pub map: MapId,
    pub exits: RemovedRecords<Exit>,
    pub entries: RemovedRecords<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeDelta {
    pub map: MapId,
    pub dw: i32,
    pub dh: i32,
    pub anchor: Anchor,
    /// Cells and records the resize removed
    pub outcome: ResizeOutcome,
    /// Partners of the cropped portals, one group per map that lost any
    pub detached: Vec<DetachedPortals>,
}

impl ResizeDelta {
    pub fn undo(&self, project: &mut Project) {
        // Partners go back first, while the resized map still has its new
        // coordinates
        for group in self.detached.iter().rev() {
            if let Some(grid) = project.get_map_mut(group.map) {
                group.exits.restore_into(&mut grid.exits);
                group.entries.restore_into(&mut grid.entries);
            }
        }

        let Some(grid) = project.get_map_mut(self.map) else {
            log::warn!("Skipping resize undo for missing map {}", self.map);
            return;
        };
        let reverse = grid.resize(-self.dw, -self.dh, self.anchor);
        debug_assert!(reverse.is_lossless(), "undoing a resize cropped content");

        for &(depth, index, state) in &self.outcome.cropped {
            grid.set_cell_state(depth, index, state);
        }
        self.outcome.exits.restore_into(&mut grid.exits);
        self.outcome.entries.restore_into(&mut grid.entries);
        self.outcome.placed_objects.restore_into(&mut grid.placed_objects);
        self.outcome.npcs.restore_into(&mut grid.npcs);
    }

    pub fn redo(&self, project: &mut Project) {
        let Some(grid) = project.get_map_mut(self.map) else {
            log::warn!("Skipping resize redo for missing map {}", self.map);
            return;
        };
        let outcome = grid.resize(self.dw, self.dh, self.anchor);
        debug_assert_eq!(outcome, self.outcome);

        let detached = detach_partners(project, self.map, &outcome);
        debug_assert_eq!(detached, self.detached);
    }
}

/// Remove every record still paired with a portal `outcome` cropped out of
/// `map`: the Entry an Exit led to and the Exit that led to an Entry
fn detach_partners(
    project: &mut Project,
    map: MapId,
    outcome: &ResizeOutcome,
) -> Vec<DetachedPortals> {
    if outcome.exits.is_empty() && outcome.entries.is_empty() {
        return Vec::new();
    }

    let mut detached = Vec::new();
    for grid in project.maps.iter_mut() {
        let here = grid.id;
        let exits = RemovedRecords::extract_where(&mut grid.exits, |exit| {
            exit.target == map && outcome.entries.iter().any(|(_, entry)| entry.id == exit.id)
        });
        let entries = RemovedRecords::extract_where(&mut grid.entries, |entry| {
            outcome
                .exits
                .iter()
                .any(|(_, exit)| exit.target == here && exit.id == entry.id)
        });
        if !exits.is_empty() || !entries.is_empty() {
            log::debug!(
                "resize of {} unlinked {} exits and {} entries in {}",
                map,
                exits.len(),
                entries.len(),
                grid.name
            );
            detached.push(DetachedPortals {
                map: here,
                exits,
                entries,
            });
        }
    }
    detached
}

/// Grow or shrink `map` by `(dw, dh)` cells, keeping `anchor` fixed.
///
/// A portal cropped off the map takes the other half of its pair with it,
/// wherever that half lives.
pub fn resize(
    project: &mut Project,
    map: MapId,
    dw: i32,
    dh: i32,
    anchor: Anchor,
) -> Result<ResizeDelta, EditError> {
    let grid = project.map_mut(map)?;
    if dw == 0 && dh == 0 {
        return Err(EditError::NoChange);
    }
    let width = grid.width() as i64 + dw as i64;
    let height = grid.height() as i64 + dh as i64;
    if width < 1 || height < 1 {
        return Err(EditError::InvalidSize { width, height });
    }

    let outcome = grid.resize(dw, dh, anchor);
    if !outcome.is_lossless() {
        log::debug!(
            "resize of {} cropped {} cells and {} portal records",
            grid.name,
            outcome.cropped.len(),
            outcome.exits.len() + outcome.entries.len()
        );
    }
    let detached = detach_partners(project, map, &outcome);

    Ok(ResizeDelta {
        map,
        dw,
        dh,
        anchor,
        outcome,
        detached,
    })
}
