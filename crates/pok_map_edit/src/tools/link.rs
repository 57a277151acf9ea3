//! Portal links between maps

use crate::tools::{check_layer, check_position};
use crate::{EditError, Project};
use pok_map_core::{Entry, Exit, MapId, TileGrid};
use serde::{Deserialize, Serialize};

/// One side of a link: a cell on some layer of some map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEndpoint {
    pub map: MapId,
    pub x: u32,
    pub y: u32,
    pub z: usize,
}

/// A linked pair of cells.
///
/// Each endpoint gets an `Entry` with its own id and an `Exit` carrying the
/// other endpoint's id, so walking onto either cell leads to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDelta {
    pub a: LinkEndpoint,
    pub b: LinkEndpoint,
    /// Entry id allocated in `a.map`
    pub id_a: u32,
    /// Entry id allocated in `b.map`
    pub id_b: u32,
}

impl LinkDelta {
    fn entry_a(&self) -> Entry {
        Entry {
            id: self.id_a,
            x: self.a.x,
            y: self.a.y,
            z: self.a.z,
        }
    }

    fn entry_b(&self) -> Entry {
        Entry {
            id: self.id_b,
            x: self.b.x,
            y: self.b.y,
            z: self.b.z,
        }
    }

    fn exit_a(&self) -> Exit {
        Exit {
            target: self.b.map,
            id: self.id_b,
            x: self.a.x,
            y: self.a.y,
            z: self.a.z,
        }
    }

    fn exit_b(&self) -> Exit {
        Exit {
            target: self.a.map,
            id: self.id_a,
            x: self.b.x,
            y: self.b.y,
            z: self.b.z,
        }
    }

    pub fn undo(&self, project: &mut Project) {
        if let Some(grid) = project.get_map_mut(self.b.map) {
            remove_last(&mut grid.exits, &self.exit_b());
        }
        if let Some(grid) = project.get_map_mut(self.a.map) {
            remove_last(&mut grid.exits, &self.exit_a());
        }
        if let Some(grid) = project.get_map_mut(self.b.map) {
            remove_last(&mut grid.entries, &self.entry_b());
        }
        if let Some(grid) = project.get_map_mut(self.a.map) {
            remove_last(&mut grid.entries, &self.entry_a());
        }
    }

    pub fn redo(&self, project: &mut Project) {
        if let Some(grid) = project.get_map_mut(self.a.map) {
            grid.entries.push(self.entry_a());
        }
        if let Some(grid) = project.get_map_mut(self.b.map) {
            grid.entries.push(self.entry_b());
        }
        if let Some(grid) = project.get_map_mut(self.a.map) {
            grid.exits.push(self.exit_a());
        }
        if let Some(grid) = project.get_map_mut(self.b.map) {
            grid.exits.push(self.exit_b());
        }
    }
}

fn remove_last<T: PartialEq>(list: &mut Vec<T>, record: &T) {
    if let Some(pos) = list.iter().rposition(|r| r == record) {
        list.remove(pos);
    }
}

fn check_endpoint(project: &Project, end: &LinkEndpoint) -> Result<(), EditError> {
    let grid = project.map(end.map)?;
    check_position(grid, end.x, end.y)?;
    check_layer(grid, end.z)?;
    if grid.collides(end.z, grid.index(end.x, end.y)) {
        return Err(EditError::CollidableCell { x: end.x, y: end.y });
    }
    if grid.has_portal_at(end.x, end.y, end.z) {
        return Err(EditError::EndpointOccupied { x: end.x, y: end.y });
    }
    Ok(())
}

/// Link two cells, possibly on different maps.
///
/// Rejected when the endpoints are the same cell, either cell collides, or
/// either cell already holds a portal. Each map hands out its lowest free
/// entry id.
pub fn connect(
    project: &mut Project,
    a: LinkEndpoint,
    b: LinkEndpoint,
) -> Result<LinkDelta, EditError> {
    if a == b {
        return Err(EditError::SelfLink);
    }
    check_endpoint(project, &a)?;
    check_endpoint(project, &b)?;

    let id_a = project.map(a.map)?.next_entry_id();
    let grid_b = project.map(b.map)?;
    let id_b = if a.map == b.map {
        (0..)
            .find(|id| *id != id_a && grid_b.entry_with_id(*id).is_none())
            .unwrap_or_default()
    } else {
        grid_b.next_entry_id()
    };

    let delta = LinkDelta { a, b, id_a, id_b };
    delta.redo(project);
    log::debug!("linked {:?} (id {}) with {:?} (id {})", a, id_a, b, id_b);
    Ok(delta)
}

/// Portal records removed from one cell, with their list positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlinkDelta {
    pub map: MapId,
    pub exit: Option<(usize, Exit)>,
    pub entry: Option<(usize, Entry)>,
}

impl UnlinkDelta {
    pub fn undo(&self, grid: &mut TileGrid) {
        if let Some((index, entry)) = self.entry {
            let at = index.min(grid.entries.len());
            grid.entries.insert(at, entry);
        }
        if let Some((index, exit)) = self.exit {
            let at = index.min(grid.exits.len());
            grid.exits.insert(at, exit);
        }
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        if let Some((_, exit)) = self.exit {
            if let Some(pos) = grid.exit_at(exit.x, exit.y, exit.z) {
                grid.exits.remove(pos);
            }
        }
        if let Some((_, entry)) = self.entry {
            if let Some(pos) = grid.entry_at(entry.x, entry.y, entry.z) {
                grid.entries.remove(pos);
            }
        }
    }
}

/// Remove the exit and the entry at `(x, y, z)`.
///
/// Only this map is touched; the records on the other side of the link stay.
pub fn disconnect(grid: &mut TileGrid, x: u32, y: u32, z: usize) -> Result<UnlinkDelta, EditError> {
    check_position(grid, x, y)?;
    let exit = grid.exit_at(x, y, z).map(|i| (i, grid.exits[i]));
    let entry = grid.entry_at(x, y, z).map(|i| (i, grid.entries[i]));
    if exit.is_none() && entry.is_none() {
        return Err(EditError::NoLinkAt { x, y });
    }

    let delta = UnlinkDelta {
        map: grid.id,
        exit,
        entry,
    };
    delta.redo(grid);
    Ok(delta)
}
