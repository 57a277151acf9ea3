//! Placing and removing multi-cell objects

use crate::commands::Inverse;
use crate::tools::{check_layer, check_position};
use crate::{EditError, EditorSettings};
use pok_map_core::{
    CellState, ChangeSet, MapId, ObjectDef, PlacedObject, TextureId, TileGrid,
};
use serde::{Deserialize, Serialize};

/// Everything one object placement changed.
///
/// Cell changes are keyed by `(depth, index)`. When the placement replaced an
/// object already covering the anchor, that object's removal is part of the
/// same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampDelta {
    pub map: MapId,
    pub placed: PlacedObject,
    /// Position of `placed` in the grid's object list
    pub placed_index: usize,
    /// Object removed to make room, with its list position
    pub replaced: Option<(usize, PlacedObject)>,
    /// Layers appended on top to fit the object
    pub added_layers: usize,
    /// Texture appended to the grid's texture table
    pub added_texture: Option<String>,
    changes: ChangeSet<(usize, usize), CellState>,
}

impl StampDelta {
    pub fn changes(&self) -> &ChangeSet<(usize, usize), CellState> {
        &self.changes
    }

    pub fn undo(&self, grid: &mut TileGrid) {
        for (&(depth, index), &state) in self.changes.old() {
            grid.set_cell_state(depth, index, state);
        }

        if self.placed_index < grid.placed_objects.len() {
            let removed = grid.placed_objects.remove(self.placed_index);
            debug_assert_eq!(removed, self.placed);
        }
        if let Some((index, record)) = self.replaced {
            let at = index.min(grid.placed_objects.len());
            grid.placed_objects.insert(at, record);
        }

        if self.added_layers > 0 {
            grid.truncate_layers(grid.layer_count() - self.added_layers);
        }
        if self.added_texture.is_some() {
            grid.textures.pop();
        }
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        for _ in 0..self.added_layers {
            grid.append_layer();
        }
        if let Some(name) = &self.added_texture {
            grid.textures.push(name.clone());
        }

        if let Some((index, _)) = self.replaced {
            if index < grid.placed_objects.len() {
                grid.placed_objects.remove(index);
            }
        }
        for (&(depth, index), &state) in self.changes.new_values() {
            grid.set_cell_state(depth, index, state);
        }
        let at = self.placed_index.min(grid.placed_objects.len());
        grid.placed_objects.insert(at, self.placed);
    }
}

/// Place `library[object]` with its top-left cell at `(x, y)` on layer `depth`.
///
/// An object already covering `(x, y)` is removed first, unless the settings
/// turn replacing off. Layers are appended when the object reaches above the
/// top layer.
pub fn stamp(
    grid: &mut TileGrid,
    library: &[ObjectDef],
    object: usize,
    x: u32,
    y: u32,
    depth: usize,
    settings: &EditorSettings,
) -> Result<StampDelta, EditError> {
    let def = library.get(object).ok_or(EditError::UnknownObject(object))?;
    check_position(grid, x, y)?;
    check_layer(grid, depth)?;

    let replaced = match grid.placed_object_at(x, y) {
        Some(_) if !settings.stamp_replaces => {
            return Err(EditError::ObjectOccupied { x, y });
        }
        Some(index) => {
            let existing = grid.placed_objects[index];
            let existing_def = library
                .get(existing.object)
                .ok_or(EditError::UnknownObject(existing.object))?;
            Some((index, existing, existing_def))
        }
        None => None,
    };

    let mut changes = ChangeSet::new();
    if let Some((index, existing, existing_def)) = replaced {
        clear_footprint(grid, &mut changes, existing_def, &existing, settings.base_texture);
        grid.placed_objects.remove(index);
    }

    let needed = depth + def.max_depth() + 1;
    let added_layers = needed.saturating_sub(grid.layer_count());
    for _ in 0..added_layers {
        grid.append_layer();
    }
    if added_layers > 0 {
        log::debug!(
            "object {} grew map {} to {} layers",
            def.name,
            grid.name,
            grid.layer_count()
        );
    }

    let (texture, texture_added) = grid.ensure_texture(&def.texture);
    let placed = PlacedObject {
        object,
        x,
        y,
        depth,
        width: def.width,
        height: def.height,
    };
    draw_footprint(grid, &mut changes, def, &placed, texture);
    grid.placed_objects.push(placed);

    Ok(StampDelta {
        map: grid.id,
        placed,
        placed_index: grid.placed_objects.len() - 1,
        replaced: replaced.map(|(index, existing, _)| (index, existing)),
        added_layers,
        added_texture: texture_added.then(|| def.texture.clone()),
        changes,
    })
}

/// Remove the object covering `(x, y)`.
///
/// The result is the placement record played backwards, so undoing the
/// removal places the object again.
pub fn unstamp(
    grid: &mut TileGrid,
    library: &[ObjectDef],
    x: u32,
    y: u32,
    settings: &EditorSettings,
) -> Result<Inverse<StampDelta>, EditError> {
    check_position(grid, x, y)?;
    let index = grid
        .placed_object_at(x, y)
        .ok_or(EditError::NoObjectAt { x, y })?;
    let placed = grid.placed_objects[index];
    let def = library
        .get(placed.object)
        .ok_or(EditError::UnknownObject(placed.object))?;

    let mut changes = ChangeSet::new();
    clear_footprint(grid, &mut changes, def, &placed, settings.base_texture);
    grid.placed_objects.remove(index);

    Ok(Inverse(StampDelta {
        map: grid.id,
        placed,
        placed_index: index,
        replaced: None,
        added_layers: 0,
        added_texture: None,
        changes: changes.inverted(),
    }))
}

fn draw_footprint(
    grid: &mut TileGrid,
    changes: &mut ChangeSet<(usize, usize), CellState>,
    def: &ObjectDef,
    placed: &PlacedObject,
    texture: TextureId,
) {
    for (cx, cy) in def.footprint() {
        let Some(index) = footprint_index(grid, placed, cx, cy) else {
            continue;
        };
        let tile = def.tile_at(cx, cy);
        write_state(grid, changes, placed.depth + def.depth_at(cx, cy), index, |state| {
            state.tile = Some(tile);
            state.texture = texture;
        });
        if def.collision.collides(cx, cy, def.width, def.height) {
            write_state(grid, changes, placed.depth, index, |state| {
                state.collision = true;
            });
        }
    }
}

fn clear_footprint(
    grid: &mut TileGrid,
    changes: &mut ChangeSet<(usize, usize), CellState>,
    def: &ObjectDef,
    placed: &PlacedObject,
    base_texture: TextureId,
) {
    for (cx, cy) in def.footprint() {
        let Some(index) = footprint_index(grid, placed, cx, cy) else {
            continue;
        };
        write_state(grid, changes, placed.depth + def.depth_at(cx, cy), index, |state| {
            state.tile = None;
            state.texture = base_texture;
        });
        write_state(grid, changes, placed.depth, index, |state| {
            state.collision = false;
        });
    }
}

/// Grid index of footprint cell `(cx, cy)`; cells past the map edge are clipped
fn footprint_index(grid: &TileGrid, placed: &PlacedObject, cx: u32, cy: u32) -> Option<usize> {
    let (x, y) = (placed.x + cx, placed.y + cy);
    grid.contains(x as i64, y as i64).then(|| grid.index(x, y))
}

fn write_state(
    grid: &mut TileGrid,
    changes: &mut ChangeSet<(usize, usize), CellState>,
    depth: usize,
    index: usize,
    update: impl FnOnce(&mut CellState),
) {
    let Some(before) = grid.cell_state(depth, index) else {
        return;
    };
    let mut after = before;
    update(&mut after);
    if after != before {
        grid.set_cell_state(depth, index, after);
        changes.record((depth, index), before, after);
    }
}
