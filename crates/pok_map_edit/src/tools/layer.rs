//! Inserting and removing layers

use crate::commands::Inverse;
use crate::tools::check_layer;
use crate::EditError;
use pok_map_core::{Layer, LayerRecords, MapId, TileGrid};
use serde::{Deserialize, Serialize};

/// A layer put in at `depth`, with the records that sit on it.
///
/// Removing a layer is the insertion it reverses, so removal records are
/// wrapped in [`Inverse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDelta {
    pub map: MapId,
    pub depth: usize,
    pub layer: Layer,
    pub records: LayerRecords,
}

impl LayerDelta {
    pub fn undo(&self, grid: &mut TileGrid) {
        let (layer, records) = grid.remove_layer(self.depth);
        debug_assert_eq!(layer, self.layer);
        debug_assert_eq!(records, self.records);
    }

    pub fn redo(&self, grid: &mut TileGrid) {
        grid.insert_layer(self.depth, self.layer.clone());
        grid.restore_layer_records(&self.records);
    }
}

/// Put an empty layer in at `depth`. Passing the layer count appends one on
/// top.
pub fn insert_layer(grid: &mut TileGrid, depth: usize) -> Result<LayerDelta, EditError> {
    if depth > grid.layer_count() {
        return Err(EditError::LayerOutOfRange {
            depth,
            layers: grid.layer_count(),
        });
    }

    let delta = LayerDelta {
        map: grid.id,
        depth,
        layer: Layer::new(grid.cell_count()),
        records: LayerRecords::default(),
    };
    delta.redo(grid);
    Ok(delta)
}

/// Take out layer `depth` with everything on it. Portals, objects and NPCs
/// on higher layers move down one.
pub fn remove_layer(grid: &mut TileGrid, depth: usize) -> Result<Inverse<LayerDelta>, EditError> {
    check_layer(grid, depth)?;
    if grid.layer_count() == 1 {
        return Err(EditError::LastLayer);
    }

    let (layer, records) = grid.remove_layer(depth);
    if !records.is_empty() {
        log::debug!("removing layer {} of {} dropped records on it", depth, grid.name);
    }
    Ok(Inverse(LayerDelta {
        map: grid.id,
        depth,
        layer,
        records,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Delta, Reversible};
    use crate::Project;
    use pok_map_core::{Entry, Exit, PlacedObject, TileCell};

    fn tower() -> TileGrid {
        let mut grid = TileGrid::new("Tower", 3, 3);
        grid.append_layer();
        grid.append_layer();
        for depth in 0..3 {
            grid.set_cell(depth, depth, TileCell::new(depth as u32 + 1, 0));
        }
        grid.entries.push(Entry { id: 0, x: 0, y: 0, z: 2 });
        grid.entries.push(Entry { id: 1, x: 1, y: 1, z: 1 });
        grid.exits.push(Exit {
            target: MapId::new(),
            id: 3,
            x: 1,
            y: 1,
            z: 1,
        });
        grid.placed_objects.push(PlacedObject {
            object: 0,
            x: 0,
            y: 1,
            depth: 2,
            width: 1,
            height: 1,
        });
        grid
    }

    #[test]
    fn test_insert_moves_higher_records_up() {
        let mut grid = tower();
        let before = grid.clone();

        let delta = insert_layer(&mut grid, 1).unwrap();
        assert_eq!(grid.layer_count(), 4);
        assert_eq!(grid.cell(1, 1), Some(TileCell::EMPTY));
        assert_eq!(grid.cell(2, 1), Some(TileCell::new(2, 0)));
        assert_eq!(grid.entries[0].z, 3);
        assert_eq!(grid.entries[1].z, 2);
        assert_eq!(grid.placed_objects[0].depth, 3);

        delta.undo(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_append_on_top() {
        let mut grid = tower();
        insert_layer(&mut grid, 3).unwrap();

        assert_eq!(grid.layer_count(), 4);
        assert_eq!(grid.entries[0].z, 2);
        assert_eq!(
            insert_layer(&mut grid, 6),
            Err(EditError::LayerOutOfRange { depth: 6, layers: 4 })
        );
    }

    #[test]
    fn test_remove_layer_and_undo_through_history() {
        let mut project = Project::new();
        let id = project.add_map(tower());
        let before = project.clone();

        let delta: Delta = remove_layer(project.map_mut(id).unwrap(), 1).unwrap().into();
        assert_eq!(delta.name(), "RemoveLayer");
        let removed = project.clone();
        let grid = project.map(id).unwrap();
        assert_eq!(grid.layer_count(), 2);
        assert_eq!(grid.cell(1, 2), Some(TileCell::new(3, 0)));
        assert_eq!(grid.entries, vec![Entry { id: 0, x: 0, y: 0, z: 1 }]);
        assert!(grid.exits.is_empty());
        assert_eq!(grid.placed_objects[0].depth, 1);

        delta.undo(&mut project);
        assert_eq!(project, before);
        delta.redo(&mut project);
        assert_eq!(project, removed);
    }

    #[test]
    fn test_last_layer_cannot_be_removed() {
        let mut grid = TileGrid::new("Flat", 2, 2);

        assert_eq!(remove_layer(&mut grid, 0), Err(EditError::LastLayer));
        assert_eq!(
            remove_layer(&mut grid, 1),
            Err(EditError::LayerOutOfRange { depth: 1, layers: 1 })
        );
    }
}
