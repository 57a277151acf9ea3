//! Growing and cropping a grid around a fixed corner

use crate::{relocate, CellState, Entry, Exit, Layer, NpcInfo, PlacedObject, RemovedRecords, TileGrid};
use serde::{Deserialize, Serialize};

/// The corner that stays put while the opposite edges move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// How far existing content moves when the grid changes by `(dw, dh)`
    pub fn content_offset(self, dw: i32, dh: i32) -> (i64, i64) {
        let dx = match self {
            Anchor::TopLeft | Anchor::BottomLeft => 0,
            Anchor::TopRight | Anchor::BottomRight => dw as i64,
        };
        let dy = match self {
            Anchor::TopLeft | Anchor::TopRight => 0,
            Anchor::BottomLeft | Anchor::BottomRight => dh as i64,
        };
        (dx, dy)
    }
}

/// Everything a resize threw away, in the coordinates it had before
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeOutcome {
    /// `(depth, old linear index, state)` of cropped non-default cells
    pub cropped: Vec<(usize, usize, CellState)>,
    pub exits: RemovedRecords<Exit>,
    pub entries: RemovedRecords<Entry>,
    pub placed_objects: RemovedRecords<PlacedObject>,
    pub npcs: RemovedRecords<NpcInfo>,
}

impl ResizeOutcome {
    /// True when nothing was lost
    pub fn is_lossless(&self) -> bool {
        self.cropped.is_empty()
            && self.exits.is_empty()
            && self.entries.is_empty()
            && self.placed_objects.is_empty()
            && self.npcs.is_empty()
    }
}

impl TileGrid {
    /// Change the grid size by `(dw, dh)`, keeping `anchor` in place.
    ///
    /// Content and records move with the anchor. Cells and records that end
    /// up outside the new bounds are removed and returned. Panics if either
    /// new dimension would be less than one.
    pub fn resize(&mut self, dw: i32, dh: i32, anchor: Anchor) -> ResizeOutcome {
        let new_width = self.width() as i64 + dw as i64;
        let new_height = self.height() as i64 + dh as i64;
        assert!(
            new_width >= 1 && new_height >= 1,
            "resize to {new_width}x{new_height} is not allowed"
        );
        let (new_width, new_height) = (new_width as u32, new_height as u32);
        let (dx, dy) = anchor.content_offset(dw, dh);

        let mut outcome = ResizeOutcome::default();
        let new_size = (new_width * new_height) as usize;
        let mut layers = Vec::with_capacity(self.layer_count());

        for (depth, layer) in self.layers().iter().enumerate() {
            let mut resized = Layer::new(new_size);
            for index in 0..layer.len() {
                let Some(state) = layer.state(index) else {
                    continue;
                };
                let (x, y) = self.coords(index);
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if nx >= 0 && ny >= 0 && nx < new_width as i64 && ny < new_height as i64 {
                    resized.set_state((ny as u32 * new_width + nx as u32) as usize, state);
                } else if !state.is_default() {
                    outcome.cropped.push((depth, index, state));
                }
            }
            layers.push(resized);
        }

        log::trace!(
            "resizing map {} from {}x{} to {}x{}",
            self.name,
            self.width(),
            self.height(),
            new_width,
            new_height
        );
        self.replace_layers(new_width, new_height, layers);

        outcome.exits = relocate(&mut self.exits, dx, dy, new_width, new_height);
        outcome.entries = relocate(&mut self.entries, dx, dy, new_width, new_height);
        outcome.placed_objects = relocate(&mut self.placed_objects, dx, dy, new_width, new_height);
        outcome.npcs = relocate(&mut self.npcs, dx, dy, new_width, new_height);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MapId, TileCell};

    fn numbered(width: u32, height: u32) -> TileGrid {
        let mut grid = TileGrid::new("Numbered", width, height);
        for i in 0..grid.cell_count() {
            grid.set_cell(0, i, TileCell::new(i as u32, 1));
        }
        grid
    }

    #[test]
    fn test_grow_top_left_keeps_content_in_place() {
        let mut grid = numbered(2, 2);
        let outcome = grid.resize(1, 1, Anchor::TopLeft);

        assert!(outcome.is_lossless());
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.cell(0, grid.index(1, 1)), Some(TileCell::new(3, 1)));
        assert_eq!(grid.cell(0, grid.index(2, 2)), Some(TileCell::EMPTY));
        grid.check_invariants();
    }

    #[test]
    fn test_grow_bottom_right_shifts_content() {
        let mut grid = numbered(2, 2);
        grid.entries.push(Entry { id: 0, x: 1, y: 0, z: 0 });
        grid.resize(2, 1, Anchor::BottomRight);

        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.cell(0, grid.index(2, 1)), Some(TileCell::new(0, 1)));
        assert_eq!(grid.cell(0, grid.index(0, 0)), Some(TileCell::EMPTY));
        assert_eq!(grid.entries[0].x, 3);
        assert_eq!(grid.entries[0].y, 1);
    }

    #[test]
    fn test_crop_reports_lost_cells_and_records() {
        let mut grid = numbered(3, 2);
        grid.exits.push(Exit {
            target: MapId::new(),
            id: 0,
            x: 2,
            y: 1,
            z: 0,
        });
        grid.entries.push(Entry { id: 4, x: 0, y: 0, z: 0 });

        let outcome = grid.resize(-1, 0, Anchor::TopLeft);

        assert_eq!(grid.width(), 2);
        let cropped: Vec<usize> = outcome.cropped.iter().map(|(_, i, _)| *i).collect();
        assert_eq!(cropped, vec![2, 5]);
        assert_eq!(outcome.exits.len(), 1);
        assert!(outcome.entries.is_empty());
        assert!(grid.exits.is_empty());
        assert_eq!(grid.entries.len(), 1);
    }

    #[test]
    #[should_panic(expected = "not allowed")]
    fn test_resize_to_zero_panics() {
        let mut grid = numbered(1, 1);
        grid.resize(-1, 0, Anchor::TopLeft);
    }
}
