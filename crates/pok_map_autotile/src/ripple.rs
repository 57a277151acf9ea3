//! Painting with one-hop neighbor updates

use crate::{classify, sample, AutoTilePattern};
use pok_map_core::{ChangeSet, TextureId, TileCell, TileGrid};
use serde::{Deserialize, Serialize};

/// Cells changed by autotile painting on one layer, keyed by linear index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutotileDelta {
    pub depth: usize,
    changes: ChangeSet<usize, TileCell>,
}

impl AutotileDelta {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            changes: ChangeSet::new(),
        }
    }

    pub fn changes(&self) -> &ChangeSet<usize, TileCell> {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Merge a later delta from the same gesture into this one.
    ///
    /// The earliest captured old value and the latest captured new value win
    /// for every cell, so the merged delta undoes to the state before the
    /// gesture and redoes to the state after it.
    pub fn join(&mut self, other: AutotileDelta) {
        debug_assert_eq!(self.depth, other.depth, "joining deltas from different layers");
        self.changes.join(other.changes);
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

    fn write(&mut self, grid: &mut TileGrid, index: usize, cell: TileCell) {
        let Some(before) = grid.cell(self.depth, index) else {
            return;
        };
        if before == cell {
            return;
        }
        grid.set_cell(self.depth, index, cell);
        self.changes.record(index, before, cell);
    }
}

/// Paint `index` with `pattern` and re-decide the neighbors that depend on it.
///
/// The cell is first set to the center tile. Every neighbor that belonged to
/// the pattern before the paint is then re-classified against its updated
/// surroundings; their own neighbors are left alone. Finally the painted cell
/// is classified once more.
pub fn paint_with_ripple(
    grid: &mut TileGrid,
    index: usize,
    depth: usize,
    texture: TextureId,
    pattern: &AutoTilePattern,
) -> AutotileDelta {
    let mut delta = AutotileDelta::new(depth);
    if grid.cell(depth, index).is_none() {
        return delta;
    }

    let before = sample(grid, index, depth, texture, pattern);
    delta.write(grid, index, TileCell::new(pattern.center, texture));

    for (dx, dy) in before.present_neighbors() {
        let Some(neighbor) = grid.offset(index, dx, dy) else {
            continue;
        };
        let tile = classify(grid, neighbor, depth, texture, pattern);
        delta.write(grid, neighbor, TileCell::new(tile, texture));
    }

    let tile = classify(grid, index, depth, texture, pattern);
    delta.write(grid, index, TileCell::new(tile, texture));

    log::trace!(
        "autotile paint at {} touched {} cells",
        index,
        delta.changes.len()
    );
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const TEX: TextureId = 3;

    fn pattern() -> AutoTilePattern {
        AutoTilePattern {
            upper_left: 0,
            upper: 1,
            upper_right: 2,
            left: 8,
            center: 9,
            right: 10,
            lower_left: 16,
            lower: 17,
            lower_right: 18,
            curve_upper_left: 3,
            curve_upper_right: 4,
            curve_lower_left: 11,
            curve_lower_right: 12,
        }
    }

    fn tile_at(grid: &TileGrid, x: u32, y: u32) -> Option<u32> {
        grid.cell(0, grid.index(x, y)).and_then(|c| c.tile)
    }

    #[test]
    fn test_single_paint_is_lower() {
        let mut grid = TileGrid::new("Field", 5, 5);
        let idx = grid.index(2, 2);
        let delta = paint_with_ripple(&mut grid, idx, 0, TEX, &pattern());

        assert_eq!(tile_at(&grid, 2, 2), Some(17));
        assert_eq!(delta.changes().len(), 1);
        assert_eq!(
            delta.changes().old_value(&grid.index(2, 2)),
            Some(&TileCell::EMPTY)
        );
    }

    #[test]
    fn test_painting_a_block_yields_edges_and_corners() {
        let mut grid = TileGrid::new("Field", 5, 5);
        let p = pattern();
        for y in 1..=3 {
            for x in 1..=3 {
                let idx = grid.index(x, y);
                paint_with_ripple(&mut grid, idx, 0, TEX, &p);
            }
        }

        let expected = [[0, 1, 2], [8, 9, 10], [16, 17, 18]];
        for (row, tiles) in expected.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                assert_eq!(
                    tile_at(&grid, col as u32 + 1, row as u32 + 1),
                    Some(*tile),
                    "cell ({}, {})",
                    col + 1,
                    row + 1
                );
            }
        }
        assert_eq!(tile_at(&grid, 0, 0), None);
    }

    #[test]
    fn test_ripple_is_one_hop() {
        let mut grid = TileGrid::new("Strip", 5, 1);
        let p = pattern();
        // A stale center tile two cells away must not be touched
        grid.set_cell(0, grid.index(3, 0), TileCell::new(p.center, TEX));
        grid.set_cell(0, grid.index(4, 0), TileCell::new(p.center, TEX));

        let idx = grid.index(2, 0);
        let delta = paint_with_ripple(&mut grid, idx, 0, TEX, &p);

        assert_eq!(tile_at(&grid, 3, 0), Some(p.lower));
        assert_eq!(tile_at(&grid, 4, 0), Some(p.center));
        assert!(delta.changes().old_value(&grid.index(4, 0)).is_none());
    }

    #[test]
    fn test_foreign_texture_neighbors_untouched() {
        let mut grid = TileGrid::new("Mixed", 3, 1);
        let p = pattern();
        grid.set_cell(0, 0, TileCell::new(p.center, TEX + 1));

        paint_with_ripple(&mut grid, 1, 0, TEX, &p);

        assert_eq!(grid.cell(0, 0), Some(TileCell::new(p.center, TEX + 1)));
        assert_eq!(grid.cell(0, 1), Some(TileCell::new(p.lower, TEX)));
    }

    #[test]
    fn test_join_keeps_pre_gesture_old_and_final_new() {
        let mut grid = TileGrid::new("Field", 4, 4);
        let p = pattern();
        let a = grid.index(1, 1);
        let b = grid.index(2, 1);

        let mut first = paint_with_ripple(&mut grid, a, 0, TEX, &p);
        let after_first = grid.cell(0, a).unwrap();
        let second = paint_with_ripple(&mut grid, b, 0, TEX, &p);

        assert_eq!(second.changes().old_value(&a), Some(&after_first));
        first.join(second);

        assert_eq!(first.changes().old_value(&a), Some(&TileCell::EMPTY));
        assert_eq!(first.changes().new_value(&a), grid.cell(0, a).as_ref());
        assert_eq!(first.changes().new_value(&b), grid.cell(0, b).as_ref());
    }

    #[test]
    fn test_joined_random_gesture_undoes_and_redoes_exactly() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p = pattern();
        let mut grid = TileGrid::new("Random", 8, 6);
        for i in 0..grid.cell_count() {
            if rng.gen_bool(0.2) {
                grid.set_cell(0, i, TileCell::new(p.center, TEX));
            }
        }
        let before = grid.clone();

        let mut gesture = AutotileDelta::new(0);
        for _ in 0..40 {
            let index = rng.gen_range(0..grid.cell_count());
            gesture.join(paint_with_ripple(&mut grid, index, 0, TEX, &p));
        }
        let after = grid.clone();

        gesture.undo(&mut grid);
        assert_eq!(grid, before);

        gesture.redo(&mut grid);
        assert_eq!(grid, after);
    }
}
