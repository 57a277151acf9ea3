//! 3x3 neighborhood sampling

use crate::AutoTilePattern;
use pok_map_core::{TextureId, TileGrid};

/// The 3x3 block of cells around a center cell, row-major from the upper left.
///
/// A cell is `Some(tile)` when it belongs to the pattern being painted and
/// `None` when it is outside the grid, uses another texture, or holds a tile
/// the pattern does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighborhood {
    pub cells: [[Option<u32>; 3]; 3],
}

/// Offsets of the eight neighbors as `(dx, dy)`
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Neighborhood {
    pub fn new(cells: [[Option<u32>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Whether the cell at `(dx, dy)` from the center is present
    pub fn present(&self, dx: i64, dy: i64) -> bool {
        self.cells[(dy + 1) as usize][(dx + 1) as usize].is_some()
    }

    pub fn above(&self) -> bool {
        self.present(0, -1)
    }

    pub fn below(&self) -> bool {
        self.present(0, 1)
    }

    pub fn left(&self) -> bool {
        self.present(-1, 0)
    }

    pub fn right(&self) -> bool {
        self.present(1, 0)
    }

    pub fn upper_left(&self) -> bool {
        self.present(-1, -1)
    }

    pub fn upper_right(&self) -> bool {
        self.present(1, -1)
    }

    pub fn lower_left(&self) -> bool {
        self.present(-1, 1)
    }

    pub fn lower_right(&self) -> bool {
        self.present(1, 1)
    }

    /// Offsets of the present neighbors, center excluded
    pub fn present_neighbors(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .copied()
            .filter(|&(dx, dy)| self.present(dx, dy))
    }
}

/// Sample the neighborhood of `index` on layer `depth` for `texture` and `pattern`
pub fn sample(
    grid: &TileGrid,
    index: usize,
    depth: usize,
    texture: TextureId,
    pattern: &AutoTilePattern,
) -> Neighborhood {
    let mut hood = Neighborhood::default();
    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            let member = grid
                .offset(index, dx, dy)
                .and_then(|i| grid.cell(depth, i))
                .filter(|cell| cell.texture == texture)
                .and_then(|cell| cell.tile)
                .filter(|tile| pattern.has_index(*tile));
            hood.cells[(dy + 1) as usize][(dx + 1) as usize] = member;
        }
    }
    hood
}
