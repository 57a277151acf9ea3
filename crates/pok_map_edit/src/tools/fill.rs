//! Bucket fill

use crate::tools::{check_cell, TileStroke};
use crate::EditError;
use pok_map_core::{TileCell, TileGrid};

const FILL_DIRECTIONS: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Flood the 4-connected region around `start` that shares its cell value.
///
/// Rejected with [`EditError::NoChange`] when the start cell already holds
/// `new`. Filled cells stop matching the region value, so they are never
/// visited twice.
pub fn fill(
    grid: &mut TileGrid,
    depth: usize,
    start: usize,
    new: TileCell,
) -> Result<TileStroke, EditError> {
    check_cell(grid, depth, start)?;
    let original = grid.cell(depth, start).unwrap_or(TileCell::EMPTY);
    if original == new {
        return Err(EditError::NoChange);
    }

    let mut stroke = TileStroke::new(grid.id, depth, new);
    let mut stack = vec![start];

    while let Some(index) = stack.pop() {
        if grid.cell(depth, index) != Some(original) {
            continue;
        }
        grid.set_cell(depth, index, new);
        stroke.cells.insert(index, original);

        for (dx, dy) in FILL_DIRECTIONS {
            if let Some(next) = grid.offset(index, dx, dy) {
                stack.push(next);
            }
        }
    }

    log::trace!("bucket filled {} cells on layer {}", stroke.len(), depth);
    Ok(stroke)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&str]) -> TileGrid {
        let mut grid = TileGrid::new("Fill", rows[0].len() as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    let index = grid.index(x as u32, y as u32);
                    grid.set_cell(0, index, TileCell::new(1, 0));
                }
            }
        }
        grid
    }

    #[test]
    fn test_fill_stays_inside_region() {
        let mut grid = grid_from_rows(&["..#..", "..#..", "###..", "....."]);
        let stroke = fill(&mut grid, 0, 0, TileCell::new(2, 0)).unwrap();

        assert_eq!(stroke.len(), 4);
        for index in [0, 1, 5, 6] {
            assert_eq!(grid.cell(0, index), Some(TileCell::new(2, 0)));
        }
        assert_eq!(grid.cell(0, 3), Some(TileCell::EMPTY));
        assert_eq!(grid.cell(0, 19), Some(TileCell::EMPTY));
    }

    #[test]
    fn test_fill_diagonal_is_not_connected() {
        let mut grid = grid_from_rows(&[".#", "#."]);
        fill(&mut grid, 0, 0, TileCell::new(2, 0)).unwrap();

        assert_eq!(grid.cell(0, 3), Some(TileCell::EMPTY));
    }

    #[test]
    fn test_fill_same_value_is_rejected() {
        let mut grid = grid_from_rows(&["..", ".."]);
        let before = grid.clone();

        assert_eq!(
            fill(&mut grid, 0, 0, TileCell::EMPTY),
            Err(EditError::NoChange)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_texture_is_part_of_the_region_value() {
        let mut grid = TileGrid::new("Fill", 3, 1);
        grid.set_cell(0, 0, TileCell::new(4, 0));
        grid.set_cell(0, 1, TileCell::new(4, 1));
        grid.set_cell(0, 2, TileCell::new(4, 0));

        let stroke = fill(&mut grid, 0, 0, TileCell::new(5, 0)).unwrap();
        assert_eq!(stroke.len(), 1);
        assert_eq!(grid.cell(0, 2), Some(TileCell::new(4, 0)));
    }

    #[test]
    fn test_fill_whole_map_and_undo() {
        let mut grid = TileGrid::new("Large", 64, 64);
        let before = grid.clone();

        let stroke = fill(&mut grid, 0, 100, TileCell::new(3, 0)).unwrap();
        assert_eq!(stroke.len(), 64 * 64);

        stroke.undo(&mut grid);
        assert_eq!(grid, before);
    }
}
