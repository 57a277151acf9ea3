//! Slot selection from neighbor occupancy

use crate::{sample, AutoTilePattern, Neighborhood, PatternSlot};
use pok_map_core::{TextureId, TileGrid};

/// Pick the slot a cell should show given its neighborhood.
///
/// Rules are checked in order and the first match wins:
/// 1. above and below present: left/right edges, then inner curves from the
///    diagonals, otherwise center
/// 2. above absent, below present: the top edge family
/// 3. below absent: the bottom edge family
pub fn decide_slot(hood: &Neighborhood) -> PatternSlot {
    if hood.above() && hood.below() {
        if !hood.left() && hood.right() {
            return PatternSlot::Left;
        }
        if !hood.right() && hood.left() {
            return PatternSlot::Right;
        }
        if hood.left() && hood.right() {
            if hood.upper_left() && hood.upper_right() {
                if !hood.lower_left() {
                    return PatternSlot::CurveLowerLeft;
                } else if !hood.lower_right() {
                    return PatternSlot::CurveLowerRight;
                }
            } else if hood.lower_left() || hood.lower_right() {
                if !hood.upper_left() {
                    return PatternSlot::CurveUpperLeft;
                } else if !hood.upper_right() {
                    return PatternSlot::CurveUpperRight;
                }
            }
        }
        return PatternSlot::Center;
    }

    if hood.below() {
        return match (hood.left(), hood.right()) {
            (false, true) => PatternSlot::UpperLeft,
            (true, false) => PatternSlot::UpperRight,
            _ => PatternSlot::Upper,
        };
    }

    match (hood.left(), hood.right()) {
        (false, true) => PatternSlot::LowerLeft,
        (true, false) => PatternSlot::LowerRight,
        _ => PatternSlot::Lower,
    }
}

/// Tile index for a neighborhood
pub fn decide(hood: &Neighborhood, pattern: &AutoTilePattern) -> u32 {
    pattern.slot(decide_slot(hood))
}

/// Tile index the cell at `index` should show, judged from its current neighbors
pub fn classify(
    grid: &TileGrid,
    index: usize,
    depth: usize,
    texture: TextureId,
    pattern: &AutoTilePattern,
) -> u32 {
    decide(&sample(grid, index, depth, texture, pattern), pattern)
}
