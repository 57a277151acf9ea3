//! 13-slot autotile system
//!
//! This crate decides which tile of an [`AutoTilePattern`] a cell should show
//! from the cells around it, and paints with a one-hop ripple so neighbors
//! that depend on the painted cell are updated too.
//!
//! # Example
//!
//! ```rust,ignore
//! use pok_map_autotile::{paint_with_ripple, AutoTilePattern};
//! use pok_map_core::TileGrid;
//!
//! let pattern = AutoTilePattern::from_json(include_str!("grass.ati"))?;
//! let mut grid = TileGrid::new("Route 1", 20, 15);
//!
//! // One drag gesture: join every ripple into a single undo record
//! let mut gesture = paint_with_ripple(&mut grid, 42, 0, 1, &pattern);
//! gesture.join(paint_with_ripple(&mut grid, 43, 0, 1, &pattern));
//! ```

mod matcher;
mod neighborhood;
mod pattern;
mod ripple;

pub use matcher::{classify, decide, decide_slot};
pub use neighborhood::{sample, Neighborhood, NEIGHBOR_OFFSETS};
pub use pattern::{AutoTilePattern, PatternError, PatternSlot};
pub use ripple::{paint_with_ripple, AutotileDelta};

// Re-export pok_map_core
pub use pok_map_core;
