//! pok_map_edit - Undoable editing for pok tile maps
//!
//! This crate provides the editing core of the map editor:
//! - Project management (the set of open maps)
//! - Pencil, eraser and bucket fill
//! - Autotile painting with neighbor updates
//! - Object stamping and removal
//! - Portal links between maps
//! - NPC placement
//! - Layer insertion and removal
//! - Tree-area planting
//! - Map resizing around an anchor corner
//! - Undo/redo history
//!
//! Rendering, input and file formats belong to the host.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pok_map_edit::{fill, Delta, EditorSettings, Gesture, History, Project};
//! use pok_map_edit::pok_map_core::{TileCell, TileGrid};
//!
//! let settings = EditorSettings::default();
//! let mut project = Project::new();
//! let mut history = History::with_settings(&settings);
//! let map = project.add_map(TileGrid::new("Route 1", 20, 15));
//!
//! // A drag with the pencil becomes one undo step
//! let mut gesture = Gesture::begin_paint(map, 0, TileCell::new(12, 1));
//! for index in [21, 22, 23] {
//!     gesture.apply(&mut project, index)?;
//! }
//! if let Some(delta) = gesture.finish() {
//!     history.commit(delta);
//! }
//!
//! // Single-shot edits are committed right away
//! let bucket = fill(project.map_mut(map)?, 0, 0, TileCell::new(3, 1))?;
//! history.commit(Delta::Fill(bucket));
//!
//! history.undo(&mut project);
//! ```

pub mod commands;
mod error;
pub mod project;
mod settings;
pub mod tools;

// Re-export core types from pok_map_* crates
pub use pok_map_autotile;
pub use pok_map_core;

pub use commands::{Delta, Gesture, History, Inverse, Reversible};
pub use error::{ConfigError, EditError};
pub use project::Project;
pub use settings::EditorSettings;
pub use tools::{
    autotile, connect, disconnect, erase, fill, insert_layer, paint, place_npc, plant_trees,
    remove_layer, remove_npc, resize, stamp, unstamp, AutotileEdit, DetachedPortals, LayerDelta,
    LinkDelta, LinkEndpoint, NpcDelta, ResizeDelta, StampDelta, TileStroke, TreeAreaDelta,
    TreeSheet, UnlinkDelta, TREE_HEIGHT, TREE_SPACING, TREE_WIDTH,
};
