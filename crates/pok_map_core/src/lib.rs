//! Core data structures for the pok map editor
//!
//! This crate provides the fundamental types for representing tile maps:
//! - `TileGrid` - A complete map with layers, texture table and side tables
//! - `Layer` - One depth slice: tiles, collision flags and texture references
//! - `Exit` / `Entry` - Paired portal records linking two maps
//! - `ObjectDef` / `PlacedObject` - Multi-cell stamp templates and their instances
//! - `NpcInfo` - Placed non-player characters
//! - `ChangeSet` - First-write/last-write cell change capture used by undo records
//! - `RemovedRecords` - List-position preserving capture for resize and layer removal undo

mod cell;
mod changes;
mod grid;
mod layer;
mod npc;
mod object;
mod portal;
mod remap;
mod resize;

pub use cell::{CellState, TextureId, TileCell, BASE_TEXTURE};
pub use changes::ChangeSet;
pub use grid::{LayerRecords, MapId, TileGrid};
pub use layer::Layer;
pub use npc::{NpcInfo, NpcMovement};
pub use object::{CollisionEdges, ObjectDef, PlacedObject};
pub use portal::{Entry, Exit};
pub use remap::{lower_above, raise_from, relocate, Layered, Located, RemovedRecords};
pub use resize::{Anchor, ResizeOutcome};
