//! Portal records linking two maps
//!
//! A link is two records sharing an id: an `Entry` in the map being arrived
//! at, and an `Exit` in the map being left whose `target` names that map.

use crate::MapId;
use serde::{Deserialize, Serialize};

/// Leaves this map through the `Entry` with id `id` in map `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exit {
    pub target: MapId,
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub z: usize,
}

impl Exit {
    pub fn is_at(&self, x: u32, y: u32, z: usize) -> bool {
        self.x == x && self.y == y && self.z == z
    }
}

/// Arrival point for exits that carry the same id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub z: usize,
}

impl Entry {
    pub fn is_at(&self, x: u32, y: u32, z: usize) -> bool {
        self.x == x && self.y == y && self.z == z
    }
}
