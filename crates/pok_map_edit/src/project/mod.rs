//! The set of maps open in an editing session

use crate::EditError;
use pok_map_core::{MapId, TileGrid};
use serde::{Deserialize, Serialize};

/// Every map being edited. Deltas address maps by `MapId` through this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub maps: Vec<TileGrid>,
    #[serde(skip)]
    dirty: bool,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the project as having unsaved changes
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call after the host has saved
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Add a map and return its id
    pub fn add_map(&mut self, map: TileGrid) -> MapId {
        let id = map.id;
        self.maps.push(map);
        id
    }

    pub fn get_map(&self, id: MapId) -> Option<&TileGrid> {
        self.maps.iter().find(|m| m.id == id)
    }

    pub fn get_map_mut(&mut self, id: MapId) -> Option<&mut TileGrid> {
        self.maps.iter_mut().find(|m| m.id == id)
    }

    /// Like [`get_map`](Self::get_map) but with an error for unknown ids
    pub fn map(&self, id: MapId) -> Result<&TileGrid, EditError> {
        self.get_map(id).ok_or(EditError::UnknownMap(id))
    }

    /// Like [`get_map_mut`](Self::get_map_mut) but with an error for unknown ids
    pub fn map_mut(&mut self, id: MapId) -> Result<&mut TileGrid, EditError> {
        self.get_map_mut(id).ok_or(EditError::UnknownMap(id))
    }

    pub fn remove_map(&mut self, id: MapId) -> Option<TileGrid> {
        let pos = self.maps.iter().position(|m| m.id == id)?;
        Some(self.maps.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut project = Project::new();
        let id = project.add_map(TileGrid::new("Town", 4, 4));

        assert_eq!(project.map(id).unwrap().name, "Town");
        project.map_mut(id).unwrap().name = "Village".to_string();
        assert_eq!(project.get_map(id).unwrap().name, "Village");

        let missing = MapId::new();
        assert_eq!(project.map(missing).unwrap_err(), EditError::UnknownMap(missing));
    }

    #[test]
    fn test_remove_map() {
        let mut project = Project::new();
        let a = project.add_map(TileGrid::new("A", 1, 1));
        let b = project.add_map(TileGrid::new("B", 1, 1));

        assert!(project.remove_map(a).is_some());
        assert!(project.remove_map(a).is_none());
        assert_eq!(project.maps.len(), 1);
        assert!(project.get_map(b).is_some());
    }

    #[test]
    fn test_dirty_flag() {
        let mut project = Project::new();
        assert!(!project.is_dirty());
        project.mark_dirty();
        assert!(project.is_dirty());
        project.clear_dirty();
        assert!(!project.is_dirty());
    }
}
