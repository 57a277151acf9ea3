//! Accumulating one drag gesture into a single undo record

use crate::commands::Delta;
use crate::tools::{autotile, paint, AutotileEdit, TileStroke};
use crate::{EditError, Project};
use pok_map_autotile::{AutoTilePattern, AutotileDelta};
use pok_map_core::{MapId, TextureId, TileCell};

#[derive(Debug, Clone)]
enum Brush {
    Pencil(TileStroke),
    Eraser(TileStroke),
    Autotile {
        texture: TextureId,
        pattern: AutoTilePattern,
        edit: AutotileEdit,
    },
}

/// An in-progress pencil, eraser or autotile drag.
///
/// The host starts one on press, calls [`apply`](Gesture::apply) for every
/// cell the cursor passes over, and commits [`finish`](Gesture::finish) on
/// release.
#[derive(Debug, Clone)]
pub struct Gesture {
    map: MapId,
    depth: usize,
    brush: Brush,
}

impl Gesture {
    pub fn begin_paint(map: MapId, depth: usize, cell: TileCell) -> Self {
        Self {
            map,
            depth,
            brush: Brush::Pencil(TileStroke::new(map, depth, cell)),
        }
    }

    pub fn begin_erase(map: MapId, depth: usize, base_texture: TextureId) -> Self {
        Self {
            map,
            depth,
            brush: Brush::Eraser(TileStroke::new(map, depth, TileCell::cleared(base_texture))),
        }
    }

    pub fn begin_autotile(
        map: MapId,
        depth: usize,
        texture: TextureId,
        pattern: AutoTilePattern,
    ) -> Self {
        Self {
            map,
            depth,
            brush: Brush::Autotile {
                texture,
                pattern,
                edit: AutotileEdit {
                    map,
                    delta: AutotileDelta::new(depth),
                },
            },
        }
    }

    pub fn map(&self) -> MapId {
        self.map
    }

    /// Apply the brush at `index`. Cells that already hold the brush value
    /// are skipped without error.
    pub fn apply(&mut self, project: &mut Project, index: usize) -> Result<(), EditError> {
        let grid = project.map_mut(self.map)?;
        let result = match &mut self.brush {
            Brush::Pencil(stroke) | Brush::Eraser(stroke) => {
                paint(grid, self.depth, index, stroke.new).map(|step| stroke.merge(step))
            }
            Brush::Autotile {
                texture,
                pattern,
                edit,
            } => autotile(grid, self.depth, index, *texture, pattern).map(|step| edit.join(step)),
        };

        match result {
            Err(EditError::NoChange) => Ok(()),
            other => other,
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.brush {
            Brush::Pencil(stroke) | Brush::Eraser(stroke) => stroke.is_empty(),
            Brush::Autotile { edit, .. } => edit.delta.changes().is_identity(),
        }
    }

    /// The gesture's undo record, or `None` if it changed nothing
    pub fn finish(self) -> Option<Delta> {
        if self.is_empty() {
            return None;
        }
        Some(match self.brush {
            Brush::Pencil(stroke) => Delta::Paint(stroke),
            Brush::Eraser(stroke) => Delta::Erase(stroke),
            Brush::Autotile { edit, .. } => Delta::Autotile(edit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Reversible;
    use pok_map_core::TileGrid;

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

    #[test]
    fn test_pencil_drag_is_one_record() {
        let mut project = Project::new();
        let id = project.add_map(TileGrid::new("Town", 5, 5));
        let before = project.clone();

        let mut gesture = Gesture::begin_paint(id, 0, TileCell::new(4, 0));
        for index in [0, 1, 2, 2, 1, 6] {
            gesture.apply(&mut project, index).unwrap();
        }
        let after = project.clone();

        let Some(Delta::Paint(stroke)) = gesture.finish() else {
            panic!("expected a pencil record");
        };
        assert_eq!(stroke.len(), 4);

        Reversible::undo(&stroke, &mut project);
        assert_eq!(project, before);
        Reversible::redo(&stroke, &mut project);
        assert_eq!(project, after);
    }

    #[test]
    fn test_gesture_without_change_has_no_record() {
        let mut project = Project::new();
        let id = project.add_map(TileGrid::new("Town", 2, 2));

        let mut gesture = Gesture::begin_erase(id, 0, 0);
        gesture.apply(&mut project, 0).unwrap();
        gesture.apply(&mut project, 3).unwrap();

        assert!(gesture.finish().is_none());
    }

    #[test]
    fn test_autotile_drag_undoes_to_pre_gesture_state() {
        let mut project = Project::new();
        let id = project.add_map(TileGrid::new("Field", 6, 6));
        let before = project.clone();

        let mut gesture = Gesture::begin_autotile(id, 0, 1, pattern());
        for index in [7, 8, 9, 13, 14, 15, 14] {
            gesture.apply(&mut project, index).unwrap();
        }
        let after = project.clone();

        let delta = gesture.finish().unwrap();
        assert_eq!(delta.name(), "Autotile");
        delta.undo(&mut project);
        assert_eq!(project, before);
        delta.redo(&mut project);
        assert_eq!(project, after);
    }

    #[test]
    fn test_unknown_map_is_an_error() {
        let mut project = Project::new();
        let missing = MapId::new();
        let mut gesture = Gesture::begin_paint(missing, 0, TileCell::new(1, 0));

        assert_eq!(
            gesture.apply(&mut project, 0),
            Err(EditError::UnknownMap(missing))
        );
    }
}
