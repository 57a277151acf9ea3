//! Undo records

use crate::tools::{
    AutotileEdit, LayerDelta, LinkDelta, NpcDelta, ResizeDelta, StampDelta, TileStroke,
    TreeAreaDelta, UnlinkDelta,
};
use crate::Project;
use pok_map_core::{MapId, TileGrid};
use serde::{Deserialize, Serialize};

/// An edit that can be played backwards and forwards again
pub trait Reversible {
    /// Put the project back to how it was before the edit
    fn undo(&self, project: &mut Project);
    /// Apply the edit again after an undo
    fn redo(&self, project: &mut Project);
}

/// Plays a record backwards: undo redoes it and redo undoes it.
///
/// Removal edits are the placement they reverse, wrapped in this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inverse<T>(pub T);

impl<T: Reversible> Reversible for Inverse<T> {
    fn undo(&self, project: &mut Project) {
        self.0.redo(project);
    }

    fn redo(&self, project: &mut Project) {
        self.0.undo(project);
    }
}

fn on_map(project: &mut Project, map: MapId, edit: impl FnOnce(&mut TileGrid)) {
    match project.get_map_mut(map) {
        Some(grid) => edit(grid),
        None => log::warn!("Skipping edit for missing map {}", map),
    }
}

macro_rules! impl_reversible_on_map {
    ($($ty:ty),*) => {
        $(impl Reversible for $ty {
            fn undo(&self, project: &mut Project) {
                on_map(project, self.map, |grid| <$ty>::undo(self, grid));
            }

            fn redo(&self, project: &mut Project) {
                on_map(project, self.map, |grid| <$ty>::redo(self, grid));
            }
        })*
    };
}

impl_reversible_on_map!(TileStroke, StampDelta, UnlinkDelta, NpcDelta, LayerDelta, TreeAreaDelta);

impl Reversible for AutotileEdit {
    fn undo(&self, project: &mut Project) {
        on_map(project, self.map, |grid| self.delta.undo(grid));
    }

    fn redo(&self, project: &mut Project) {
        on_map(project, self.map, |grid| self.delta.redo(grid));
    }
}

macro_rules! impl_reversible_on_project {
    ($($ty:ty),*) => {
        $(impl Reversible for $ty {
            fn undo(&self, project: &mut Project) {
                <$ty>::undo(self, project);
            }

            fn redo(&self, project: &mut Project) {
                <$ty>::redo(self, project);
            }
        })*
    };
}

impl_reversible_on_project!(LinkDelta, ResizeDelta);

/// One entry of the undo history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delta {
    Paint(TileStroke),
    Erase(TileStroke),
    Fill(TileStroke),
    Autotile(AutotileEdit),
    Trees(TreeAreaDelta),
    Stamp(StampDelta),
    Unstamp(Inverse<StampDelta>),
    Link(LinkDelta),
    Unlink(UnlinkDelta),
    Resize(ResizeDelta),
    PlaceNpc(NpcDelta),
    RemoveNpc(Inverse<NpcDelta>),
    InsertLayer(LayerDelta),
    RemoveLayer(Inverse<LayerDelta>),
}

impl Delta {
    /// Display name, as shown next to the undo/redo buttons
    pub fn name(&self) -> &'static str {
        match self {
            Delta::Paint(_) => "Pencil",
            Delta::Erase(_) => "Eraser",
            Delta::Fill(_) => "Bucket",
            Delta::Autotile(_) => "Autotile",
            Delta::Trees(_) => "TreeArea",
            Delta::Stamp(_) => "Object",
            Delta::Unstamp(_) => "RemoveObject",
            Delta::Link(_) => "Link",
            Delta::Unlink(_) => "RemoveLink",
            Delta::Resize(_) => "Resize",
            Delta::PlaceNpc(_) => "Npc",
            Delta::RemoveNpc(_) => "RemoveNpc",
            Delta::InsertLayer(_) => "Layer",
            Delta::RemoveLayer(_) => "RemoveLayer",
        }
    }

    fn record(&self) -> &dyn Reversible {
        match self {
            Delta::Paint(d) | Delta::Erase(d) | Delta::Fill(d) => d,
            Delta::Autotile(d) => d,
            Delta::Trees(d) => d,
            Delta::Stamp(d) => d,
            Delta::Unstamp(d) => d,
            Delta::Link(d) => d,
            Delta::Unlink(d) => d,
            Delta::Resize(d) => d,
            Delta::PlaceNpc(d) => d,
            Delta::RemoveNpc(d) => d,
            Delta::InsertLayer(d) => d,
            Delta::RemoveLayer(d) => d,
        }
    }
}

impl Reversible for Delta {
    fn undo(&self, project: &mut Project) {
        self.record().undo(project);
    }

    fn redo(&self, project: &mut Project) {
        self.record().redo(project);
    }
}

impl From<AutotileEdit> for Delta {
    fn from(edit: AutotileEdit) -> Self {
        Delta::Autotile(edit)
    }
}

impl From<TreeAreaDelta> for Delta {
    fn from(delta: TreeAreaDelta) -> Self {
        Delta::Trees(delta)
    }
}

impl From<StampDelta> for Delta {
    fn from(delta: StampDelta) -> Self {
        Delta::Stamp(delta)
    }
}

impl From<Inverse<StampDelta>> for Delta {
    fn from(delta: Inverse<StampDelta>) -> Self {
        Delta::Unstamp(delta)
    }
}

impl From<LinkDelta> for Delta {
    fn from(delta: LinkDelta) -> Self {
        Delta::Link(delta)
    }
}

impl From<UnlinkDelta> for Delta {
    fn from(delta: UnlinkDelta) -> Self {
        Delta::Unlink(delta)
    }
}

impl From<ResizeDelta> for Delta {
    fn from(delta: ResizeDelta) -> Self {
        Delta::Resize(delta)
    }
}

impl From<NpcDelta> for Delta {
    fn from(delta: NpcDelta) -> Self {
        Delta::PlaceNpc(delta)
    }
}

impl From<Inverse<NpcDelta>> for Delta {
    fn from(delta: Inverse<NpcDelta>) -> Self {
        Delta::RemoveNpc(delta)
    }
}

impl From<LayerDelta> for Delta {
    fn from(delta: LayerDelta) -> Self {
        Delta::InsertLayer(delta)
    }
}

impl From<Inverse<LayerDelta>> for Delta {
    fn from(delta: Inverse<LayerDelta>) -> Self {
        Delta::RemoveLayer(delta)
    }
}
