//! A map: layered tile grid plus its side tables

use crate::{
    lower_above, raise_from, CellState, Entry, Exit, Layer, NpcInfo, PlacedObject, RemovedRecords,
    TextureId, TileCell,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies a grid inside an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(pub Uuid);

impl MapId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MapId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Records that sat on a removed layer, with their list positions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRecords {
    pub exits: RemovedRecords<Exit>,
    pub entries: RemovedRecords<Entry>,
    pub placed_objects: RemovedRecords<PlacedObject>,
    pub npcs: RemovedRecords<NpcInfo>,
}

impl LayerRecords {
    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
            && self.entries.is_empty()
            && self.placed_objects.is_empty()
            && self.npcs.is_empty()
    }
}

/// A multi-layer tile map
///
/// Layers are ordered bottom to top. Every layer has `width * height` cells,
/// addressed by linear index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub id: MapId,
    pub name: String,
    width: u32,
    height: u32,
    layers: Vec<Layer>,
    /// Texture names referenced by the cells' texture ids
    pub textures: Vec<String>,
    pub exits: Vec<Exit>,
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub placed_objects: Vec<PlacedObject>,
    #[serde(default)]
    pub npcs: Vec<NpcInfo>,
}

impl TileGrid {
    /// Create a grid with a single empty layer
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            id: MapId::new(),
            name: name.into(),
            width,
            height,
            layers: vec![Layer::new((width * height) as usize)],
            textures: Vec::new(),
            exits: Vec::new(),
            entries: Vec::new(),
            placed_objects: Vec::new(),
            npcs: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells per layer
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, depth: usize) -> Option<&Layer> {
        self.layers.get(depth)
    }

    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn coords(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index % self.width, index / self.width)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Linear index of the cell `(dx, dy)` away from `index`, if inside the grid
    pub fn offset(&self, index: usize, dx: i64, dy: i64) -> Option<usize> {
        let (x, y) = self.coords(index);
        let (nx, ny) = (x as i64 + dx, y as i64 + dy);
        self.contains(nx, ny)
            .then(|| self.index(nx as u32, ny as u32))
    }

    pub fn cell(&self, depth: usize, index: usize) -> Option<TileCell> {
        self.layers.get(depth)?.cell(index)
    }

    pub fn set_cell(&mut self, depth: usize, index: usize, cell: TileCell) {
        self.layers[depth].set_cell(index, cell);
    }

    pub fn collides(&self, depth: usize, index: usize) -> bool {
        self.layers
            .get(depth)
            .map(|layer| layer.collides(index))
            .unwrap_or(false)
    }

    pub fn set_collision(&mut self, depth: usize, index: usize, collision: bool) {
        self.layers[depth].set_collision(index, collision);
    }

    pub fn cell_state(&self, depth: usize, index: usize) -> Option<CellState> {
        self.layers.get(depth)?.state(index)
    }

    pub fn set_cell_state(&mut self, depth: usize, index: usize, state: CellState) {
        self.layers[depth].set_state(index, state);
    }

    /// Add an empty layer on top
    pub fn append_layer(&mut self) {
        self.layers.push(Layer::new(self.cell_count()));
    }

    /// Drop layers above `count`
    pub fn truncate_layers(&mut self, count: usize) {
        self.layers.truncate(count.max(1));
    }

    /// Insert `layer` at `depth`. Records on that layer and above move up one.
    ///
    /// Panics if `depth` is past the top or the layer has the wrong size.
    pub fn insert_layer(&mut self, depth: usize, layer: Layer) {
        assert!(depth <= self.layers.len(), "layer {depth} is past the top");
        assert_eq!(layer.len(), self.cell_count(), "inserted layer has the wrong cell count");
        self.layers.insert(depth, layer);

        raise_from(&mut self.exits, depth);
        raise_from(&mut self.entries, depth);
        raise_from(&mut self.placed_objects, depth);
        raise_from(&mut self.npcs, depth);
    }

    /// Take out layer `depth`. Records on it are removed and returned,
    /// records above it move down one.
    ///
    /// Panics if the layer does not exist or is the only one.
    pub fn remove_layer(&mut self, depth: usize) -> (Layer, LayerRecords) {
        assert!(self.layers.len() > 1, "cannot remove the only layer");
        let layer = self.layers.remove(depth);
        let records = LayerRecords {
            exits: lower_above(&mut self.exits, depth),
            entries: lower_above(&mut self.entries, depth),
            placed_objects: lower_above(&mut self.placed_objects, depth),
            npcs: lower_above(&mut self.npcs, depth),
        };
        log::trace!("removed layer {} of {}", depth, self.name);
        (layer, records)
    }

    /// Put back what [`remove_layer`](Self::remove_layer) took out, once the
    /// layer itself is back in place
    pub fn restore_layer_records(&mut self, records: &LayerRecords) {
        records.exits.restore_into(&mut self.exits);
        records.entries.restore_into(&mut self.entries);
        records.placed_objects.restore_into(&mut self.placed_objects);
        records.npcs.restore_into(&mut self.npcs);
    }

    /// Replace every layer and the dimensions at once
    pub(crate) fn replace_layers(&mut self, width: u32, height: u32, layers: Vec<Layer>) {
        self.width = width;
        self.height = height;
        self.layers = layers;
        self.check_invariants();
    }

    /// Texture id for `name`, appending it to the table if missing.
    /// The flag is true when the table grew.
    pub fn ensure_texture(&mut self, name: &str) -> (TextureId, bool) {
        if let Some(pos) = self.textures.iter().position(|t| t == name) {
            return (pos as TextureId, false);
        }
        self.textures.push(name.to_string());
        ((self.textures.len() - 1) as TextureId, true)
    }

    pub fn exit_at(&self, x: u32, y: u32, z: usize) -> Option<usize> {
        self.exits.iter().position(|e| e.is_at(x, y, z))
    }

    pub fn entry_at(&self, x: u32, y: u32, z: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.is_at(x, y, z))
    }

    pub fn entry_with_id(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Smallest id not used by any entry of this grid
    pub fn next_entry_id(&self) -> u32 {
        (0..)
            .find(|id| self.entry_with_id(*id).is_none())
            .unwrap_or_default()
    }

    pub fn has_portal_at(&self, x: u32, y: u32, z: usize) -> bool {
        self.exit_at(x, y, z).is_some() || self.entry_at(x, y, z).is_some()
    }

    /// Index of the placed object whose footprint covers `(x, y)`
    pub fn placed_object_at(&self, x: u32, y: u32) -> Option<usize> {
        self.placed_objects.iter().position(|p| p.contains(x, y))
    }

    pub fn npc_at(&self, x: u32, y: u32) -> Option<usize> {
        self.npcs.iter().position(|n| n.x == x && n.y == y)
    }

    /// Panics if any layer has the wrong size or inconsistent arrays
    pub fn check_invariants(&self) {
        let size = self.cell_count();
        for (depth, layer) in self.layers.iter().enumerate() {
            layer.assert_consistent();
            assert_eq!(layer.len(), size, "layer {depth} has the wrong cell count");
        }
    }
}
