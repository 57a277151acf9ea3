//! Multi-cell object templates and their placed instances

use serde::{Deserialize, Serialize};

/// Which footprint edges of a stamped object become collidable
///
/// A cell that lies on several edges collides only if every one of those
/// edges allows it. A one-row object has no separate top edge and a
/// one-column object no separate left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Cells touching no edge
    pub interior: bool,
}

impl CollisionEdges {
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
        interior: false,
    };

    /// Solid everywhere except the top row and left column, which lets a
    /// character walk behind the object's upper-left silhouette.
    pub const BUILDING: Self = Self {
        top: false,
        bottom: true,
        left: false,
        right: true,
        interior: true,
    };

    /// Whether footprint cell `(x, y)` of a `width`x`height` object collides
    pub fn collides(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let on_top = height > 1 && y == 0;
        let on_bottom = y + 1 == height;
        let on_left = width > 1 && x == 0;
        let on_right = x + 1 == width;

        if on_top && !self.top {
            return false;
        }
        if on_bottom && !self.bottom {
            return false;
        }
        if on_left && !self.left {
            return false;
        }
        if on_right && !self.right {
            return false;
        }
        if !(on_top || on_bottom || on_left || on_right) {
            return self.interior;
        }
        true
    }
}

/// A stamp template: a rectangle of tiles cut from one texture atlas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    /// Name of the texture atlas the tiles come from
    pub texture: String,
    /// Top-left tile of the object inside the atlas, in tiles
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Tiles per atlas row
    pub atlas_columns: u32,
    /// Depth offset per footprint cell, row-major. Missing entries are 0.
    #[serde(default)]
    pub depths: Vec<usize>,
    #[serde(default)]
    pub collision: CollisionEdges,
}

impl ObjectDef {
    /// Parse an object definition from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Atlas tile drawn at footprint cell `(x, y)`
    pub fn tile_at(&self, x: u32, y: u32) -> u32 {
        (self.y + y) * self.atlas_columns + self.x + x
    }

    /// Depth offset of footprint cell `(x, y)`
    pub fn depth_at(&self, x: u32, y: u32) -> usize {
        let i = (y * self.width + x) as usize;
        self.depths.get(i).copied().unwrap_or(0)
    }

    /// Largest depth offset used by any footprint cell
    pub fn max_depth(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// Footprint cells in row-major order
    pub fn footprint(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

/// An object stamped onto a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Index into the host's object library
    pub object: usize,
    pub x: u32,
    pub y: u32,
    pub depth: usize,
    pub width: u32,
    pub height: u32,
}

impl PlacedObject {
    /// Check if `(x, y)` lies inside the footprint
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}
