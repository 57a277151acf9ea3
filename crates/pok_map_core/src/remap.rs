//! List-position preserving removal for records that live on grid cells
//!
//! When a resize pushes records off the grid they are taken out of their
//! list together with the index they had. Putting them back in ascending
//! index order, each one spliced at its own index, rebuilds the original
//! list exactly: every record ahead of it is already back in place.

use crate::{Entry, Exit, NpcInfo, PlacedObject};
use serde::{Deserialize, Serialize};

/// Something anchored at a grid cell
pub trait Located {
    fn position(&self) -> (u32, u32);
    fn set_position(&mut self, x: u32, y: u32);
}

macro_rules! impl_located {
    ($($ty:ty),*) => {
        $(impl Located for $ty {
            fn position(&self) -> (u32, u32) {
                (self.x, self.y)
            }

            fn set_position(&mut self, x: u32, y: u32) {
                self.x = x;
                self.y = y;
            }
        })*
    };
}

impl_located!(Exit, Entry, PlacedObject, NpcInfo);

/// Something that sits on one layer of a grid
pub trait Layered {
    fn depth(&self) -> usize;
    fn set_depth(&mut self, depth: usize);
}

macro_rules! impl_layered {
    ($($ty:ty => $field:ident),*) => {
        $(impl Layered for $ty {
            fn depth(&self) -> usize {
                self.$field
            }

            fn set_depth(&mut self, depth: usize) {
                self.$field = depth;
            }
        })*
    };
}

impl_layered!(Exit => z, Entry => z, NpcInfo => z, PlacedObject => depth);

/// Records taken out of a list, each with the index it occupied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedRecords<T> {
    /// Ascending by original index
    removed: Vec<(usize, T)>,
}

impl<T> Default for RemovedRecords<T> {
    fn default() -> Self {
        Self {
            removed: Vec::new(),
        }
    }
}

impl<T> RemovedRecords<T> {
    /// Take every record matching `pred` out of `list`, preserving the
    /// relative order of the rest
    pub fn extract_where(list: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> Self {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(list.len());
        for (index, record) in list.drain(..).enumerate() {
            if pred(&record) {
                removed.push((index, record));
            } else {
                kept.push(record);
            }
        }
        *list = kept;
        Self { removed }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.removed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, T)> {
        self.removed.iter()
    }
}

impl<T: Clone> RemovedRecords<T> {
    /// Splice the records back at their original indices
    pub fn restore_into(&self, list: &mut Vec<T>) {
        for (index, record) in &self.removed {
            let at = (*index).min(list.len());
            debug_assert_eq!(at, *index, "record list shorter than at removal");
            list.insert(at, record.clone());
        }
    }
}

/// Shift every record in `list` by `(dx, dy)` and take out the ones that no
/// longer fit a `width`x`height` grid. Removed records keep their
/// pre-shift position.
pub fn relocate<T: Located>(
    list: &mut Vec<T>,
    dx: i64,
    dy: i64,
    width: u32,
    height: u32,
) -> RemovedRecords<T> {
    let shifted = |record: &T| {
        let (x, y) = record.position();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        (nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64)
            .then_some((nx as u32, ny as u32))
    };

    let removed = RemovedRecords::extract_where(list, |record| shifted(record).is_none());
    for record in list.iter_mut() {
        if let Some((x, y)) = shifted(record) {
            record.set_position(x, y);
        }
    }
    removed
}

/// Take out the records on layer `depth` and move the ones above it down
/// by one, as when that layer is removed
pub fn lower_above<T: Layered>(list: &mut Vec<T>, depth: usize) -> RemovedRecords<T> {
    let removed = RemovedRecords::extract_where(list, |record| record.depth() == depth);
    for record in list.iter_mut() {
        if record.depth() > depth {
            record.set_depth(record.depth() - 1);
        }
    }
    removed
}

/// Move the records on layer `depth` and above up by one, as when a layer is
/// inserted at `depth`
pub fn raise_from<T: Layered>(list: &mut [T], depth: usize) {
    for record in list.iter_mut() {
        if record.depth() >= depth {
            record.set_depth(record.depth() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, x: u32, y: u32) -> Entry {
        Entry { id, x, y, z: 0 }
    }

    #[test]
    fn test_extract_and_restore_rebuilds_order() {
        let original: Vec<u32> = vec![10, 11, 12, 13, 14, 15];
        let mut list = original.clone();

        let removed = RemovedRecords::extract_where(&mut list, |v| v % 2 == 1 || *v == 14);
        assert_eq!(list, vec![10, 12]);
        assert_eq!(removed.len(), 4);

        removed.restore_into(&mut list);
        assert_eq!(list, original);
    }

    #[test]
    fn test_restore_leading_and_trailing_indices() {
        let original = vec!['a', 'b', 'c', 'd'];
        let mut list = original.clone();

        let removed = RemovedRecords::extract_where(&mut list, |c| *c == 'a' || *c == 'd');
        assert_eq!(list, vec!['b', 'c']);

        removed.restore_into(&mut list);
        assert_eq!(list, original);
    }

    #[test]
    fn test_relocate_shifts_and_drops() {
        let mut entries = vec![entry(0, 0, 0), entry(1, 3, 1), entry(2, 1, 2)];

        let removed = relocate(&mut entries, -1, 0, 3, 3);

        assert_eq!(entries, vec![entry(1, 2, 1), entry(2, 0, 2)]);
        assert_eq!(removed.iter().collect::<Vec<_>>(), vec![&(0, entry(0, 0, 0))]);
    }

    #[test]
    fn test_relocate_round_trip() {
        let original = vec![entry(0, 4, 0), entry(1, 0, 0), entry(2, 5, 1), entry(3, 2, 2)];
        let mut entries = original.clone();

        let removed = relocate(&mut entries, 0, 0, 4, 3);
        assert_eq!(entries.len(), 2);

        let none = relocate(&mut entries, 0, 0, 6, 3);
        assert!(none.is_empty());
        removed.restore_into(&mut entries);

        assert_eq!(entries, original);
    }

    #[test]
    fn test_lower_then_raise_round_trip() {
        let layered = |id, z| Entry { id, x: 0, y: 0, z };
        let original = vec![layered(0, 0), layered(1, 2), layered(2, 1), layered(3, 3)];
        let mut entries = original.clone();

        let removed = lower_above(&mut entries, 1);
        assert_eq!(entries, vec![layered(0, 0), layered(1, 1), layered(3, 2)]);
        assert_eq!(removed.len(), 1);

        raise_from(&mut entries, 1);
        removed.restore_into(&mut entries);
        assert_eq!(entries, original);
    }
}
