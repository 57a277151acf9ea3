use pok_map_core::{Anchor, Entry, Exit, MapId, NpcInfo, PlacedObject, TileCell, TileGrid};

const ANCHORS: [Anchor; 4] = [
    Anchor::TopLeft,
    Anchor::TopRight,
    Anchor::BottomLeft,
    Anchor::BottomRight,
];

fn populated() -> TileGrid {
    let mut grid = TileGrid::new("Route 3", 7, 5);
    grid.append_layer();
    for i in (0..grid.cell_count()).step_by(3) {
        grid.set_cell(0, i, TileCell::new(i as u32, 1));
        grid.set_collision(1, i, true);
    }

    let target = MapId::new();
    for (id, (x, y)) in [(6, 0), (0, 4), (3, 2), (6, 4), (1, 1)].into_iter().enumerate() {
        let id = id as u32;
        grid.entries.push(Entry { id, x, y, z: 0 });
        grid.exits.push(Exit {
            target,
            id,
            x: 6 - x,
            y: 4 - y,
            z: 1,
        });
    }
    grid.placed_objects.push(PlacedObject {
        object: 0,
        x: 5,
        y: 3,
        depth: 1,
        width: 2,
        height: 2,
    });
    grid.npcs.push(NpcInfo::new("kid.png", "kid.txt", 0, 0, 0));
    grid
}

/// Put a grid back the way it was before `resize(dw, dh, anchor)` using only
/// what the resize reported
fn reverse(grid: &mut TileGrid, dw: i32, dh: i32, anchor: Anchor, outcome: pok_map_core::ResizeOutcome) {
    assert!(grid.resize(-dw, -dh, anchor).is_lossless());
    for (depth, index, state) in outcome.cropped {
        grid.set_cell_state(depth, index, state);
    }
    outcome.exits.restore_into(&mut grid.exits);
    outcome.entries.restore_into(&mut grid.entries);
    outcome.placed_objects.restore_into(&mut grid.placed_objects);
    outcome.npcs.restore_into(&mut grid.npcs);
}

#[test]
fn test_every_shrink_is_reversible() {
    for anchor in ANCHORS {
        for dw in -6..=0 {
            for dh in -4..=0 {
                let mut grid = populated();
                let original = grid.clone();

                let outcome = grid.resize(dw, dh, anchor);
                grid.check_invariants();
                reverse(&mut grid, dw, dh, anchor, outcome);

                assert_eq!(grid, original, "{anchor:?} by ({dw}, {dh})");
            }
        }
    }
}

#[test]
fn test_grow_then_shrink_is_identity() {
    for anchor in ANCHORS {
        let mut grid = populated();
        let original = grid.clone();

        assert!(grid.resize(2, 3, anchor).is_lossless());
        assert!(grid.resize(-2, -3, anchor).is_lossless());
        assert_eq!(grid, original, "{anchor:?}");
    }
}

#[test]
fn test_surviving_records_keep_relative_order() {
    let mut grid = populated();
    grid.resize(-3, 0, Anchor::TopRight);

    let ids: Vec<u32> = grid.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![0, 2, 3]);
    assert_eq!(grid.entries[0].x, 3);
    assert!(grid.npcs.is_empty());
}
