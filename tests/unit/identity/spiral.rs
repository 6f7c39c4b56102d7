use super::*;
use crate::identity::digest::digest;
use crate::identity::grid::build_grid;
use std::collections::BTreeSet;

fn coords(order: &SpiralOrder) -> Vec<(usize, usize)> {
    order.iter().map(|c| (c.row, c.col)).collect()
}

#[test]
fn three_by_three_spiral() {
    assert_eq!(
        coords(&spiral_order(3, 3)),
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
            (1, 0),
            (1, 1)
        ]
    );
}

#[test]
fn rectangular_spirals() {
    assert_eq!(
        coords(&spiral_order(2, 3)),
        vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]
    );
    assert_eq!(coords(&spiral_order(3, 1)), vec![(0, 0), (1, 0), (2, 0)]);
    assert_eq!(coords(&spiral_order(1, 3)), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn spiral_covers_every_cell_once() {
    for h in 1..=9 {
        for w in 1..=9 {
            let order = spiral_order(h, w);
            assert_eq!(order.len(), h * w);
            let unique: BTreeSet<_> = order.iter().copied().collect();
            assert_eq!(unique.len(), h * w, "{h}x{w} has duplicates");
            assert!(unique.iter().all(|c| c.row < h && c.col < w));
        }
    }
}

#[test]
fn consecutive_steps_are_neighbours() {
    let order = spiral_order(6, 5);
    for pair in order.as_slice().windows(2) {
        let dr = pair[0].row.abs_diff(pair[1].row);
        let dc = pair[0].col.abs_diff(pair[1].col);
        assert_eq!(dr + dc, 1, "{:?} -> {:?}", pair[0], pair[1]);
    }
}

#[test]
fn zero_area_is_empty() {
    assert!(spiral_order(0, 4).is_empty());
    assert!(spiral_order(4, 0).is_empty());
}

#[test]
fn ranks_invert_the_order() {
    let order = spiral_order(3, 3);
    let ranks = order.ranks();
    assert_eq!(ranks, vec![0, 1, 2, 7, 8, 3, 6, 5, 4]);
}

#[test]
fn reveal_is_monotonic_and_ends_with_the_full_grid() {
    let grid = build_grid(&digest("jncel"), 5).unwrap();
    let order = spiral_order(5, 5);
    let mut prev = BTreeSet::new();
    for step in 0..order.len() {
        let now: BTreeSet<_> = revealed_cells(&order, &grid, step).collect();
        assert!(prev.is_subset(&now));
        prev = now;
    }
    let full: BTreeSet<_> = grid.active_cells().collect();
    assert_eq!(prev, full);
}

#[test]
fn first_step_reveals_only_the_corner() {
    // jncel's top-left cell is active.
    let grid = build_grid(&digest("jncel"), 5).unwrap();
    let order = spiral_order(5, 5);
    let first: Vec<_> = revealed_cells(&order, &grid, 0).collect();
    assert_eq!(first, vec![CellCoord::new(0, 0)]);
}
