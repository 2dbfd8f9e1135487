use rand::Rng;
use std::collections::HashSet;

use crate::basic::{GridDim, GridPoint};

/// Occupied cells that lie on the board, duplicates and
/// out-of-bounds cells are dropped
pub fn get_occupied_cells<'a>(
    cells: impl IntoIterator<Item = &'a GridPoint>,
    grid_dim: GridDim,
) -> HashSet<GridPoint> {
    cells
        .into_iter()
        .copied()
        .filter(|cell| grid_dim.contains(*cell))
        .collect()
}

/// Uniformly random cell not in `occupied_cells`, found by redrawing
/// until a free one comes up. None if the board is full.
pub fn random_free_spot(
    occupied_cells: &HashSet<GridPoint>,
    grid_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    if occupied_cells.len() >= grid_dim.cell_count() {
        return None;
    }

    loop {
        let candidate = GridPoint {
            x: rng.gen_range(0..grid_dim.0),
            y: rng.gen_range(0..grid_dim.0),
        };
        if !occupied_cells.contains(&candidate) {
            return Some(candidate);
        }
    }
}
