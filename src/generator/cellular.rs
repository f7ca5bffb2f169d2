// src/generator/cellular.rs

//! # Cellular Automata Pass
//!
//! One synchronous smoothing step. Every cell looks at the square window of
//! half-width `R` around it in the *previous* grid, and becomes occupied when
//! the occupied share of that window reaches the threshold `U`.
//!
//! Window cells that fall outside the grid count as occupied, which pulls the
//! border toward solid and tends to seal map edges.
//!
//! The new state is written to a second buffer, so no cell ever observes a
//! neighbour that was already updated in the same pass.

use crate::generator::config::CellularParams;
use crate::map::{Cell, Grid};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one cellular automata pass and returns the new grid.
pub fn cellular_automata_step(grid: &Grid, params: &CellularParams) -> Grid {
    let width = grid.width();
    let height = grid.height();
    let mut next = vec![Cell::Empty; width * height];

    #[cfg(feature = "parallel")]
    next.par_chunks_mut(width)
        .enumerate()
        .for_each(|(x, row)| fill_row(grid, params, x, row));

    #[cfg(not(feature = "parallel"))]
    next.chunks_mut(width)
        .enumerate()
        .for_each(|(x, row)| fill_row(grid, params, x, row));

    let result = Grid::from_cells(width, height, next);
    debug!(
        "cellular pass (R={}, U={}): {} -> {} occupied",
        params.radius,
        params.threshold,
        grid.occupied_count(),
        result.occupied_count()
    );
    result
}

fn fill_row(grid: &Grid, params: &CellularParams, x: usize, row: &mut [Cell]) {
    let side = 2.0 * params.radius as f64 + 1.0;
    let total = side * side;
    for (y, cell) in row.iter_mut().enumerate() {
        let empty = window_empty_count(grid, x, y, params.radius);
        let ratio = (total - empty as f64) / total;
        *cell = Cell::from(ratio >= params.threshold);
    }
}

/// Empty cells in the window around `(x, y)`. Only the in-grid part of the
/// window is visited; every other window cell is off-grid and therefore
/// occupied, so the radius may exceed the grid by any amount.
fn window_empty_count(grid: &Grid, x: usize, y: usize, radius: usize) -> usize {
    let x_lo = x.saturating_sub(radius);
    let x_hi = x.saturating_add(radius).min(grid.height() - 1);
    let y_lo = y.saturating_sub(radius);
    let y_hi = y.saturating_add(radius).min(grid.width() - 1);

    grid.rows()
        .skip(x_lo)
        .take(x_hi - x_lo + 1)
        .map(|row| row[y_lo..=y_hi].iter().filter(|c| !c.is_occupied()).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> Grid {
        let rows: Vec<Vec<bool>> = (0..height)
            .map(|x| (0..width).map(|y| (x + y) % 2 == 0).collect())
            .collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_step_is_deterministic() {
        let grid = checkerboard(12, 7);
        let params = CellularParams::new(1, 0.5);
        let a = cellular_automata_step(&grid, &params);
        let b = cellular_automata_step(&grid, &params);
        assert_eq!(a, b);
        assert_eq!(a.width(), 12);
        assert_eq!(a.height(), 7);
    }

    #[test]
    fn test_input_grid_untouched() {
        let grid = checkerboard(5, 5);
        let before = grid.clone();
        let _ = cellular_automata_step(&grid, &CellularParams::new(2, 0.3));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_boundary_counts_as_occupied() {
        // All-empty 3x3, R=1, U=0.5.
        let grid = Grid::new(3, 3).unwrap();
        let next = cellular_automata_step(&grid, &CellularParams::new(1, 0.5));

        // Corners see 5 off-grid cells out of 9.
        for (x, y) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert!(next.is_occupied(x, y), "corner ({}, {})", x, y);
        }
        // Edge midpoints see 3/9, the centre sees 0/9.
        for (x, y) in [(0, 1), (1, 0), (1, 2), (2, 1), (1, 1)] {
            assert!(!next.is_occupied(x, y), "cell ({}, {})", x, y);
        }
        assert_eq!(next.occupied_count(), 4);
    }

    #[test]
    fn test_zero_threshold_fills_everything() {
        let mut grid = Grid::filled(6, 4).unwrap();
        let params = CellularParams::new(1, 0.0);
        for _ in 0..5 {
            grid = cellular_automata_step(&grid, &params);
            assert_eq!(grid.occupied_count(), 24);
        }
        let empty = Grid::new(6, 4).unwrap();
        assert_eq!(cellular_automata_step(&empty, &params).occupied_count(), 24);
    }

    #[test]
    fn test_threshold_above_one_clears_everything() {
        let grid = Grid::filled(6, 4).unwrap();
        let next = cellular_automata_step(&grid, &CellularParams::new(1, 1.01));
        assert_eq!(next.occupied_count(), 0);
    }

    #[test]
    fn test_zero_radius_reads_only_self() {
        let grid = checkerboard(4, 4);
        assert_eq!(cellular_automata_step(&grid, &CellularParams::new(0, 1.0)), grid);
        assert_eq!(cellular_automata_step(&grid, &CellularParams::new(0, 0.5)), grid);
    }

    #[test]
    fn test_reads_previous_state_only() {
        // Lone occupied cell in the middle of a 7x7 grid, U = 1/9: a cell
        // flips on iff its window held an occupied cell before the pass.
        let mut grid = Grid::new(7, 7).unwrap();
        grid.set(3, 3, Cell::Occupied);
        let next = cellular_automata_step(&grid, &CellularParams::new(1, 1.0 / 9.0));

        for x in 2..=4 {
            for y in 2..=4 {
                assert!(next.is_occupied(x, y), "cell ({}, {})", x, y);
            }
        }
        // Two steps away from the seed and off the border: these would flip
        // if the pass read already-updated neighbours.
        for (x, y) in [(1, 1), (1, 3), (3, 5), (5, 3), (5, 5)] {
            assert!(!next.is_occupied(x, y), "cell ({}, {})", x, y);
        }
        // Border cells always see off-grid neighbours.
        assert!(next.is_occupied(0, 3));
        assert!(next.is_occupied(6, 6));
    }

    #[test]
    fn test_radius_larger_than_grid() {
        // Window covers the whole grid plus a border of off-grid cells.
        let grid = Grid::new(3, 3).unwrap();
        let next = cellular_automata_step(&grid, &CellularParams::new(4, 0.85));
        // 81 window cells, 9 of them in-grid and empty: 72/81 > 0.85.
        assert_eq!(next.occupied_count(), 9);
        let strict = cellular_automata_step(&grid, &CellularParams::new(4, 0.9));
        assert_eq!(strict.occupied_count(), 0);
    }

    #[test]
    fn test_huge_radius_does_not_panic() {
        // Far beyond i32 and beyond a representable window area.
        let grid = Grid::new(3, 3).unwrap();
        for radius in [1usize << 32, usize::MAX] {
            let next = cellular_automata_step(&grid, &CellularParams::new(radius, 0.5));
            assert_eq!(next.occupied_count(), 9);
        }
    }
}
