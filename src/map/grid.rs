// src/map/grid.rs

use crate::error::{GenerationError, Result};
use rand::Rng;
use std::fmt;

/// Occupancy state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

impl Cell {
    pub fn is_occupied(self) -> bool {
        self == Cell::Occupied
    }

    /// The `0`/`1` value used by the digit renderer.
    pub fn as_digit(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied => 1,
        }
    }
}

impl From<bool> for Cell {
    fn from(occupied: bool) -> Self {
        if occupied {
            Cell::Occupied
        } else {
            Cell::Empty
        }
    }
}

/// A fixed-size occupancy field.
///
/// Rows are indexed by `x` (`0..height`) and columns by `y` (`0..width`).
/// Cells live in a single row-major buffer, so every row always holds exactly
/// `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid. Zero-sized grids are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(GenerationError::InvalidDimensions { width, height }),
        };
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Builds a grid from nested rows (`true` = occupied).
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, height)?;

        for (x, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GenerationError::RaggedRows {
                    row: x,
                    expected: width,
                    found: row.len(),
                });
            }
            let start = x * width;
            for (dst, &occupied) in grid.cells[start..start + width].iter_mut().zip(row) {
                *dst = Cell::from(occupied);
            }
        }
        Ok(grid)
    }

    /// Wraps a buffer produced by one of the generators.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Creates a `width x height` grid with every cell occupied.
    pub fn filled(width: usize, height: usize) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        grid.cells.fill(Cell::Occupied);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when `(x, y)` names a cell of this grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.height && (y as usize) < self.width
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(x as usize * self.width + y as usize)
        } else {
            None
        }
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_occupied)
    }

    /// Writes a cell. Out-of-range coordinates are ignored; the return value
    /// tells whether the write landed.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    /// Randomly occupies each cell with probability `fill`. Existing occupied
    /// cells are kept.
    pub fn scatter<R: Rng + ?Sized>(&mut self, fill: f64, rng: &mut R) {
        if fill <= 0.0 {
            return;
        }
        for cell in &mut self.cells {
            if rng.random::<f64>() < fill {
                *cell = Cell::Occupied;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::render::render(
            self,
            crate::utils::render::RenderStyle::Glyphs,
        ))
    }
}
