use serde::Serialize;

use crate::error::MapError;

/// A grid coordinate. `x` is the column, `y` the row (row 0 is drawn at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Grid structure for storing obstacle flags
/// Cell values: 0=free, 1=obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells set to free (0)
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![0; (rows.max(0) * cols.max(0)) as usize],
        }
    }

    /// Build a grid from parsed rows. Every row must have the width of the first one
    /// and only hold 0 or 1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MapError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&v| v > 1) {
                return Err(MapError::BadCellValue {
                    row: y,
                    col: x,
                    value: row[x],
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Grid {
            rows: rows.len() as i32,
            cols: cols as i32,
            cells,
        })
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    /// Check if a cell is an obstacle. Out of bounds is considered blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.get_cell(cell) == 1
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.x + cell.y * self.cols) as usize
    }

    /// Get cell value, out of bounds is treated as an obstacle
    pub fn get_cell(&self, cell: Cell) -> u8 {
        if !self.in_bounds(cell) {
            return 1;
        }
        self.cells[self.index(cell)]
    }

    /// Set cell value. Writes outside the grid are ignored.
    pub fn set_cell(&mut self, cell: Cell, blocked: bool) {
        if self.in_bounds(cell) {
            let id = self.index(cell);
            self.cells[id] = blocked as u8;
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Iterate over every cell in row-major order along with its obstacle flag
    pub fn iter(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols).map(move |x| {
                let cell = Cell::new(x, y);
                (cell, self.is_blocked(cell))
            })
        })
    }
}
