use thiserror::Error;

use crate::grid::Cell;

/// Errors raised while loading a map file or mutating a loaded map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("map file ended before the {0} line")]
    MissingLine(&'static str),

    #[error("line {line}: expected {expected} integers, found {found:?}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: String,
    },

    #[error("line {line}: '{value}' is not an integer")]
    BadInteger { line: usize, value: String },

    #[error("map dimensions must be positive, found {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    #[error("robot count must not be negative, found {0}")]
    NegativeRobotCount(i32),

    #[error("line {line}, column {col}: unexpected grid character {ch:?}")]
    BadGridChar { line: usize, col: usize, ch: char },

    #[error("grid row {row}, column {col}: value {value} is neither 0 nor 1")]
    BadCellValue { row: usize, col: usize, value: u8 },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("header declares a {width}x{height} map but the grid is {cols}x{rows}")]
    DimensionMismatch {
        width: i32,
        height: i32,
        cols: i32,
        rows: i32,
    },

    #[error("{what} at ({}, {}) lies outside the grid", .cell.x, .cell.y)]
    OutOfBounds { what: &'static str, cell: Cell },

    #[error("no robot with index {0}")]
    UnknownRobot(usize),
}
