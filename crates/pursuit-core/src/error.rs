use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Position, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid must have at least one row")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
    #[error("expected {size}x{size} cells, found {found}")]
    CellCount { size: usize, found: usize },
    #[error("unknown cell glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}
