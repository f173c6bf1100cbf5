use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Direction, GridError, GridParseError, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Open,
    Wall,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Open => '.',
            CellKind::Wall => '#',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | ' ' => Some(CellKind::Open),
            '#' => Some(CellKind::Wall),
            _ => None,
        }
    }
}

/// Square obstacle map.
///
/// A cell only changes kind through [`Grid::set_wall`]; searches borrow the grid immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// All-open `size x size` grid.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid must be non-empty");
        Self {
            size,
            cells: vec![CellKind::Open; size * size],
        }
    }

    pub fn with_walls<I>(size: usize, walls: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::new(size);
        for wall in walls {
            grid.set_wall(wall)?;
        }
        Ok(grid)
    }

    /// Builds a grid from row-major cells; `cells` must hold exactly `size * size` entries.
    pub fn from_cells(size: usize, cells: Vec<CellKind>) -> Result<Self, GridParseError> {
        if size == 0 {
            return Err(GridParseError::Empty);
        }
        if cells.len() != size * size {
            return Err(GridParseError::CellCount {
                size,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Parses rows of `#` (wall) and `.` (open). The grid must be square.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != size {
                return Err(GridParseError::RaggedRow { row, len, size });
            }
            for (col, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph)
                    .ok_or(GridParseError::UnknownGlyph { glyph, row, col })?;
                cells.push(kind);
            }
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let n = self.size as i64;
        let (r, c) = (pos.row as i64, pos.col as i64);
        r >= 0 && c >= 0 && r < n && c < n
    }

    /// True iff `pos` is in bounds and open. Out-of-bounds cells are never open.
    pub fn is_open(&self, pos: Position) -> bool {
        self.idx(pos)
            .map(|idx| self.cells[idx] == CellKind::Open)
            .unwrap_or(false)
    }

    pub fn kind(&self, pos: Position) -> Result<CellKind, GridError> {
        let idx = self.checked_idx(pos)?;
        Ok(self.cells[idx])
    }

    /// Turns `pos` into a wall. Occupancy is the caller's concern.
    pub fn set_wall(&mut self, pos: Position) -> Result<(), GridError> {
        let idx = self.checked_idx(pos)?;
        self.cells[idx] = CellKind::Wall;
        Ok(())
    }

    /// Open neighbors of `pos` in [`Direction::ALL`] order.
    pub fn legal_moves(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| pos.step(dir))
            .filter(|next| self.is_open(*next))
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == CellKind::Open)
            .map(|(idx, _)| self.pos_from_idx(idx))
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|k| **k == CellKind::Wall).count()
    }

    fn idx(&self, pos: Position) -> Option<usize> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        Some(pos.row as usize * self.size + pos.col as usize)
    }

    fn checked_idx(&self, pos: Position) -> Result<usize, GridError> {
        self.idx(pos).ok_or(GridError::OutOfBounds {
            pos,
            size: self.size,
        })
    }

    fn pos_from_idx(&self, idx: usize) -> Position {
        Position::new((idx / self.size) as i32, (idx % self.size) as i32)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            size: usize,
            cells: Vec<CellKind>,
        }

        let Repr { size, cells } = Repr::deserialize(deserializer)?;
        Grid::from_cells(size, cells).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for kind in row {
                write!(f, "{}", kind.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
