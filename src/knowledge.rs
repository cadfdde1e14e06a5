//! Attacker's view of a board: only shot results, never ship positions.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// What an attacker knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Knowledge {
    Unknown,
    Hit,
    Miss,
}

impl Knowledge {
    pub fn symbol(&self) -> char {
        match self {
            Knowledge::Unknown => '.',
            Knowledge::Hit => 'X',
            Knowledge::Miss => 'o',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' | '?' => Some(Knowledge::Unknown),
            'X' | 'x' => Some(Knowledge::Hit),
            'o' | 'O' => Some(Knowledge::Miss),
            _ => None,
        }
    }
}

/// Square grid of [`Knowledge`] values stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeGrid {
    size: usize,
    cells: Vec<Knowledge>,
}

impl KnowledgeGrid {
    /// All-unknown grid.
    pub fn new(size: usize) -> Self {
        Self::filled(size, Knowledge::Unknown)
    }

    pub fn filled(size: usize, value: Knowledge) -> Self {
        KnowledgeGrid {
            size,
            cells: alloc::vec![value; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Value at (row, col); `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Knowledge> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: Knowledge) -> Result<(), BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    /// Write a cell whose coordinates come from a grid of the same size.
    pub(crate) fn set_in_bounds(&mut self, row: usize, col: usize, value: Knowledge) {
        debug_assert!(self.in_bounds(row, col));
        self.cells[row * self.size + col] = value;
    }

    pub fn is_unknown(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Knowledge::Unknown)
    }

    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Knowledge::Hit)
    }

    pub fn is_miss(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Knowledge::Miss)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Knowledge)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| ((i / size, i % size), k))
    }

    /// Coordinates of unknown cells in row-major order.
    pub fn unknown_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(|(_, k)| *k == Knowledge::Unknown)
            .map(|(pos, _)| pos)
    }

    pub fn any_hit(&self) -> bool {
        self.cells.contains(&Knowledge::Hit)
    }

    /// In-bounds orthogonal neighbours of (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        orthogonal_neighbors(self.size, row, col)
    }
}

/// In-bounds orthogonal neighbours of (row, col) on a `size`×`size` grid,
/// ordered down, up, right, left.
pub(crate) fn orthogonal_neighbors(
    size: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let down = (row + 1 < size).then(|| (row + 1, col));
    let up = row.checked_sub(1).map(|r| (r, col));
    let right = (col + 1 < size).then(|| (row, col + 1));
    let left = col.checked_sub(1).map(|c| (row, c));
    [down, up, right, left].into_iter().flatten()
}

/// Parses rows of `.` (unknown), `X` (hit) and `o` (miss). Blank lines and
/// whitespace inside a row are ignored.
impl FromStr for KnowledgeGrid {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Knowledge>> = Vec::new();
        for line in s.lines() {
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| Knowledge::from_symbol(ch).ok_or(BoardError::ParseKnowledge { ch }))
                .collect::<Result<Vec<_>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return Err(BoardError::RaggedGrid);
        }
        Ok(KnowledgeGrid {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for KnowledgeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{}", self.cells[r * self.size + c].symbol())?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for KnowledgeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KnowledgeGrid<{}>:", self.size)?;
        writeln!(f, "{}", self)
    }
}
