//! Ship definitions and placement geometry.

use alloc::vec::Vec;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Row/column step taken from one segment to the next.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A candidate ship position: origin, length and orientation.
///
/// A placement says nothing about whether it fits a board; use
/// [`Placement::fits`] for the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Whether every segment lies on a `size`×`size` board.
    pub fn fits(&self, size: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.row < size && self.col.checked_add(self.length).is_some_and(|end| end <= size)
            }
            Orientation::Vertical => {
                self.col < size && self.row.checked_add(self.length).is_some_and(|end| end <= size)
            }
        }
    }

    /// Covered cells in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            length,
            orientation,
        } = *self;
        let (dr, dc) = orientation.step();
        (0..length).map(move |i| (row + dr * i, col + dc * i))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col - self.col < self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row - self.row < self.length
            }
        }
    }

    /// Every placement of `length` that fits a `size`×`size` board, horizontal
    /// ones first, each in row-major origin order.
    pub fn all(size: usize, length: usize) -> impl Iterator<Item = Placement> {
        Orientation::ALL.into_iter().flat_map(move |orientation| {
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (size, (size + 1).saturating_sub(length)),
                Orientation::Vertical => ((size + 1).saturating_sub(length), size),
            };
            (0..max_row).flat_map(move |row| {
                (0..max_col).map(move |col| Placement::new(row, col, length, orientation))
            })
        })
    }
}

/// A ship placed on a board, with its hit count.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// Build a ship covering the placement's cells.
    pub fn new(placement: Placement) -> Self {
        Ship {
            length: placement.length,
            cells: placement.cells().collect(),
            hits: 0,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Count a hit on one of this ship's segments.
    /// Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        self.is_sunk()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, hits: {}, cells: {:?} }}",
            self.length, self.hits, self.cells,
        )
    }
}
