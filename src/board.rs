//! Game board state: cell grid, placed ships, shot resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, GuessResult, ShotOutcome};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::knowledge::{Knowledge, KnowledgeGrid};
use crate::ship::{Orientation, Placement, Ship};

/// State of a single board cell. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Whether this cell has already been shot at.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Main board state: cells, ships in placement order, occupied cell count.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    total_ship_cells: usize,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: alloc::vec![Cell::Empty; size * size],
            ships: Vec::new(),
            total_ship_cells: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell state at (row, col); `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.grid[row * self.size + col])
        } else {
            None
        }
    }

    /// Ships in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of cells occupied by ships.
    pub fn total_ship_cells(&self) -> usize {
        self.total_ship_cells
    }

    /// Remove every ship and shot.
    pub fn clear(&mut self) {
        self.grid.iter_mut().for_each(|c| *c = Cell::Empty);
        self.ships.clear();
        self.total_ship_cells = 0;
    }

    /// True iff every cell of the ship would be on the board and currently empty.
    /// Zero-length ships are never placeable.
    pub fn can_place(&self, row: usize, col: usize, length: usize, horizontal: bool) -> bool {
        self.can_place_at(&Placement::new(
            row,
            col,
            length,
            Orientation::from_horizontal(horizontal),
        ))
    }

    fn can_place_at(&self, placement: &Placement) -> bool {
        placement.length > 0
            && placement.fits(self.size)
            && placement
                .cells()
                .all(|(r, c)| self.cell(r, c) == Some(Cell::Empty))
    }

    /// Place a ship if the region is free. Returns `false` without side
    /// effects when it is not.
    pub fn place_ship(&mut self, row: usize, col: usize, length: usize, horizontal: bool) -> bool {
        let placement = Placement::new(row, col, length, Orientation::from_horizontal(horizontal));
        if !self.can_place_at(&placement) {
            return false;
        }
        for (r, c) in placement.cells() {
            self.grid[r * self.size + c] = Cell::Ship;
        }
        self.ships.push(Ship::new(placement));
        self.total_ship_cells += length;
        true
    }

    /// Clear the board and place every ship in `lengths` order at random.
    ///
    /// Each ship gets [`MAX_PLACEMENT_ATTEMPTS`] random tries, then a
    /// left-to-right, top-to-bottom horizontal scan. Fails only if the scan
    /// also finds no room, which means the fleet does not fit the board.
    pub fn random_place_all<R: Rng + ?Sized>(
        &mut self,
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.clear();
        for &length in lengths {
            if length == 0 || length > self.size {
                return Err(BoardError::InvalidShipLength { length });
            }
            if !self.place_random(length, rng) && !self.place_first_fit(length) {
                return Err(BoardError::PlacementImpossible { length });
            }
        }
        log::debug!(
            "placed {} ships covering {} cells",
            self.ships.len(),
            self.total_ship_cells
        );
        Ok(())
    }

    fn place_random<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) -> bool {
        let span = self.size - length + 1;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let horizontal: bool = rng.random();
            let (r, c) = if horizontal {
                (rng.random_range(0..self.size), rng.random_range(0..span))
            } else {
                (rng.random_range(0..span), rng.random_range(0..self.size))
            };
            if self.place_ship(r, c, length, horizontal) {
                return true;
            }
        }
        false
    }

    fn place_first_fit(&mut self, length: usize) -> bool {
        for r in 0..self.size {
            for c in 0..=(self.size - length) {
                if self.place_ship(r, c, length, true) {
                    log::debug!("fallback scan placed length {} at ({}, {})", length, r, c);
                    return true;
                }
            }
        }
        false
    }

    /// Resolve a shot at (row, col).
    ///
    /// Out-of-bounds and already resolved cells report a miss and change
    /// nothing.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> ShotOutcome {
        let result = match self.cell(row, col) {
            Some(Cell::Ship) => {
                self.grid[row * self.size + col] = Cell::Hit;
                match self.ships.iter_mut().find(|s| s.contains(row, col)) {
                    Some(ship) => {
                        if ship.register_hit() {
                            GuessResult::Sink(ship.length())
                        } else {
                            GuessResult::Hit
                        }
                    }
                    None => GuessResult::Hit,
                }
            }
            Some(Cell::Empty) => {
                self.grid[row * self.size + col] = Cell::Miss;
                GuessResult::Miss
            }
            Some(Cell::Hit) | Some(Cell::Miss) | None => GuessResult::Miss,
        };
        ShotOutcome {
            result,
            game_over: self.all_ships_sunk(),
        }
    }

    /// In bounds and not shot at yet.
    pub fn is_valid_shot(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(c) if !c.is_resolved())
    }

    /// Returns `true` when at least one ship exists and all are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Lengths of ships still afloat, in placement order.
    pub fn remaining_lengths(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(Ship::length)
            .collect()
    }

    /// The board as seen by an attacker: hits and misses only.
    pub fn knowledge_view(&self) -> KnowledgeGrid {
        let mut view = KnowledgeGrid::new(self.size);
        for (i, cell) in self.grid.iter().enumerate() {
            let k = match cell {
                Cell::Hit => Knowledge::Hit,
                Cell::Miss => Knowledge::Miss,
                Cell::Empty | Cell::Ship => continue,
            };
            view.set_in_bounds(i / self.size, i % self.size, k);
        }
        view
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.grid[r * self.size + c] {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
