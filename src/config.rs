//! Game constants and the runtime game configuration.

use alloc::vec::Vec;

pub const GRID_SIZE: usize = 10;

/// Carrier, Battleship, Cruiser, Submarine, Destroyer.
pub const STANDARD_SHIPS: [usize; 5] = [5, 4, 3, 3, 2];

/// Random placement tries per ship before the deterministic scan kicks in.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Heat added to an unknown cell for each confirmed hit next to it.
pub const ADJACENCY_BONUS: u32 = 3;

/// Multiplier applied to odd-parity cells while hunting.
pub const PARITY_FACTOR: f64 = 0.25;

/// Number of heat leaders considered when no hit cluster is open.
pub const HUNT_CANDIDATES: usize = 8;

/// Widest board the terminal front end can label with the letters `A`-`Z`.
pub const MAX_LABELLED_SIZE: usize = 26;

/// Board dimensions and fleet used to set up a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub ships: Vec<usize>,
}

impl GameConfig {
    pub fn new(size: usize, ships: Vec<usize>) -> Self {
        Self { size, ships }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            ships: STANDARD_SHIPS.to_vec(),
        }
    }
}
