//! Common types for Broadside: board errors and shot results.

/// Result of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot hit a ship segment that was not yet hit.
    Hit,
    /// Shot landed in open water, outside the board, or on an already resolved cell.
    Miss,
    /// Shot sank a ship, carrying its length.
    Sink(usize),
}

impl GuessResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessResult::Hit | GuessResult::Sink(_))
    }

    /// Length of the ship sunk by this shot, if any.
    pub fn sunk_length(&self) -> Option<usize> {
        match self {
            GuessResult::Sink(len) => Some(*len),
            _ => None,
        }
    }
}

/// What `Board::receive_shot` reports back to the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub result: GuessResult,
    /// Every ship on the board is sunk (and there was at least one).
    pub game_over: bool,
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        self.result.is_hit()
    }

    pub fn sunk_length(&self) -> Option<usize> {
        self.result.sunk_length()
    }
}

/// Errors returned by board setup and grid parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Neither random placement nor the fallback scan found room for a ship.
    PlacementImpossible { length: usize },
    /// Ship length is zero or larger than the board.
    InvalidShipLength { length: usize },
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Unrecognised character in a textual knowledge grid.
    ParseKnowledge { ch: char },
    /// Textual grid is not square.
    RaggedGrid,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::PlacementImpossible { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::InvalidShipLength { length } => {
                write!(f, "Ship length {} does not fit the board", length)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            BoardError::ParseKnowledge { ch } => {
                write!(f, "Unexpected character {:?} in knowledge grid", ch)
            }
            BoardError::RaggedGrid => write!(f, "Knowledge grid rows must form a square"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
