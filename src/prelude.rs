//! Commonly used types and utilities for ease of import.

pub use crate::{
    heatmap, AiPlayer, Board, Game, GameConfig, Knowledge, KnowledgeGrid, Phase, Player, Side,
    TargetingEngine,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
