#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod board;
mod common;
mod config;
mod game;
mod knowledge;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
pub mod sim;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{
    candidate_targets, estimate_opponent_counter_gain, heatmap, hit_clusters,
    placement_consistent, top_heat_candidates, Heatmap, HitCluster, TargetingEngine,
};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use knowledge::{Knowledge, KnowledgeGrid};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use sim::{run_simulation, SimSummary};
