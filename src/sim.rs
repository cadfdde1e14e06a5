//! Seeded AI-vs-AI games.

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    common::BoardError,
    config::GameConfig,
    game::{Game, Phase, Side},
    player_ai::AiPlayer,
};

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub seed: u64,
    /// `None` if the shot limit ran out first.
    pub winner: Option<Side>,
    pub player_shots: usize,
    pub ai_shots: usize,
}

/// Play a full game where the player side is also an [`AiPlayer`].
/// Stops after `max_shots` shots in total.
pub fn run_simulation(
    config: GameConfig,
    seed: u64,
    max_shots: usize,
) -> Result<SimSummary, BoardError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = AiPlayer::new(&config.ships);
    let mut game = Game::new(config, &mut rng)?;
    game.start();

    let mut shots = 0;
    while shots < max_shots {
        let fired = match game.phase() {
            Phase::PlayerTurn => game.player_turn_with(&mut player).is_some(),
            Phase::AiTurn => game.ai_shot().is_some(),
            Phase::Ready | Phase::GameOver => break,
        };
        if !fired {
            log::warn!("no shot fired in {:?}, stopping", game.phase());
            break;
        }
        shots += 1;
    }

    let (player_shots, ai_shots) = game.shot_counts();
    let winner = game.winner();
    log::info!(
        "seed {}: winner {:?} after {} player / {} AI shots",
        seed,
        winner,
        player_shots,
        ai_shots
    );
    Ok(SimSummary {
        seed,
        winner,
        player_shots,
        ai_shots,
    })
}
