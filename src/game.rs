//! Headless game flow: human side against the targeting engine.

use rand::Rng;

use crate::{
    ai::TargetingEngine,
    board::Board,
    common::{BoardError, GuessResult, ShotOutcome},
    config::GameConfig,
    player::{Player, TurnView},
};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Ready,
    PlayerTurn,
    AiTurn,
    GameOver,
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Ai,
}

/// A resolved shot and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Owns both boards and the computer opponent; enforces turn order.
///
/// Whoever hits shoots again; a miss hands the turn over.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    player_board: Board,
    ai_board: Board,
    ai: TargetingEngine,
    phase: Phase,
    winner: Option<Side>,
    last_player_shot: Option<(usize, usize)>,
    last_ai_shot: Option<(usize, usize)>,
    player_shots: usize,
    ai_shots: usize,
    message: &'static str,
}

impl Game {
    /// Set up both fleets at random and wait in [`Phase::Ready`].
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let mut game = Game {
            player_board: Board::new(config.size),
            ai_board: Board::new(config.size),
            ai: TargetingEngine::new(&config.ships),
            config,
            phase: Phase::Ready,
            winner: None,
            last_player_shot: None,
            last_ai_shot: None,
            player_shots: 0,
            ai_shots: 0,
            message: "",
        };
        game.reset(rng)?;
        Ok(game)
    }

    /// Fresh fleets, fresh AI, back to [`Phase::Ready`].
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.place_fleets(rng)?;
        self.phase = Phase::Ready;
        self.winner = None;
        self.last_player_shot = None;
        self.last_ai_shot = None;
        self.player_shots = 0;
        self.ai_shots = 0;
        self.message = "Ready. Start the game or reroll the fleets.";
        Ok(())
    }

    /// Re-place both fleets. Only allowed before the game starts.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, BoardError> {
        if self.phase != Phase::Ready {
            return Ok(false);
        }
        self.place_fleets(rng)?;
        Ok(true)
    }

    fn place_fleets<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.player_board.random_place_all(&self.config.ships, rng)?;
        self.ai_board.random_place_all(&self.config.ships, rng)?;
        self.ai = TargetingEngine::new(&self.config.ships);
        Ok(())
    }

    /// Ready -> player's turn. Returns `false` in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::PlayerTurn;
        self.message = "Your turn.";
        log::info!("game started");
        true
    }

    /// Fire at the AI's board. `None` if it is not the player's turn or the
    /// cell is off the board or already resolved.
    pub fn player_shot(&mut self, row: usize, col: usize) -> Option<ShotReport> {
        if self.phase != Phase::PlayerTurn || !self.ai_board.is_valid_shot(row, col) {
            return None;
        }
        let outcome = self.ai_board.receive_shot(row, col);
        self.player_shots += 1;
        self.last_player_shot = Some((row, col));
        if let Some(len) = outcome.sunk_length() {
            log::info!("player sank a ship of length {}", len);
            self.ai.notify_sunk(len);
        }
        self.after_shot(Side::Player, &outcome);
        Some(ShotReport { row, col, outcome })
    }

    /// Let the engine fire at the player's board. `None` unless it is the AI's turn.
    pub fn ai_shot(&mut self) -> Option<ShotReport> {
        if self.phase != Phase::AiTurn {
            return None;
        }
        let (row, col) = self.ai.choose_shot(
            &self.player_board.knowledge_view(),
            &self.ai_board.knowledge_view(),
            &self.ai_board.remaining_lengths(),
        );
        let outcome = self.player_board.receive_shot(row, col);
        self.ai_shots += 1;
        self.last_ai_shot = Some((row, col));
        if let Some(len) = outcome.sunk_length() {
            log::info!("AI sank a ship of length {}", len);
        }
        self.after_shot(Side::Ai, &outcome);
        Some(ShotReport { row, col, outcome })
    }

    /// Ask `player` for a target and fire it. `None` if the player quit, it
    /// is not the player's turn, or the chosen cell is not a valid shot.
    pub fn player_turn_with<P: Player + ?Sized>(&mut self, player: &mut P) -> Option<ShotReport> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }
        let enemy = self.ai_board.knowledge_view();
        let own = self.player_board.knowledge_view();
        let own_remaining = self.player_board.remaining_lengths();
        let view = TurnView {
            enemy: &enemy,
            own: &own,
            own_remaining: &own_remaining,
        };
        let (row, col) = player.select_target(&view)?;
        let report = self.player_shot(row, col)?;
        player.handle_guess_result((row, col), report.outcome.result);
        Some(report)
    }

    fn after_shot(&mut self, shooter: Side, outcome: &ShotOutcome) {
        if outcome.game_over {
            self.phase = Phase::GameOver;
            self.winner = Some(shooter);
            self.message = match shooter {
                Side::Player => "You win!",
                Side::Ai => "AI wins!",
            };
            log::info!("game over, winner {:?}", shooter);
            return;
        }
        let (phase, message) = match (shooter, outcome.result) {
            (Side::Player, GuessResult::Miss) => (Phase::AiTurn, "AI thinking..."),
            (Side::Player, _) => (Phase::PlayerTurn, "Hit! You get another turn."),
            (Side::Ai, GuessResult::Miss) => (Phase::PlayerTurn, "Your turn."),
            (Side::Ai, _) => (Phase::AiTurn, "AI hit! AI gets another turn..."),
        };
        if phase != self.phase {
            log::debug!("turn passes: {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
        self.message = message;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Status line for the front end.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn ai(&self) -> &TargetingEngine {
        &self.ai
    }

    pub fn last_player_shot(&self) -> Option<(usize, usize)> {
        self.last_player_shot
    }

    pub fn last_ai_shot(&self) -> Option<(usize, usize)> {
        self.last_ai_shot
    }

    /// Shots fired by (player, AI) so far.
    pub fn shot_counts(&self) -> (usize, usize) {
        (self.player_shots, self.ai_shots)
    }
}
