use crate::{
    ai::TargetingEngine,
    common::GuessResult,
    player::{Player, TurnView},
};

/// Player driven by the heatmap targeting engine.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    engine: TargetingEngine,
}

impl AiPlayer {
    /// AI expecting the opponent to field `ships`.
    pub fn new(ships: &[usize]) -> Self {
        Self {
            engine: TargetingEngine::new(ships),
        }
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, view: &TurnView<'_>) -> Option<(usize, usize)> {
        Some(
            self.engine
                .choose_shot(view.enemy, view.own, view.own_remaining),
        )
    }

    fn handle_guess_result(&mut self, _coord: (usize, usize), result: GuessResult) {
        if let GuessResult::Sink(len) = result {
            self.engine.notify_sunk(len);
        }
    }
}
