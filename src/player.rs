use crate::{common::GuessResult, knowledge::KnowledgeGrid};

/// What a player may look at when choosing a shot.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Our knowledge of the opponent's board.
    pub enemy: &'a KnowledgeGrid,
    /// The opponent's knowledge of our board.
    pub own: &'a KnowledgeGrid,
    /// Lengths of our ships still afloat.
    pub own_remaining: &'a [usize],
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target coordinate. `None` means the player gave up.
    fn select_target(&mut self, view: &TurnView<'_>) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: (usize, usize), _result: GuessResult) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: (usize, usize), _result: GuessResult) {}
}
