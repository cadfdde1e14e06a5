use broadside::{run_simulation, Cell, Game, GameConfig, Phase, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1, 2, 3, 123] {
        let summary = run_simulation(GameConfig::default(), seed, 1000).unwrap();
        assert!(summary.winner.is_some(), "seed {} did not finish", seed);
        // a 10x10 board never needs more than 100 shots per side
        assert!(summary.player_shots >= 17 || summary.ai_shots >= 17);
        assert!(summary.player_shots <= 100);
        assert!(summary.ai_shots <= 100);
    }
}

#[test]
fn test_simulation_is_reproducible() {
    let a = run_simulation(GameConfig::default(), 77, 1000).unwrap();
    let b = run_simulation(GameConfig::default(), 77, 1000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_simulation_respects_shot_limit() {
    let summary = run_simulation(GameConfig::default(), 5, 10).unwrap();
    assert_eq!(summary.winner, None);
    assert_eq!(summary.player_shots + summary.ai_shots, 10);
}

#[test]
fn test_small_custom_fleet() {
    let config = GameConfig::new(6, vec![3, 2]);
    let summary = run_simulation(config, 11, 1000).unwrap();
    assert!(summary.winner.is_some());
}

#[test]
fn test_unplaceable_fleet_is_an_error() {
    let config = GameConfig::new(3, vec![3, 3, 3, 3]);
    assert!(run_simulation(config, 1, 10).is_err());
}

#[test]
fn test_ai_alone_finishes_player_board() {
    // player never hits back: only AI turns after the first miss
    let mut rng = SmallRng::seed_from_u64(21);
    let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
    game.start();
    let mut guard = 0;
    while game.phase() != Phase::GameOver {
        guard += 1;
        assert!(guard < 500, "game took too many turns");
        match game.phase() {
            Phase::PlayerTurn => {
                // waste the turn on open water
                let board = game.ai_board();
                let water = (0..100)
                    .map(|i| (i / 10, i % 10))
                    .find(|&(r, c)| board.cell(r, c) == Some(Cell::Empty));
                match water {
                    Some((r, c)) => {
                        game.player_shot(r, c);
                    }
                    None => break,
                }
            }
            Phase::AiTurn => {
                game.ai_shot();
            }
            _ => break,
        }
    }
    assert_eq!(game.winner(), Some(Side::Ai));
    assert!(game.player_board().all_ships_sunk());
}
