use broadside::{
    candidate_targets, estimate_opponent_counter_gain, heatmap, Board, TargetingEngine,
    STANDARD_SHIPS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Random standard fleet with `shots` random shots fired at it.
fn shot_board(seed: u64, shots: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(10);
    board.random_place_all(&STANDARD_SHIPS, &mut rng).unwrap();
    for _ in 0..shots {
        let r = rng.random_range(0..10);
        let c = rng.random_range(0..10);
        board.receive_shot(r, c);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn misses_carry_no_heat(seed in any::<u64>(), shots in 0..100usize) {
        let board = shot_board(seed, shots);
        let view = board.knowledge_view();
        let heat = heatmap(&view, &board.remaining_lengths());
        for ((r, c), _) in view.iter().filter(|(_, k)| *k == broadside::Knowledge::Miss) {
            prop_assert_eq!(heat.get(r, c), 0);
        }
    }

    #[test]
    fn choose_shot_targets_unknown_cell(
        seed in any::<u64>(),
        shots in 0..99usize,
        own_shots in 0..60usize,
    ) {
        let enemy = shot_board(seed, shots);
        let own = shot_board(seed.wrapping_add(1), own_shots);
        let enemy_view = enemy.knowledge_view();
        let engine = TargetingEngine::new(&enemy.remaining_lengths());
        if enemy_view.unknown_cells().next().is_some() {
            let (r, c) = engine.choose_shot(
                &enemy_view,
                &own.knowledge_view(),
                &own.remaining_lengths(),
            );
            prop_assert!(enemy_view.is_unknown(r, c));
        }
    }

    #[test]
    fn target_candidates_are_unknown_neighbours_of_hits(
        seed in any::<u64>(),
        shots in 0..100usize,
    ) {
        let board = shot_board(seed, shots);
        let view = board.knowledge_view();
        let candidates = candidate_targets(&view);
        for &(r, c) in &candidates {
            prop_assert!(view.is_unknown(r, c));
            prop_assert!(view.neighbors(r, c).any(|(nr, nc)| view.is_hit(nr, nc)));
        }
        if !view.any_hit() {
            prop_assert!(candidates.is_empty());
        }
    }

    #[test]
    fn counter_gain_is_a_probability(seed in any::<u64>(), shots in 0..100usize) {
        let board = shot_board(seed, shots);
        let view = board.knowledge_view();
        let gain = estimate_opponent_counter_gain(&view, &board.remaining_lengths());
        prop_assert!((0.0..=1.0).contains(&gain));
    }
}
