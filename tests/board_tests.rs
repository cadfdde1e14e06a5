use broadside::{Board, BoardError, Cell, GuessResult, Knowledge, STANDARD_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_ship_occupies_region() {
    let mut board = Board::new(10);
    assert!(board.can_place(2, 3, 4, true));
    assert!(board.place_ship(2, 3, 4, true));
    assert!(!board.can_place(2, 3, 4, true));
    for c in 3..7 {
        assert_eq!(board.cell(2, c), Some(Cell::Ship));
    }
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ships()[0].cells(), &[(2, 3), (2, 4), (2, 5), (2, 6)]);
    assert_eq!(board.total_ship_cells(), 4);
}

#[test]
fn test_place_ship_rejects_overlap_and_bounds() {
    let mut board = Board::new(10);
    assert!(board.place_ship(0, 0, 5, false));
    let before = board.clone();

    // crosses the carrier at (2, 0)
    assert!(!board.place_ship(2, 0, 3, true));
    // runs off the right edge
    assert!(!board.place_ship(5, 8, 3, true));
    // runs off the bottom edge
    assert!(!board.place_ship(8, 5, 3, false));
    // origin outside the board
    assert!(!board.place_ship(10, 0, 1, true));
    // zero-length ships are never placed
    assert!(!board.place_ship(5, 5, 0, true));

    assert_eq!(board, before);
}

#[test]
fn test_huge_coordinates_are_out_of_bounds() {
    let mut board = Board::new(10);
    assert!(!board.can_place(0, usize::MAX, 2, true));
    assert!(!board.can_place(usize::MAX, 0, 2, false));
    assert!(!board.place_ship(usize::MAX - 1, 0, 3, false));
    assert!(!board.place_ship(0, 0, usize::MAX, true));
    assert!(board.ships().is_empty());
    assert_eq!(board.total_ship_cells(), 0);
}

#[test]
fn test_receive_shot_hit_sink_and_game_over() {
    let mut board = Board::new(10);
    board.place_ship(0, 0, 2, true);
    board.place_ship(5, 5, 3, false);

    let first = board.receive_shot(0, 0);
    assert_eq!(first.result, GuessResult::Hit);
    assert!(!first.game_over);

    let sink = board.receive_shot(0, 1);
    assert_eq!(sink.result, GuessResult::Sink(2));
    assert_eq!(sink.sunk_length(), Some(2));
    assert!(!sink.game_over);

    // repeating a resolved shot reports a plain miss and changes nothing
    let again = board.receive_shot(0, 1);
    assert_eq!(again.result, GuessResult::Miss);
    assert_eq!(board.ships()[0].hits(), 2);

    let miss = board.receive_shot(9, 9);
    assert_eq!(miss.result, GuessResult::Miss);
    assert_eq!(board.cell(9, 9), Some(Cell::Miss));

    board.receive_shot(5, 5);
    board.receive_shot(6, 5);
    let last = board.receive_shot(7, 5);
    assert_eq!(last.result, GuessResult::Sink(3));
    assert!(last.game_over);
    assert!(board.all_ships_sunk());
}

#[test]
fn test_out_of_bounds_shot_is_noop() {
    let mut board = Board::new(10);
    board.place_ship(0, 0, 2, true);
    let before = board.clone();
    let outcome = board.receive_shot(10, 3);
    assert_eq!(outcome.result, GuessResult::Miss);
    assert!(!outcome.game_over);
    assert_eq!(board, before);
    assert!(!board.is_valid_shot(3, 10));
}

#[test]
fn test_empty_board_is_never_over() {
    let mut board = Board::new(4);
    assert!(!board.all_ships_sunk());
    let outcome = board.receive_shot(1, 1);
    assert!(!outcome.game_over);
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_is_valid_shot_tracks_resolution() {
    let mut board = Board::new(5);
    board.place_ship(1, 1, 2, true);
    assert!(board.is_valid_shot(1, 1));
    assert!(board.is_valid_shot(0, 0));
    board.receive_shot(1, 1);
    board.receive_shot(0, 0);
    assert!(!board.is_valid_shot(1, 1));
    assert!(!board.is_valid_shot(0, 0));
    assert!(board.is_valid_shot(1, 2));
}

#[test]
fn test_knowledge_view_hides_ships() {
    let mut board = Board::new(5);
    board.place_ship(0, 0, 3, true);
    board.receive_shot(0, 1);
    board.receive_shot(4, 4);

    let view = board.knowledge_view();
    assert_eq!(view.get(0, 0), Some(Knowledge::Unknown));
    assert_eq!(view.get(0, 1), Some(Knowledge::Hit));
    assert_eq!(view.get(0, 2), Some(Knowledge::Unknown));
    assert_eq!(view.get(4, 4), Some(Knowledge::Miss));
    assert_eq!(view.unknown_cells().count(), 23);
}

#[test]
fn test_random_place_all_standard_fleet() {
    let mut board = Board::new(10);
    let mut rng = SmallRng::seed_from_u64(42);
    board.random_place_all(&STANDARD_SHIPS, &mut rng).unwrap();

    let lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, STANDARD_SHIPS.to_vec());
    assert_eq!(board.total_ship_cells(), 17);

    let occupied = (0..10)
        .flat_map(|r| (0..10).map(move |c| (r, c)))
        .filter(|&(r, c)| board.cell(r, c) == Some(Cell::Ship))
        .count();
    assert_eq!(occupied, 17, "ships must not overlap");
}

#[test]
fn test_random_place_all_clears_previous_layout() {
    let mut board = Board::new(10);
    let mut rng = SmallRng::seed_from_u64(7);
    board.random_place_all(&STANDARD_SHIPS, &mut rng).unwrap();
    board.receive_shot(0, 0);
    board.random_place_all(&[2], &mut rng).unwrap();
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.total_ship_cells(), 2);
    assert!(board.is_valid_shot(0, 0));
}

#[test]
fn test_random_place_all_is_reproducible() {
    let mut a = Board::new(10);
    let mut b = Board::new(10);
    a.random_place_all(&STANDARD_SHIPS, &mut SmallRng::seed_from_u64(99))
        .unwrap();
    b.random_place_all(&STANDARD_SHIPS, &mut SmallRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_place_all_fills_tight_board() {
    // three length-3 ships exactly tile a 3x3 board
    let mut board = Board::new(3);
    let mut rng = SmallRng::seed_from_u64(1);
    board.random_place_all(&[3, 3, 3], &mut rng).unwrap();
    assert_eq!(board.total_ship_cells(), 9);
}

#[test]
fn test_random_place_all_impossible() {
    let mut board = Board::new(3);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_place_all(&[3, 3, 3, 3], &mut rng).unwrap_err(),
        BoardError::PlacementImpossible { length: 3 }
    );
    assert_eq!(
        board.random_place_all(&[4], &mut rng).unwrap_err(),
        BoardError::InvalidShipLength { length: 4 }
    );
}

#[test]
fn test_remaining_lengths_drop_sunk_ships() {
    let mut board = Board::new(6);
    board.place_ship(0, 0, 3, true);
    board.place_ship(2, 0, 2, true);
    assert_eq!(board.remaining_lengths(), vec![3, 2]);
    board.receive_shot(2, 0);
    board.receive_shot(2, 1);
    assert_eq!(board.remaining_lengths(), vec![3]);
}
