#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use broadside::{
        column_label, coord_to_string, parse_coord, CliPlayer, Knowledge, KnowledgeGrid, Player,
        TargetingEngine, TurnView, STANDARD_SHIPS,
    };
    use std::io::Cursor;

    fn player_with(input: &str) -> CliPlayer {
        CliPlayer::with_input(&STANDARD_SHIPS, Box::new(Cursor::new(input.to_string())))
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("b7"), Some((6, 1)));
        assert_eq!(parse_coord(" J10 "), Some((9, 9)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("7B"), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn test_coord_to_string_matches_parse() {
        assert_eq!(coord_to_string(6, 1), "B7");
        assert_eq!(parse_coord(&coord_to_string(9, 9)), Some((9, 9)));
    }

    #[test]
    fn test_columns_past_z_have_no_letter() {
        assert_eq!(column_label(0), Some('A'));
        assert_eq!(column_label(25), Some('Z'));
        assert_eq!(column_label(26), None);
        assert_eq!(column_label(300), None);
        assert_eq!(coord_to_string(0, 300), "?1");
    }

    #[test]
    fn test_cli_player_reads_coordinate() {
        let enemy = KnowledgeGrid::new(10);
        let own = KnowledgeGrid::new(10);
        let view = TurnView {
            enemy: &enemy,
            own: &own,
            own_remaining: &STANDARD_SHIPS,
        };
        let mut player = player_with("b7\n");
        assert_eq!(player.select_target(&view), Some((6, 1)));
    }

    #[test]
    fn test_cli_player_skips_bad_input() {
        let mut enemy = KnowledgeGrid::new(10);
        enemy.set(0, 0, Knowledge::Miss).unwrap();
        let own = KnowledgeGrid::new(10);
        let view = TurnView {
            enemy: &enemy,
            own: &own,
            own_remaining: &STANDARD_SHIPS,
        };
        let mut player = player_with("zz\nA1\nK1\nC3\n");
        assert_eq!(player.select_target(&view), Some((2, 2)));
    }

    #[test]
    fn test_cli_player_accepts_suggestion() {
        let enemy = KnowledgeGrid::new(10);
        let own = KnowledgeGrid::new(10);
        let view = TurnView {
            enemy: &enemy,
            own: &own,
            own_remaining: &STANDARD_SHIPS,
        };
        let suggestion = TargetingEngine::standard().choose_shot(&enemy, &own, &STANDARD_SHIPS);
        let mut player = player_with("\n");
        assert_eq!(player.select_target(&view), Some(suggestion));
    }

    #[test]
    fn test_cli_player_quit_and_eof() {
        let enemy = KnowledgeGrid::new(10);
        let own = KnowledgeGrid::new(10);
        let view = TurnView {
            enemy: &enemy,
            own: &own,
            own_remaining: &STANDARD_SHIPS,
        };
        assert_eq!(player_with("q\n").select_target(&view), None);
        assert_eq!(player_with("").select_target(&view), None);
    }
}
