#[cfg(feature = "std")]
#[cfg(test)]
mod session_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tictactoe::{AiPlayer, CliPlayer, GameStatus, Mark, Player, Session};

    fn scripted(moves: &[(usize, usize)]) -> Box<dyn Player> {
        let script: String = moves
            .iter()
            .map(|(r, c)| format!("{}\n{}\n", r, c))
            .collect();
        Box::new(CliPlayer::with_input(Cursor::new(script)))
    }

    fn run(players: [Box<dyn Player>; 2], seed: u64) -> (anyhow::Result<Mark>, String) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(players);
        let mut out = Vec::new();
        let result = session.run(&mut rng, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_draw_replays_then_reports_winner() {
        // round one: X O X / X O O / O X X
        // round two: O first hits X's corner, then X takes row 0
        let x = scripted(&[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2), (0, 0), (0, 1), (0, 2)]);
        let o = scripted(&[(0, 1), (1, 1), (1, 2), (2, 0), (0, 0), (1, 0), (1, 1)]);
        let (result, out) = run([x, o], 1);

        assert_eq!(result.unwrap(), Mark::X);
        assert_eq!(out.matches("Nobody win... Play another round").count(), 1);
        assert!(out.contains("Field row=0 col=0 is not empty"));
        assert!(out.ends_with("X Win!\n"));
        // the draw announcement comes before the refused move of round two
        let draw = out.find("Nobody win").unwrap();
        let refused = out.find("is not empty").unwrap();
        assert!(draw < refused);
        // the replay opens with X on an empty board
        let after_draw = &out[draw..];
        assert!(after_draw.contains("0 * | * | *\n1 * | * | *\n2 * | * | *"));
        assert!(after_draw.contains("Player X (Human) go!"));
    }

    #[test]
    fn test_refused_move_is_reported_and_asked_again() {
        let x = scripted(&[(1, 1), (0, 0), (2, 2)]);
        let o = scripted(&[(1, 1), (0, 1), (0, 2)]);
        let (result, out) = run([x, o], 1);

        assert_eq!(result.unwrap(), Mark::X);
        assert_eq!(out.matches("Field row=1 col=1 is not empty").count(), 1);
        // O is announced for the refused move, the retry and its second turn
        assert_eq!(out.matches("Player O (Human) go!").count(), 3);
        assert_eq!(out.matches("Player X (Human) go!").count(), 3);
        assert!(!out.contains("Nobody win"));
    }

    #[test]
    fn test_human_against_ai_loses_on_the_diagonal() {
        // X: (0,0), (0,1); (0,2) is taken by O's block so (1,0) follows
        let x = scripted(&[(0, 0), (0, 1), (0, 2), (1, 0)]);
        let ai: Box<dyn Player> = Box::new(AiPlayer::new());
        let (result, out) = run([x, ai], 1);

        assert_eq!(result.unwrap(), Mark::O);
        assert!(out.contains("Player O (AI) go!"));
        assert!(out.contains("Field row=0 col=2 is not empty"));
        assert!(out.contains("2 O | * | *"));
        assert!(out.ends_with("O Win!\n"));
    }

    #[test]
    fn test_closed_input_ends_the_session() {
        let x = scripted(&[(0, 0)]);
        let o = scripted(&[(1, 1)]);
        let (result, out) = run([x, o], 1);

        assert!(result.is_err());
        assert!(!out.contains("Win!"));
    }

    #[test]
    fn test_play_round_stops_at_draw() {
        let x = scripted(&[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]);
        let o = scripted(&[(0, 1), (1, 1), (1, 2), (2, 0)]);
        let mut session = Session::new([x, o]);
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(session.play_round(&mut rng, &mut std::io::sink()).unwrap(), None);
        assert_eq!(session.engine().status(), GameStatus::Draw);
        assert_eq!(session.engine().moves_played(), 9);
        // a finished round is not played again
        assert_eq!(session.play_round(&mut rng, &mut std::io::sink()).unwrap(), None);
    }
}
