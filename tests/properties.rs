#![cfg(not(target_arch = "wasm32"))]

use othello::{Board, Cell, Color, Coord, Searcher, evaluate};
use proptest::prelude::*;

/// Plays from the initial position, choosing each move by `picks[i] % legal.len()`.
/// Returns every position reached together with the side to move there.
fn playout(picks: &[u8]) -> Vec<(Board, Color)> {
    let mut board = Board::new();
    let mut color = Color::Black;
    let mut positions = vec![(board, color)];

    for &pick in picks {
        if board.is_terminal() {
            break;
        }
        if !board.has_any_legal_move(color) {
            color = !color;
        }
        let moves = board.legal_moves(color);
        let mv = moves[pick as usize % moves.len()];
        board = board.apply_move(mv, color);
        color = !color;
        positions.push((board, color));
    }

    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn make_then_unmake_restores_exact_board(picks in prop::collection::vec(any::<u8>(), 0..60)) {
        for (board, color) in playout(&picks) {
            for mv in board.legal_moves(color) {
                let mut working = board;
                let flips = working.make_move(mv, color);
                prop_assert_eq!(working, board.apply_move(mv, color));
                working.unmake_move(mv, color, flips);
                prop_assert_eq!(working, board);
            }
        }
    }

    #[test]
    fn move_adds_one_disc_and_transfers_flips(picks in prop::collection::vec(any::<u8>(), 0..60)) {
        for (board, color) in playout(&picks) {
            for mv in board.legal_moves(color) {
                let mut next = board;
                let flips = next.make_move(mv, color);
                let flipped = flips.len() as u8;

                prop_assert!(flipped >= 1);
                prop_assert_eq!(next.count(color), board.count(color) + 1 + flipped);
                prop_assert_eq!(next.count(!color), board.count(!color) - flipped);
                prop_assert_eq!(next.empty_count(), board.empty_count() - 1);
                for coord in flips.coords() {
                    prop_assert_eq!(board.cell(coord), Cell::from(!color));
                    prop_assert_eq!(next.cell(coord), Cell::from(color));
                }
            }
        }
    }

    #[test]
    fn occupied_squares_are_never_legal(picks in prop::collection::vec(any::<u8>(), 0..60)) {
        for (board, _) in playout(&picks) {
            let (white, black) = board.tally();
            prop_assert!((4..=64).contains(&(white + black)));
            for coord in Coord::all().filter(|&c| board.cell(c) != Cell::Empty) {
                prop_assert!(!board.is_legal(coord, Color::Black));
                prop_assert!(!board.is_legal(coord, Color::White));
            }
        }
    }

    #[test]
    fn search_is_deterministic(picks in prop::collection::vec(any::<u8>(), 0..40)) {
        let positions = playout(&picks);
        let (board, color) = positions[positions.len() - 1];

        let first = Searcher::new(color).search(&board, 2, color);
        let second = Searcher::new(color).search(&board, 2, color);
        prop_assert_eq!(first, second);

        match first.best_move {
            Some(mv) => prop_assert!(board.is_legal(mv, color)),
            None => prop_assert!(board.is_terminal() || !board.has_any_legal_move(color)),
        }

        let leaf = Searcher::new(color).search(&board, 0, color);
        prop_assert_eq!(leaf.score, evaluate(&board, color));
        prop_assert_eq!(leaf.best_move, None);
    }
}
