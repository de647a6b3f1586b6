use crate::board::Board;
use crate::types::Color;

/// Disc differential from `color`'s point of view.
///
/// Static and purely material: every square weighs the same, and the same
/// formula scores depth-limited leaves and finished games.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    i32::from(board.count(color)) - i32::from(board.count(!color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn initial_board_is_even() {
        let board = Board::new();

        assert_eq!(evaluate(&board, Color::Black), 0);
        assert_eq!(evaluate(&board, Color::White), 0);
    }

    #[test]
    fn differential_is_antisymmetric() {
        let board = Board::new().apply_move(Coord::new(2, 3), Color::Black);

        assert_eq!(evaluate(&board, Color::Black), 3);
        assert_eq!(evaluate(&board, Color::White), -3);
    }

    #[test]
    fn full_board_counts_every_square() {
        let board = Board::from_bitboards(u64::MAX, 0);

        assert_eq!(evaluate(&board, Color::Black), 64);
        assert_eq!(evaluate(&board, Color::White), -64);
    }
}
