use std::fmt;

use crate::ai::DEFAULT_SEARCH_DEPTH;
use crate::types::Color;

/// Errors returned by [`crate::game::GameInstance`] turn operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already ended.
    GameOver,
    /// The action belongs to the other side.
    NotYourTurn { expected: Color },
    /// Row or column is outside `0..8`.
    OffBoard { row: u8, col: u8 },
    /// The square is occupied or captures nothing.
    IllegalMove { row: u8, col: u8 },
    /// The side to move has nowhere to play.
    NoLegalMove,
    /// A pass was requested while a legal move exists.
    PassNotAllowed,
    /// Search depth outside `1..=DEFAULT_SEARCH_DEPTH`.
    InvalidSearchDepth { depth: u8 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "game is already over"),
            GameError::NotYourTurn { expected } => {
                write!(f, "it is not this side's turn: {expected:?} to move")
            }
            GameError::OffBoard { row, col } => {
                write!(f, "row/col out of range: row={row}, col={col}")
            }
            GameError::IllegalMove { row, col } => {
                write!(f, "illegal move: row={row}, col={col}")
            }
            GameError::NoLegalMove => write!(f, "side to move has no legal moves"),
            GameError::PassNotAllowed => write!(f, "cannot pass while a legal move exists"),
            GameError::InvalidSearchDepth { depth } => write!(
                f,
                "search depth {depth} out of range: expected 1..={DEFAULT_SEARCH_DEPTH}"
            ),
        }
    }
}

impl std::error::Error for GameError {}
