use std::ops::Not;

use serde::{Deserialize, Serialize};

pub(crate) const BOARD_SIZE: usize = 8;
pub(crate) const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Disc color, also used as player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate. Components outside `0..8` are representable but off-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major square index (0..=63). Only meaningful for on-board coordinates.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Every on-board coordinate in row-major order.
    pub fn all() -> Coords {
        Coords { next: 0 }
    }

    /// Steps one square in direction `(dr, dc)`, or `None` when leaving the board.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Lazy row-major walk over the 64 board coordinates.
#[derive(Debug, Clone)]
pub struct Coords {
    next: usize,
}

impl Iterator for Coords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= NUM_SQUARES {
            return None;
        }
        let coord = Coord::from_index(self.next);
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SQUARES.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Coords {}

/// A coordinate paired with the color placing there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub coord: Coord,
    pub color: Color,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Color,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// `true` when the previous action was a pass.
    pub is_pass: bool,
    /// Squares flipped by the previous move. Empty after a pass.
    pub flipped: Vec<Coord>,
    pub last_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn from_counts(white_count: u8, black_count: u8) -> Self {
        let winner = if white_count > black_count {
            Winner::White
        } else if black_count > white_count {
            Winner::Black
        } else {
            Winner::Draw
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }
}
