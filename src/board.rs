use std::fmt;

use crate::types::{BOARD_SIZE, Cell, Color, Coord, NUM_SQUARES};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board state represented by two bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that color occupies
/// the square. The two masks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

/// Squares flipped by one move, kept so the move can be taken back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flips(u64);

impl Flips {
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.is_on_board() && (self.0 & bit(coord.index())) != 0
    }

    /// Flipped squares in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.contains(coord))
    }
}

impl Board {
    /// Creates the initial board:
    /// white on (3,3) and (4,4), black on (3,4) and (4,3).
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw color masks. Overlapping squares are treated as black.
    #[cfg(test)]
    pub(crate) fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self {
            black: 0,
            white: 0,
        };
        for coord in Coord::all() {
            let cell = cells[coord.row as usize][coord.col as usize];
            if let Some(color) = cell.color() {
                *board.side_mut(color) |= bit(coord.index());
            }
        }
        board
    }

    /// Returns the cell at `coord`; off-board coordinates read as empty.
    pub fn cell(&self, coord: Coord) -> Cell {
        if !coord.is_on_board() {
            return Cell::Empty;
        }
        let square = bit(coord.index());
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Whether `color` may place a disc on `coord`.
    ///
    /// Fails closed: off-board and occupied squares are never legal. A square is
    /// legal when at least one direction holds a run of opponent discs capped by
    /// a disc of `color`.
    pub fn is_legal(&self, coord: Coord, color: Color) -> bool {
        if !coord.is_on_board() || self.cell(coord) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.bracket(coord, color, dr, dc) != 0)
    }

    /// Returns the board after `color` plays on `coord`.
    ///
    /// Caller contract: `self.is_legal(coord, color)` must hold.
    pub fn apply_move(&self, coord: Coord, color: Color) -> Board {
        let mut next = *self;
        next.make_move(coord, color);
        next
    }

    /// Plays `color` on `coord` in place and returns the flipped squares.
    ///
    /// Caller contract: `self.is_legal(coord, color)` must hold.
    pub fn make_move(&mut self, coord: Coord, color: Color) -> Flips {
        debug_assert!(
            self.is_legal(coord, color),
            "make_move() requires a legal move, got {coord:?} for {color:?}"
        );

        let flips = self.collect_flips(coord, color);
        *self.side_mut(color) |= bit(coord.index()) | flips;
        *self.side_mut(!color) &= !flips;
        Flips(flips)
    }

    /// Takes back a move previously made with [`Board::make_move`].
    pub fn unmake_move(&mut self, coord: Coord, color: Color, flips: Flips) {
        *self.side_mut(color) &= !(bit(coord.index()) | flips.0);
        *self.side_mut(!color) |= flips.0;
    }

    /// True iff `color` has at least one legal square. Stops at the first one found.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        Coord::all().any(|coord| self.is_legal(coord, color))
    }

    /// Legal squares for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Coord> {
        Coord::all()
            .filter(|&coord| self.is_legal(coord, color))
            .collect()
    }

    /// True when the board is full or neither color can move.
    pub fn is_terminal(&self) -> bool {
        self.is_full()
            || (!self.has_any_legal_move(Color::Black) && !self.has_any_legal_move(Color::White))
    }

    /// Returns `(white_count, black_count)`.
    pub fn tally(&self) -> (u8, u8) {
        (self.count(Color::White), self.count(Color::Black))
    }

    pub fn count(&self, color: Color) -> u8 {
        self.side(color).count_ones() as u8
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - (self.black | self.white).count_ones() as u8
    }

    /// Row-major 8×8 grid of cells.
    pub fn to_array(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for coord in Coord::all() {
            cells[coord.row as usize][coord.col as usize] = self.cell(coord);
        }
        cells
    }

    fn side(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    fn collect_flips(&self, coord: Coord, color: Color) -> u64 {
        DIRECTIONS
            .iter()
            .fold(0u64, |flips, &(dr, dc)| flips | self.bracket(coord, color, dr, dc))
    }

    /// Opponent discs captured in one direction from `coord`, or 0 when the run
    /// is empty or not capped by a disc of `color`.
    fn bracket(&self, coord: Coord, color: Color, dr: i32, dc: i32) -> u64 {
        let me = self.side(color);
        let opp = self.side(!color);
        let mut line = 0u64;
        let mut cursor = coord.offset(dr, dc);

        while let Some(square) = cursor {
            let square_bit = bit(square.index());
            if (opp & square_bit) != 0 {
                line |= square_bit;
            } else if (me & square_bit) != 0 {
                return line;
            } else {
                return 0;
            }
            cursor = square.offset(dr, dc);
        }

        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_array() {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}
