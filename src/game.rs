use log::{info, warn};
use serde::Serialize;

use crate::ai::search::Searcher;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::types::{Color, Coord, GameResult, GameState, Move};

/// Picks the computer's square.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, color: Color) -> Option<Coord>;
}

/// Fixed-depth minimax with the moving color as maximizer.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxSelector {
    pub depth: u8,
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<Coord> {
        Searcher::new(color).search(board, self.depth, color).best_move
    }
}

/// What [`GameInstance::advance_turn`] found for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnStatus {
    /// The side to move has a legal move.
    Move,
    /// The side to move could not play; the turn passed to the opponent.
    Passed,
    GameOver,
}

/// One human-versus-computer game.
///
/// Holds the board between turns; every step is an explicit call, and the
/// loop that sequences them lives with the caller.
pub struct GameInstance {
    board: Board,
    config: GameConfig,
    current_player: Color,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<Coord>,
    last_move: Option<Move>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    /// Starts a game searched by [`MinimaxSelector`]; fails on an out-of-range depth.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let selector = MinimaxSelector {
            depth: config.search_depth,
        };
        Ok(Self::with_selector(config, Box::new(selector)))
    }

    pub fn with_selector(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            config,
            current_player: Color::Black,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            last_move: None,
            selector,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Human move at `(row, col)`.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        self.ensure_turn(self.config.human())?;

        let coord = Coord::new(row, col);
        if !coord.is_on_board() {
            warn!("rejected off-board move row={row} col={col}");
            return Err(GameError::OffBoard { row, col });
        }
        if !self.board.is_legal(coord, self.current_player) {
            warn!("rejected illegal move row={row} col={col}");
            return Err(GameError::IllegalMove { row, col });
        }

        self.apply_move(coord, self.current_player);
        Ok(())
    }

    /// Lets the computer pick and play its move.
    pub fn do_ai_move(&mut self) -> Result<Coord, GameError> {
        let color = self.config.computer;
        self.ensure_turn(color)?;

        if !self.board.has_any_legal_move(color) {
            return Err(GameError::NoLegalMove);
        }

        let selected = self
            .selector
            .select_move(&self.board, color)
            .ok_or(GameError::NoLegalMove)?;
        if !self.board.is_legal(selected, color) {
            return Err(GameError::IllegalMove {
                row: selected.row,
                col: selected.col,
            });
        }

        self.apply_move(selected, color);
        Ok(selected)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_any_legal_move(self.current_player)
    }

    /// Forced pass; refused while the side to move still has a legal move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves_for_current() {
            return Err(GameError::PassNotAllowed);
        }

        info!("{:?} passes", self.current_player);
        self.is_pass = true;
        self.flipped.clear();
        self.last_move = None;
        self.current_player = !self.current_player;
        Ok(())
    }

    /// Resolves the start of a turn: ends the game when nobody can move and
    /// passes for a side that cannot.
    pub fn advance_turn(&mut self) -> TurnStatus {
        if self.is_game_over {
            return TurnStatus::GameOver;
        }
        if self.board.is_terminal() {
            self.end_game();
            return TurnStatus::GameOver;
        }
        if self.has_legal_moves_for_current() {
            return TurnStatus::Move;
        }
        match self.pass() {
            Ok(()) => TurnStatus::Passed,
            Err(_) => TurnStatus::GameOver,
        }
    }

    pub fn end_game(&mut self) {
        if !self.is_game_over {
            let (white, black) = self.board.tally();
            info!("game over: white={white} black={black}");
        }
        self.is_game_over = true;
    }

    pub fn get_legal_moves(&self) -> Vec<Coord> {
        self.board.legal_moves(self.current_player)
    }

    pub fn to_game_state(&self) -> GameState {
        let (white_count, black_count) = self.board.tally();
        GameState {
            board: self.board.to_array(),
            current_player: self.current_player,
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            last_move: self.last_move,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (white_count, black_count) = self.board.tally();
        GameResult::from_counts(white_count, black_count)
    }

    fn ensure_turn(&self, color: Color) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != color {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
            });
        }
        Ok(())
    }

    fn apply_move(&mut self, coord: Coord, color: Color) {
        let flips = self.board.make_move(coord, color);

        self.is_pass = false;
        self.flipped = flips.coords().collect();
        self.last_move = Some(Move { coord, color });
        self.current_player = !color;

        if self.board.is_terminal() {
            self.end_game();
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.last_move = None;
    }
}
