//! Othello rules engine and fixed-depth minimax opponent.
//!
//! - [`board`] holds the 8×8 board and every legality/flip rule.
//! - [`ai`] scores positions and searches for the computer's move.
//! - [`game`] threads one board through a human-versus-computer session.
//! - [`wasm`] exposes the session to JavaScript.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod types;
pub mod wasm;

pub use ai::{DEFAULT_SEARCH_DEPTH, SearchResult, SearchStats, Searcher, evaluate, search};
pub use board::{Board, Flips};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameInstance, MinimaxSelector, MoveSelector, TurnStatus};
pub use logging::init_logging;
pub use types::{Cell, Color, Coord, Coords, GameResult, GameState, Move, Winner};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
