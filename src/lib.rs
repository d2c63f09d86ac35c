//! An engine for playing 3D Connect 4 on a 4x4x4 board against the computer
//!
//! Pieces drop down each of the 16 vertical columns, and a player wins by
//! completing a straight line of four in any of the 13 directions through
//! the cube. The computer picks its moves with a depth-limited minimax search
//! using alpha-beta pruning and a line-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_3d::{board::Board, search::Searcher, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // red has three in a row along x at the bottom layer
//! let board = Board::from_moves("01458")?;
//! let mut searcher = Searcher::new(Player::Two);
//!
//! assert_eq!(searcher.best_move(&board, 1), Some((3, 0)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod lines;

pub mod win;

pub mod evaluator;

pub mod search;

pub mod game;


pub use board::{Board, Cell, Player};
pub use error::{ConfigError, MoveError};
pub use game::{Game, GameConfig, GameEvent, GameState, Phase};
pub use search::Searcher;

/// The edge length of the board in cells, along every axis
pub const BOARD_SIZE: usize = 4;

/// The number of aligned pieces needed to win
pub const WINNING_LENGTH: usize = 4;

/// The total number of cells on the board
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE * BOARD_SIZE;

/// The number of vertical columns a piece can be dropped into
pub const NUM_COLUMNS: usize = BOARD_SIZE * BOARD_SIZE;

/// The shallowest search depth the computer can be configured with
pub const MIN_DEPTH: u8 = 1;

/// The deepest search depth the computer can be configured with
pub const MAX_DEPTH: u8 = 5;

/// The search depth used when none is configured
pub const DEFAULT_DEPTH: u8 = 3;

const_assert!(WINNING_LENGTH <= BOARD_SIZE);
// cell indices must fit in a u64 occupancy mask
const_assert!(NUM_CELLS <= 64);
const_assert!(MIN_DEPTH <= DEFAULT_DEPTH && DEFAULT_DEPTH <= MAX_DEPTH);
