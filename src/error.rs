//! Errors raised by the engine
//!
//! None of these are fatal. A rejected move never changes the board or the
//! game state, so a front end can report them or simply ignore them.

use crate::{BOARD_SIZE, MAX_DEPTH, MIN_DEPTH};

/// Reasons a move is not applied
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column ({x}, {y}) out of range. Coordinates must be below {}", BOARD_SIZE)]
    OutOfRange { x: usize, y: usize },

    #[error("Invalid move, column ({x}, {y}) full")]
    ColumnFull { x: usize, y: usize },

    #[error("Move rejected, another move is still being processed")]
    Busy,

    #[error("Move rejected, the game is over")]
    GameOver,

    #[error("Move rejected, it is not the human player's turn")]
    NotYourTurn,
}

impl MoveError {
    /// Whether the move itself is illegal on the board, as opposed to being
    /// submitted at the wrong time
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. } | MoveError::ColumnFull { .. })
    }
}

/// Reasons a [`GameConfig`](crate::game::GameConfig) is rejected
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth {0} is out of range ({}-{})", MIN_DEPTH, MAX_DEPTH)]
    DepthOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        let err = MoveError::ColumnFull { x: 2, y: 3 };
        assert_eq!(err.to_string(), "Invalid move, column (2, 3) full");

        let err = MoveError::OutOfRange { x: 4, y: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid move, column (4, 0) out of range. Coordinates must be below 4"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::DepthOutOfRange(9);
        assert_eq!(err.to_string(), "search depth 9 is out of range (1-5)");
    }

    #[test]
    fn invalid_move_grouping() {
        assert!(MoveError::ColumnFull { x: 0, y: 0 }.is_invalid_move());
        assert!(MoveError::OutOfRange { x: 7, y: 7 }.is_invalid_move());
        assert!(!MoveError::Busy.is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
        assert!(!MoveError::NotYourTurn.is_invalid_move());
    }
}
