use anyhow::{anyhow, Result};

use crate::{error::MoveError, win, BOARD_SIZE, NUM_CELLS, NUM_COLUMNS};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    /// The red player, always the human in [`Game`](crate::game::Game)
    One,
    /// The yellow player, always the computer in [`Game`](crate::game::Game)
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(*player),
            Cell::Empty => None,
        }
    }
}

/// Flat index of a cell, columns are stored contiguously bottom-to-top
pub const fn cell_index(x: usize, y: usize, z: usize) -> usize {
    (x * BOARD_SIZE + y) * BOARD_SIZE + z
}

/// Flat index of a column, in x-major order
pub const fn column_index(x: usize, y: usize) -> usize {
    x * BOARD_SIZE + y
}

/// A 4x4x4 board where pieces fall to the lowest free cell of their column
///
/// The board is a plain `Copy` value, so handing a copy to the search can
/// never affect the original.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
    // number of pieces in each column, also the landing height of the next one
    heights: [u8; NUM_COLUMNS],
    num_moves: usize,
}

impl Board {
    /// Creates a board with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
            heights: [0; NUM_COLUMNS],
            num_moves: 0,
        }
    }

    /// Builds a position from a string of moves, one hex digit per move
    ///
    /// Digit `d` drops a piece in column `(d / 4, d % 4)`. Players alternate
    /// starting with [`Player::One`].
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(16).map(|c| c as usize) {
                Some(column) => {
                    // abort if the position is already won
                    if win::check_winner(&board).is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    let (x, y) = (column / BOARD_SIZE, column % BOARD_SIZE);
                    board.play(x, y, player)?;
                    player = player.other();
                }
                None => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Cell {
        self.cells[cell_index(x, y, z)]
    }

    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Number of pieces already in column `(x, y)`
    pub fn height(&self, x: usize, y: usize) -> usize {
        self.heights[column_index(x, y)] as usize
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn is_empty(&self) -> bool {
        self.num_moves == 0
    }

    /// Whether the top cell of column `(x, y)` is occupied
    pub fn column_is_full(&self, x: usize, y: usize) -> bool {
        !self.get(x, y, BOARD_SIZE - 1).is_empty()
    }

    /// Whether no column can take another piece
    pub fn is_full(&self) -> bool {
        self.num_moves == NUM_CELLS
    }

    /// Columns that can still take a piece, in x-major, y-minor order
    pub fn open_columns(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| (x, y)))
            .filter(move |&(x, y)| !self.column_is_full(x, y))
    }

    /// Drops a piece for `player` into column `(x, y)`
    ///
    /// Returns the height the piece landed at. The board is left untouched if
    /// the move is rejected.
    pub fn play(&mut self, x: usize, y: usize, player: Player) -> Result<usize, MoveError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { x, y });
        }
        if self.column_is_full(x, y) {
            return Err(MoveError::ColumnFull { x, y });
        }
        let z = self.height(x, y);
        self.cells[cell_index(x, y, z)] = Cell::Occupied(player);
        self.heights[column_index(x, y)] += 1;
        self.num_moves += 1;
        Ok(z)
    }

    /// Returns a copy of the board with the move applied
    pub fn with_move(&self, x: usize, y: usize, player: Player) -> Result<Self, MoveError> {
        let mut next = *self;
        next.play(x, y, player)?;
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
