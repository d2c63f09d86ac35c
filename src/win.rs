//! Detection of completed lines

use crate::{
    board::{Board, Cell, Player},
    lines::{coordinates, LINES},
    WINNING_LENGTH,
};

/// Finds the first completed line on the board, scanning start cells in
/// x, y, z order and directions innermost
///
/// Returns the owner of the line and the coordinates of its cells. Only one
/// player can ever hold a completed line, since play stops at the first one.
pub fn winning_line(board: &Board) -> Option<(Player, [(usize, usize, usize); WINNING_LENGTH])> {
    for line in LINES.iter() {
        let player = match board.cell_at(line[0]) {
            Cell::Occupied(player) => player,
            Cell::Empty => continue,
        };
        if line[1..].iter().all(|&i| board.cell_at(i) == Cell::Occupied(player)) {
            let mut cells = [(0, 0, 0); WINNING_LENGTH];
            for (cell, &index) in cells.iter_mut().zip(line.iter()) {
                *cell = coordinates(index);
            }
            return Some((player, cells));
        }
    }
    None
}

/// Returns the player holding a completed line, if any
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
