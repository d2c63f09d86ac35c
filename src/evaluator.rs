//! Static scoring of positions that are not yet decided

use crate::{
    board::{Board, Cell, Player},
    lines::LINES,
    WINNING_LENGTH,
};

/// Score of a window fully held by one player
pub const COMPLETE_WINDOW_SCORE: i32 = 100;

fn score_window(board: &Board, window: &[usize; WINNING_LENGTH], player: Player) -> i32 {
    let mut player_count = 0;
    let mut opponent_count = 0;
    for &index in window.iter() {
        match board.cell_at(index) {
            Cell::Occupied(owner) if owner == player => player_count += 1,
            Cell::Occupied(_) => opponent_count += 1,
            Cell::Empty => {}
        }
    }

    if opponent_count == 0 {
        if player_count == WINNING_LENGTH {
            COMPLETE_WINDOW_SCORE
        } else {
            player_count as i32
        }
    } else if player_count == 0 {
        if opponent_count == WINNING_LENGTH {
            -COMPLETE_WINDOW_SCORE
        } else {
            -(opponent_count as i32)
        }
    } else {
        // blocked for both players
        0
    }
}

/// Scores the board from the point of view of `player`
///
/// Every window of [`WINNING_LENGTH`] cells that lies fully on the board
/// counts the pieces of a player who could still complete it, positive for
/// `player` and negative for the opponent. Windows overlap, so central cells
/// weigh more. The score is not symmetric: pass the player the search is
/// maximising for.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    LINES
        .iter()
        .map(|window| score_window(board, window, player))
        .sum()
}
