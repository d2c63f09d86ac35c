//! The straight lines of [`WINNING_LENGTH`] cells that fit on the board
//!
//! Both the win detector and the evaluator walk every (cell, direction) pair
//! and look at the cells stepping away from it. Only the starts whose whole
//! line stays on the board ever matter, so those lines are enumerated once at
//! compile time, in the same x, y, z, direction order as the walk.

use static_assertions::const_assert_eq;

use crate::{board::cell_index, BOARD_SIZE, WINNING_LENGTH};

/// One direction per undirected line through a cell: 3 axes, 6 face
/// diagonals and 4 space diagonals
pub const DIRECTIONS: [(i32, i32, i32); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
];

const fn fits(x: usize, y: usize, z: usize, direction: (i32, i32, i32)) -> bool {
    let span = (WINNING_LENGTH - 1) as i32;
    let end_x = x as i32 + span * direction.0;
    let end_y = y as i32 + span * direction.1;
    let end_z = z as i32 + span * direction.2;
    let size = BOARD_SIZE as i32;
    end_x >= 0 && end_x < size && end_y >= 0 && end_y < size && end_z >= 0 && end_z < size
}

const fn count_lines() -> usize {
    let mut count = 0;
    let mut x = 0;
    while x < BOARD_SIZE {
        let mut y = 0;
        while y < BOARD_SIZE {
            let mut z = 0;
            while z < BOARD_SIZE {
                let mut d = 0;
                while d < DIRECTIONS.len() {
                    if fits(x, y, z, DIRECTIONS[d]) {
                        count += 1;
                    }
                    d += 1;
                }
                z += 1;
            }
            y += 1;
        }
        x += 1;
    }
    count
}

/// The number of distinct lines on the board
pub const NUM_LINES: usize = count_lines();

// 48 along the axes, 24 on face diagonals, 4 space diagonals
const_assert_eq!(NUM_LINES, 76);

const fn build_lines() -> [[usize; WINNING_LENGTH]; NUM_LINES] {
    let mut lines = [[0; WINNING_LENGTH]; NUM_LINES];
    let mut n = 0;
    let mut x = 0;
    while x < BOARD_SIZE {
        let mut y = 0;
        while y < BOARD_SIZE {
            let mut z = 0;
            while z < BOARD_SIZE {
                let mut d = 0;
                while d < DIRECTIONS.len() {
                    let (dx, dy, dz) = DIRECTIONS[d];
                    if fits(x, y, z, DIRECTIONS[d]) {
                        let mut i = 0;
                        while i < WINNING_LENGTH {
                            let step = i as i32;
                            lines[n][i] = cell_index(
                                (x as i32 + step * dx) as usize,
                                (y as i32 + step * dy) as usize,
                                (z as i32 + step * dz) as usize,
                            );
                            i += 1;
                        }
                        n += 1;
                    }
                    d += 1;
                }
                z += 1;
            }
            y += 1;
        }
        x += 1;
    }
    lines
}

/// Cell indices of every line, in scan order
pub const LINES: [[usize; WINNING_LENGTH]; NUM_LINES] = build_lines();

/// Converts a flat cell index back into `(x, y, z)`
pub const fn coordinates(index: usize) -> (usize, usize, usize) {
    (
        index / (BOARD_SIZE * BOARD_SIZE),
        (index / BOARD_SIZE) % BOARD_SIZE,
        index % BOARD_SIZE,
    )
}
