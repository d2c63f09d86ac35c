use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_3d::{board::Cell, win::winning_line, Board, Player, BOARD_SIZE};

const LAYER_WIDTH: usize = BOARD_SIZE + 6;

/// Draws the four layers of the board side by side, bottom layer first
///
/// Rows are x and columns are y, so a piece dropped at "x y" shows up at the
/// same spot in the lowest layer with a free cell.
pub fn draw(board: &Board, last_move: Option<(usize, usize, usize)>) -> Result<()> {
    let mut stdout = stdout();
    let highlight = winning_line(board).map(|(_, cells)| cells);

    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;

    let mut header = String::new();
    for z in 0..BOARD_SIZE {
        header.push_str(&format!("{:<width$}", format!("z={}", z), width = LAYER_WIDTH));
    }
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    let mut columns = String::new();
    for _ in 0..BOARD_SIZE {
        let labels: String = (0..BOARD_SIZE).map(|y| y.to_string()).collect();
        columns.push_str(&format!("{:<width$}", format!("  {}", labels), width = LAYER_WIDTH));
    }
    stdout.queue(PrintStyledContent(style(columns + "\n")))?;

    for x in 0..BOARD_SIZE {
        for z in 0..BOARD_SIZE {
            stdout.queue(PrintStyledContent(style(format!("{} ", x))))?;
            for y in 0..BOARD_SIZE {
                let winning = highlight.map_or(false, |cells| cells.contains(&(x, y, z)));
                let background = if winning {
                    Color::DarkGreen
                } else {
                    Color::DarkBlue
                };
                let mut piece = style("O")
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(match board.get(x, y, z) {
                        Cell::Occupied(Player::One) => Color::Red,
                        Cell::Occupied(Player::Two) => Color::Yellow,
                        Cell::Empty => background,
                    });
                if last_move == Some((x, y, z)) {
                    piece = piece.attribute(Attribute::Underlined);
                }
                stdout.queue(PrintStyledContent(piece))?;
            }
            stdout.queue(PrintStyledContent(style(" ".repeat(LAYER_WIDTH - BOARD_SIZE - 2))))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
