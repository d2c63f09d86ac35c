use anyhow::{anyhow, Result};
use clap::Parser;

use std::cell::RefCell;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::rc::Rc;

use connect4_3d::{
    game::HUMAN,
    Game, GameConfig, GameEvent, Phase, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH,
};

mod display;
mod logging;

/// Play 3D Connect 4 on a 4x4x4 board against the computer
#[derive(Parser, Debug)]
#[command(name = "connect4_3d")]
struct Args {
    /// Search depth of the computer (1-5), asked for if not given
    #[arg(short, long)]
    depth: Option<u8>,

    /// Whether the computer moves first (true/false), asked for if not given
    #[arg(long)]
    ai_opens: Option<bool>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn read_line() -> Result<String> {
    stdout().flush()?;
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        print!("{} y/n: ", question);
        match read_line()?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_depth() -> Result<u8> {
    loop {
        print!(
            "Computer search depth ({}-{}, default {}): ",
            MIN_DEPTH, MAX_DEPTH, DEFAULT_DEPTH
        );
        let input = read_line()?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(DEFAULT_DEPTH);
        }
        match input.parse::<u8>() {
            Ok(depth) if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) => return Ok(depth),
            _ => println!("Invalid depth: {}", input),
        }
    }
}

fn parse_column(input: &str) -> Result<(usize, usize)> {
    let mut coordinates = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let x = coordinates
        .next()
        .ok_or(anyhow!("expected two coordinates, e.g. '1 2'"))?
        .parse::<usize>()?;
    let y = coordinates
        .next()
        .ok_or(anyhow!("expected two coordinates, e.g. '1 2'"))?
        .parse::<usize>()?;
    Ok((x, y))
}

fn opening_message(game: &Game) -> String {
    match game.phase() {
        Phase::HumanTurn => "Your move, enter a column as 'x y'".to_string(),
        _ => "AI is thinking...".to_string(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = logging::setup_logging(&args.log_level, &args.log_dir)?;

    println!("Welcome to 3D Connect 4\n");

    let depth = match args.depth {
        Some(depth) => depth,
        None => ask_depth()?,
    };
    let ai_opens = match args.ai_opens {
        Some(ai_opens) => ai_opens,
        None => ask_yes_no("Does the computer move first?")?,
    };
    let mut game = Game::new(GameConfig::new(depth, ai_opens)?);

    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = events.clone();
        game.subscribe(move |event| events.borrow_mut().push(*event));
    }

    let mut redraw = true;
    let mut message = opening_message(&game);

    // game loop
    loop {
        for event in events.borrow_mut().drain(..) {
            redraw = true;
            match event {
                GameEvent::BoardChanged { .. } => {}
                GameEvent::TurnChanged(player) if player == HUMAN => {
                    message = "Your move, enter a column as 'x y'".to_string()
                }
                GameEvent::TurnChanged(_) => message = "AI is thinking...".to_string(),
                GameEvent::GameOver(Some(player)) if player == HUMAN => {
                    message = "Congratulations, you win!".to_string()
                }
                GameEvent::GameOver(Some(_)) => message = "You lose, try again!".to_string(),
                GameEvent::GameOver(None) => message = "Draw, the board is full".to_string(),
            }
        }
        if redraw {
            display::draw(&game.state().board, game.last_move())?;
            println!("{}", message);
            redraw = false;
        }

        // let scheduled steps play out in real time
        if let Some(step) = game.pending().copied() {
            std::thread::sleep(step.remaining);
            game.fire(step.token);
            continue;
        }

        match game.phase() {
            Phase::HumanTurn => {
                print!("Move input > ");
                let input = read_line()?;
                match parse_column(&input) {
                    Ok((x, y)) => {
                        if let Err(err) = game.submit_human_move(x, y) {
                            println!("{}", err);
                        }
                    }
                    Err(err) => println!("Invalid input '{}': {}", input.trim(), err),
                }
            }
            Phase::AiTurn => return Err(anyhow!("the computer has no move scheduled")),
            Phase::Terminal => {
                if !ask_yes_no("Play again?")? {
                    break;
                }
                game.reset();
                message = opening_message(&game);
            }
        }
    }
    Ok(())
}
