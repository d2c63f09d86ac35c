//! Turn sequencing between the human and the computer
//!
//! A [`Game`] owns the board and runs on a single thread. Applying a move and
//! checking it for a win are split by a short delay so the front end can draw
//! the new piece first, and the computer waits a little longer before it
//! replies. These delays are explicit [`PendingStep`]s rather than timers: the
//! host either calls [`Game::advance`] with the time that passed, or sleeps
//! for [`Game::next_delay`] and calls [`Game::fire`] with the step's token.
//!
//! At most one step is pending at a time. While a winner check is pending a
//! move is in flight and further moves are rejected. A reset drops the pending
//! step, and its token is never issued again, so a timer that fires late
//! cannot touch the new game.

use std::time::Duration;

use log::{debug, info, warn};

use crate::{
    board::{Board, Player},
    error::{ConfigError, MoveError},
    search::Searcher,
    win::check_winner,
    DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH,
};

/// The side played from the front end
pub const HUMAN: Player = Player::One;

/// The side played by the search
pub const AI: Player = Player::Two;

/// Delay between a move landing and checking it for a win
pub const WINNER_CHECK_DELAY: Duration = Duration::from_millis(100);

/// Delay before the computer starts searching for its reply
pub const AI_THINK_DELAY: Duration = Duration::from_millis(500);

/// Delay before the computer's first move when it opens the game
pub const AI_OPENING_DELAY: Duration = Duration::from_millis(0);

/// Settings chosen by the player, applied when a game starts
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    depth: u8,
    ai_opens: bool,
}

impl GameConfig {
    pub fn new(depth: u8, ai_opens: bool) -> Result<Self, ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(ConfigError::DepthOutOfRange(depth));
        }
        Ok(Self { depth, ai_opens })
    }

    /// Search depth of the computer, in plies after its own move
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Whether the computer makes the first move
    pub fn ai_opens(&self) -> bool {
        self.ai_opens
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            ai_opens: false,
        }
    }
}

/// Everything a front end needs to draw the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameState {
    pub board: Board,
    /// The player expected to move next
    pub to_move: Player,
    pub winner: Option<Player>,
    /// Set once the game is won or the board is full
    pub terminal: bool,
}

impl GameState {
    fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: if config.ai_opens { AI } else { HUMAN },
            winner: None,
            terminal: false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    HumanTurn,
    AiTurn,
    Terminal,
}

/// Identifies one scheduled step, never reused within a [`Game`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StepToken(u64);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepKind {
    /// Check the board after `mover`'s move and hand over the turn
    WinnerCheck { mover: Player },
    /// Search for and play the computer's move
    AiThink,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PendingStep {
    pub token: StepToken,
    pub kind: StepKind,
    /// Time left before the step is due
    pub remaining: Duration,
}

/// Notifications for the front end
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameEvent {
    /// A piece landed at `last_move`, or the board was cleared if it is `None`
    BoardChanged {
        board: Board,
        last_move: Option<(usize, usize, usize)>,
    },
    TurnChanged(Player),
    /// The game ended with a winner, or a draw if `None`
    GameOver(Option<Player>),
}

type Listener = Box<dyn FnMut(&GameEvent)>;

/// A game between the human ([`HUMAN`]) and the computer ([`AI`])
pub struct Game {
    state: GameState,
    // settings of the running game
    config: GameConfig,
    // settings for the next reset
    next_config: GameConfig,
    pending: Option<PendingStep>,
    next_token: u64,
    last_move: Option<(usize, usize, usize)>,
    listeners: Vec<Listener>,
}

impl Game {
    /// Starts a game, scheduling the computer's opening move if configured
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self {
            state: GameState::new(&config),
            config,
            next_config: config,
            pending: None,
            next_token: 0,
            last_move: None,
            listeners: Vec::new(),
        };
        game.schedule_opening();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        if self.state.terminal {
            Phase::Terminal
        } else if self.state.to_move == HUMAN {
            Phase::HumanTurn
        } else {
            Phase::AiTurn
        }
    }

    pub fn pending(&self) -> Option<&PendingStep> {
        self.pending.as_ref()
    }

    /// Whether a move has been applied but not yet checked for a win
    pub fn is_move_in_flight(&self) -> bool {
        matches!(
            self.pending,
            Some(PendingStep {
                kind: StepKind::WinnerCheck { .. },
                ..
            })
        )
    }

    /// Time until the pending step is due
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending.map(|step| step.remaining)
    }

    pub fn last_move(&self) -> Option<(usize, usize, usize)> {
        self.last_move
    }

    /// Registers a callback for every [`GameEvent`]
    pub fn subscribe<F: FnMut(&GameEvent) + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    /// Changes the settings used by the next [`reset`](Game::reset)
    pub fn set_config(&mut self, config: GameConfig) {
        self.next_config = config;
    }

    /// Starts a new game with the latest settings
    pub fn reset(&mut self) -> &GameState {
        self.reset_with(self.next_config)
    }

    /// Starts a new game with `config`, cancelling any pending step
    pub fn reset_with(&mut self, config: GameConfig) -> &GameState {
        if let Some(step) = self.pending.take() {
            debug!("cancelled pending {:?}", step.kind);
        }
        self.config = config;
        self.next_config = config;
        self.state = GameState::new(&config);
        self.last_move = None;
        info!(
            "new game, depth {}, {} opens",
            config.depth,
            self.state.to_move
        );

        self.emit(GameEvent::BoardChanged {
            board: self.state.board,
            last_move: None,
        });
        self.emit(GameEvent::TurnChanged(self.state.to_move));
        self.schedule_opening();
        &self.state
    }

    /// Drops the human's piece into column `(x, y)`
    ///
    /// Returns the height the piece landed at. A rejected move leaves the
    /// game exactly as it was.
    pub fn submit_human_move(&mut self, x: usize, y: usize) -> Result<usize, MoveError> {
        let result = self.check_human_move().and_then(|_| self.apply_move(x, y, HUMAN));
        if let Err(err) = result {
            warn!("rejected move at ({}, {}): {}", x, y, err);
        }
        result
    }

    fn check_human_move(&self) -> Result<(), MoveError> {
        if self.state.terminal {
            return Err(MoveError::GameOver);
        }
        if self.is_move_in_flight() {
            return Err(MoveError::Busy);
        }
        if self.state.to_move != HUMAN {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    /// Lets `elapsed` time pass, running every step that falls due
    ///
    /// Returns the number of steps run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut left = elapsed;
        let mut fired = 0;
        while let Some(step) = self.pending.as_mut() {
            if step.remaining > left {
                step.remaining -= left;
                break;
            }
            left -= step.remaining;
            let token = step.token;
            if self.fire(token) {
                fired += 1;
            }
        }
        fired
    }

    /// Runs the pending step now if `token` still refers to it
    ///
    /// Returns false for tokens of cancelled or already run steps.
    pub fn fire(&mut self, token: StepToken) -> bool {
        let step = match self.pending {
            Some(step) if step.token == token => step,
            _ => return false,
        };
        self.pending = None;

        match step.kind {
            StepKind::WinnerCheck { mover } => self.finish_move(mover),
            StepKind::AiThink => self.play_ai_move(),
        }
        true
    }

    fn schedule(&mut self, kind: StepKind, delay: Duration) {
        let token = StepToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(PendingStep {
            token,
            kind,
            remaining: delay,
        });
    }

    fn schedule_opening(&mut self) {
        if self.config.ai_opens && self.state.board.is_empty() && !self.state.terminal {
            self.schedule(StepKind::AiThink, AI_OPENING_DELAY);
        }
    }

    fn apply_move(&mut self, x: usize, y: usize, player: Player) -> Result<usize, MoveError> {
        let z = self.state.board.play(x, y, player)?;
        debug!("{} made a move at {}, {}, {}", player, x, y, z);

        self.last_move = Some((x, y, z));
        self.schedule(StepKind::WinnerCheck { mover: player }, WINNER_CHECK_DELAY);
        self.emit(GameEvent::BoardChanged {
            board: self.state.board,
            last_move: self.last_move,
        });
        Ok(z)
    }

    fn finish_move(&mut self, mover: Player) {
        if let Some(winner) = check_winner(&self.state.board) {
            self.end_game(Some(winner));
        } else if self.state.board.is_full() {
            self.end_game(None);
        } else {
            self.state.to_move = mover.other();
            self.emit(GameEvent::TurnChanged(self.state.to_move));
            if self.state.to_move == AI {
                self.schedule(StepKind::AiThink, AI_THINK_DELAY);
            }
        }
    }

    fn play_ai_move(&mut self) {
        if self.state.terminal {
            return;
        }
        let mut searcher = Searcher::new(AI);
        match searcher.best_move(&self.state.board, self.config.depth) {
            Some((x, y)) => {
                debug!("searched {} nodes", searcher.node_count);
                if let Err(err) = self.apply_move(x, y, AI) {
                    warn!("search picked an unplayable move: {}", err);
                }
            }
            None => self.end_game(None),
        }
    }

    fn end_game(&mut self, winner: Option<Player>) {
        self.state.winner = winner;
        self.state.terminal = true;
        match winner {
            Some(player) => info!("{} wins", player),
            None => info!("draw, the board is full"),
        }
        self.emit(GameEvent::GameOver(winner));
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
