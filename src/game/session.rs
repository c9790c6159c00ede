//! One human against one computer opponent on a shared board.
//!
//! The session is a small state machine:
//!
//! ```text
//! AwaitingPlayer --place_player_token--> Finished(Win | Draw)
//!                                    \-> AwaitingComputer
//! AwaitingComputer --place_computer_token--> Finished(Lose | Draw)
//!                                        \-> AwaitingPlayer
//! ```
//!
//! Each placement is applied as one step: win detection on the landing cell,
//! the grid write, the score update and observer notification all happen
//! before the call returns.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use super::board::Board;
use super::lines::{check_column, RunLength};
use super::player::{Player, PlayerRecord};
use crate::ai::{seeded_rng, Agent, Tier};
use crate::error::{ConfigError, MoveError};
use crate::highscores::HighscoreStore;

/// How a game ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayer,
    AwaitingComputer,
    Finished(GameOutcome),
}

/// Cosmetic display mode. Has no effect on the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Classic,
    Breakfast,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Classic => Mode::Breakfast,
            Mode::Breakfast => Mode::Classic,
        }
    }

    pub fn is_breakfast(self) -> bool {
        self == Mode::Breakfast
    }
}

/// What changed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridChange {
    Placed {
        row: usize,
        column: usize,
        colour: Player,
    },
    Cleared,
}

/// Receives every grid change; the presentation layer decides how much to
/// redraw.
pub trait GridObserver {
    fn on_grid_changed(&mut self, change: GridChange, mode: Mode);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMove {
    pub row: usize,
    pub column: usize,
    pub outcome: Option<GameOutcome>,
    /// Rank reached on the highscore board after a win, if any.
    pub highscore_rank: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub row: usize,
    pub column: usize,
    pub tier: Tier,
    pub outcome: Option<GameOutcome>,
}

/// A player move and the computer's answer, when the game went on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: PlayerMove,
    pub computer: Option<ComputerMove>,
}

pub struct Session {
    board: Board,
    player: PlayerRecord,
    computer: Player,
    agent: Box<dyn Agent>,
    highscores: Option<HighscoreStore>,
    observers: Vec<Box<dyn GridObserver>>,
    mode: Mode,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    /// Start a session on `board`, which is used as-is for the first game.
    ///
    /// With `colour` unset the player's colour is drawn at random.
    pub fn new(
        board: Board,
        agent: Box<dyn Agent>,
        colour: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = seeded_rng(seed);
        let player_colour = colour.unwrap_or_else(|| random_colour(&mut rng));
        Session {
            board,
            player: PlayerRecord::new(player_colour),
            computer: player_colour.other(),
            agent,
            highscores: None,
            observers: Vec::new(),
            mode: Mode::default(),
            phase: Phase::AwaitingPlayer,
            rng,
        }
    }

    pub fn set_player_name(&mut self, name: &str) -> Result<(), ConfigError> {
        self.player.set_name(name)
    }

    /// Record wins on `store`.
    pub fn attach_highscores(&mut self, store: HighscoreStore) {
        self.highscores = Some(store);
    }

    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    pub fn computer_colour(&self) -> Player {
        self.computer
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    pub fn highscores(&self) -> Option<&HighscoreStore> {
        self.highscores.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Switch between classic and breakfast display, returning the new mode.
    pub fn toggle_cosmetic_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Start a new game on the same board. The player keeps their name; the
    /// score restarts at zero. `None` picks the colour at random.
    pub fn reset(&mut self, colour: Option<Player>) {
        let colour = colour.unwrap_or_else(|| random_colour(&mut self.rng));
        self.board.reset();
        self.player.set_colour(colour);
        self.player.reset_score();
        self.computer = colour.other();
        self.phase = Phase::AwaitingPlayer;
        debug!(?colour, "new game");
        self.notify(GridChange::Cleared);
    }

    /// Drop the player's token into `column`.
    ///
    /// Fails without touching the game if it is not the player's turn or the
    /// column is out of range or full.
    pub fn place_player_token(&mut self, column: usize) -> Result<PlayerMove, MoveError> {
        match self.phase {
            Phase::Finished(_) => return Err(MoveError::GameOver),
            Phase::AwaitingComputer => return Err(MoveError::AwaitingComputer),
            Phase::AwaitingPlayer => {}
        }

        let colour = self.player.colour();
        let wins = check_column(&self.board, column, colour, RunLength::Three).is_some();
        let row = self.board.drop_piece(column, colour)?;
        self.player.add_point();
        debug!(row, column, ?colour, score = self.player.score(), "player move");
        self.notify(GridChange::Placed {
            row,
            column,
            colour,
        });

        let (outcome, highscore_rank) = if wins {
            (Some(GameOutcome::Win), self.record_highscore())
        } else if self.board.is_full() {
            (Some(GameOutcome::Draw), None)
        } else {
            (None, None)
        };

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => self.phase = Phase::AwaitingComputer,
        }

        Ok(PlayerMove {
            row,
            column,
            outcome,
            highscore_rank,
        })
    }

    /// Let the agent choose and drop the computer's token.
    pub fn place_computer_token(&mut self) -> Result<ComputerMove, MoveError> {
        match self.phase {
            Phase::Finished(_) => return Err(MoveError::GameOver),
            Phase::AwaitingPlayer => return Err(MoveError::AwaitingPlayer),
            Phase::AwaitingComputer => {}
        }

        let colour = self.computer;
        let decision = self
            .agent
            .select_column(&self.board, colour)
            .ok_or(MoveError::BoardFull)?;
        let column = decision.column;
        let wins = check_column(&self.board, column, colour, RunLength::Three).is_some();
        let row = self.board.drop_piece(column, colour)?;
        debug!(row, column, tier = ?decision.tier, "computer move");
        self.notify(GridChange::Placed {
            row,
            column,
            colour,
        });

        let outcome = if wins {
            Some(GameOutcome::Lose)
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => self.phase = Phase::AwaitingPlayer,
        }

        Ok(ComputerMove {
            row,
            column,
            tier: decision.tier,
            outcome,
        })
    }

    /// Play `column` for the player and, unless that ended the game, the
    /// computer's reply.
    pub fn play_turn(&mut self, column: usize) -> Result<Turn, MoveError> {
        let player = self.place_player_token(column)?;
        let computer = match player.outcome {
            Some(_) => None,
            None => Some(self.place_computer_token()?),
        };
        Ok(Turn { player, computer })
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.phase = Phase::Finished(outcome);
        info!(?outcome, score = self.player.score(), "game over");
    }

    fn notify(&mut self, change: GridChange) {
        for observer in &mut self.observers {
            observer.on_grid_changed(change, self.mode);
        }
    }

    /// Offer the finished game to the highscore board. Failures are logged,
    /// never fatal.
    fn record_highscore(&mut self) -> Option<usize> {
        let store = self.highscores.as_mut()?;
        match store.save_if_qualifies(&self.player) {
            Ok(Some(rank)) => {
                if let Err(e) = store.load() {
                    warn!(error = %e, "could not reload highscores");
                }
                Some(rank)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not save highscores");
                None
            }
        }
    }
}

fn random_colour(rng: &mut StdRng) -> Player {
    if rng.random_bool(0.5) {
        Player::Red
    } else {
        Player::Yellow
    }
}
