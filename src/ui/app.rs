use std::cell::Cell;
use std::io;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::trace;

use crate::error::MoveError;
use crate::game::{GameOutcome, GridChange, GridObserver, Mode, Player, Session, Turn};

/// Marks the screen stale whenever the grid changes.
struct RedrawOnChange(Rc<Cell<bool>>);

impl GridObserver for RedrawOnChange {
    fn on_grid_changed(&mut self, change: GridChange, mode: Mode) {
        trace!(?change, ?mode, "grid changed");
        self.0.set(true);
    }
}

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut session: Session) -> Self {
        let dirty = Rc::new(Cell::new(true));
        session.subscribe(Box::new(RedrawOnChange(Rc::clone(&dirty))));
        let selected_column = session.board().cols() / 2;
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
            dirty,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if self.dirty.replace(false) {
                terminal.draw(|f| self.render(f)).map_err(Into::into)?;
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Resize(..) => self.dirty.set(true),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;
        self.dirty.set(true);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(None),
            KeyCode::Char('1') => self.restart(Some(Player::Red)),
            KeyCode::Char('2') => self.restart(Some(Player::Yellow)),
            KeyCode::Char('b') => {
                let mode = self.session.toggle_cosmetic_mode();
                self.message = Some(match mode {
                    Mode::Breakfast => "Breakfast is served!".to_string(),
                    Mode::Classic => "Back to classic tokens.".to_string(),
                });
            }
            _ => {}
        }
    }

    fn restart(&mut self, colour: Option<Player>) {
        self.session.reset(colour);
        self.selected_column = self.session.board().cols() / 2;
        self.message = Some(format!(
            "New game! You play {}.",
            self.session.player().colour().name()
        ));
    }

    /// Drop the player's token in the selected column and let the computer answer
    fn drop_piece(&mut self) {
        if self.session.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        self.message = Some(match self.session.play_turn(self.selected_column) {
            Ok(turn) => describe_turn(&turn),
            Err(MoveError::ColumnFull(_)) => "Column is full!".to_string(),
            Err(e) => e.to_string(),
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

fn describe_turn(turn: &Turn) -> String {
    let outcome = turn
        .computer
        .and_then(|c| c.outcome)
        .or(turn.player.outcome);

    match outcome {
        Some(GameOutcome::Win) => match turn.player.highscore_rank {
            Some(rank) => format!("You win! New highscore at rank {}.", rank + 1),
            None => "You win!".to_string(),
        },
        Some(GameOutcome::Lose) => "The computer wins.".to_string(),
        Some(GameOutcome::Draw) => "It's a draw!".to_string(),
        None => match turn.computer {
            Some(computer) => format!("Computer played column {}.", computer.column + 1),
            None => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicAgent;
    use crate::game::{Board, Cell as BoardCell};

    fn app() -> App {
        let session = Session::new(
            Board::standard(),
            Box::new(HeuristicAgent::new(Some(4))),
            Some(Player::Red),
            Some(4),
        );
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = app();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
    }

    #[test]
    fn test_enter_plays_a_full_turn() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let board = app.session().board();
        assert_eq!(board.get(5, 3), BoardCell::Red);
        let tokens = (0..board.cols())
            .filter(|&col| board.landing_row(col) != Some(5))
            .count();
        assert!(tokens >= 1);
        assert_eq!(app.session().player().score(), 1);
        assert!(app.message().unwrap().starts_with("Computer played column"));
    }

    #[test]
    fn test_restart_and_breakfast_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session().player().colour(), Player::Yellow);
        assert_eq!(app.session().player().score(), 0);
        assert_eq!(app.message(), Some("New game! You play Yellow."));

        press(&mut app, KeyCode::Char('b'));
        assert!(app.session().mode().is_breakfast());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_grid_changes_mark_screen_dirty() {
        let mut app = app();
        app.dirty.set(false);
        app.session.reset(Some(Player::Red));
        assert!(app.dirty.get());
    }
}
