use crate::config::AppConfig;
use crate::error::SetupError;
use crate::game::{GameEngine, MoveError, MoveOutcome, Player, PlayerId};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Terminal front end: turns key presses into column drops and shows the
/// engine's results. Holds no rules of its own.
pub struct App {
    config: AppConfig,
    engine: GameEngine,
    players: [Player; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, SetupError> {
        let engine = config.new_engine()?;
        let players = config.players();
        let selected_column = engine.width() / 2;
        Ok(App {
            config,
            engine,
            players,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        if self.players[0].id() == id {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

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
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.engine.width() {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.config.new_engine() {
            Ok(engine) => {
                self.selected_column = engine.width() / 2;
                self.engine = engine;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                log::error!("could not start a new game: {e}");
                self.message = Some(format!("Could not start a new game: {e}"));
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.apply_move(self.selected_column) {
            Ok(placement) => {
                self.message = match placement.outcome {
                    MoveOutcome::Continue => None,
                    MoveOutcome::Win(player) => {
                        Some(format!("{} won!", self.player(player).name()))
                    }
                    MoveOutcome::Draw => Some("Game is a tie".to_string()),
                };
            }
            Err(e) => {
                log::debug!("ignored drop in column {}: {e}", self.selected_column);
                self.message = Some(match e {
                    MoveError::AlreadyOver => "Game over! Press 'r' to restart.".to_string(),
                    MoveError::ColumnFull(_) => "Column is full!".to_string(),
                    MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
                });
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn small_app() -> App {
        let mut config = AppConfig::default();
        config.board.height = 4;
        config.board.width = 4;
        App::new(config).unwrap()
    }

    #[test]
    fn test_selector_starts_in_middle_and_stays_on_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column(), 3);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_into_selected_column() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().cell_owner(5, 3), Some(PlayerId::new(1)));
        assert_eq!(app.engine().current_player(), PlayerId::new(2));
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_digit_drops_into_that_column() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column(), 0);
        assert_eq!(app.engine().cell_owner(5, 0), Some(PlayerId::new(1)));

        // Past the last column: ignored
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.engine().current_player(), PlayerId::new(2));
    }

    #[test]
    fn test_full_column_shows_message() {
        let mut app = small_app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for key in ['1', '7', '1', '7', '1', '7', '1'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.message(), Some("Player 1 won!"));
        assert!(app.engine().is_over());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.engine().is_over());
        assert_eq!(app.engine().cell_owner(5, 0), None);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_tie_message() {
        let mut app = small_app();
        for col in [0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3, 2, 0, 3, 1] {
            press(&mut app, KeyCode::Char(char::from(b'1' + col)));
        }
        assert_eq!(app.message(), Some("Game is a tie"));
    }

    #[test]
    fn test_quit() {
        let mut app = small_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_pieces_and_current_player() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Current Player: Player 2"));
        assert!(text.contains('\u{25cf}'));
    }
}
