use crate::config::{AppConfig, PlayersConfig};
use crate::error::MoveError;
use crate::game::{GameState, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::Theme;

pub struct App {
    game_state: GameState,
    height: usize,
    width: usize,
    players: PlayersConfig,
    theme: Theme,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (height, width) = (config.board.height, config.board.width);
        App {
            game_state: GameState::new(height, width),
            height,
            width,
            players: config.players.clone(),
            theme: config.ui.theme,
            selected_column: width / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
    pub fn handle_key(&mut self, key: KeyEvent) {
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
                if self.selected_column + 1 < self.width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.width {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                log::debug!("switched to {} theme", self.theme.name());
            }
            _ => {}
        }
    }

    /// Discard the current game and start over.
    fn reset(&mut self) {
        self.game_state = GameState::new(self.height, self.width);
        self.selected_column = self.width / 2;
        log::debug!("new {}x{} game", self.height, self.width);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.apply_move_mut(self.selected_column as isize) {
            Ok(()) => {
                self.message = match self.game_state.status() {
                    Status::Won(player) => Some(format!("{} won!", self.players.name(player))),
                    Status::Tied => Some("It's a tie!".to_string()),
                    Status::InProgress => None,
                };
            }
            Err(MoveError::ColumnFull(col)) => {
                self.message = Some(format!("Column {} is full!", col + 1));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to start a new game.".to_string());
            }
            Err(e @ MoveError::InvalidColumn { .. }) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.players,
            self.theme,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
