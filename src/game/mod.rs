//! Core Connect Four rules: board storage, drop and win scans, players, and
//! the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::Player;
pub use state::{GameState, Status};
