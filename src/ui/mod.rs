//! Terminal UI: a ratatui front end that drives the game engine from the
//! keyboard.

mod app;
mod game_view;
mod theme;

pub use app::App;
pub use theme::Theme;
