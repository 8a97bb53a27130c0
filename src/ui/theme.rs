use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Piece palette. Purely cosmetic; toggled with `t` in the game view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Forest,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Classic => Theme::Forest,
            Theme::Forest => Theme::Classic,
        }
    }

    pub fn piece_color(self, player: Player) -> Color {
        match (self, player) {
            (Theme::Classic, Player::One) => Color::Red,
            (Theme::Classic, Player::Two) => Color::Yellow,
            (Theme::Forest, Player::One) => Color::Green,
            (Theme::Forest, Player::Two) => Color::White,
        }
    }

    pub fn piece_symbol(self) -> &'static str {
        match self {
            Theme::Classic => " ● ",
            Theme::Forest => " ◆ ",
        }
    }

    pub fn frame_color(self) -> Color {
        match self {
            Theme::Classic => Color::Blue,
            Theme::Forest => Color::DarkGray,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Forest => "Forest",
        }
    }
}
