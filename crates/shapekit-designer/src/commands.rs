//! Discrete editing commands delivered by the input layer.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    MoveUp,
    MoveLeft,
    MoveDown,
    MoveRight,
    Delete,
    Grow,
    Shrink,
}

impl KeyCommand {
    pub const ALL: [KeyCommand; 7] = [
        KeyCommand::MoveUp,
        KeyCommand::MoveLeft,
        KeyCommand::MoveDown,
        KeyCommand::MoveRight,
        KeyCommand::Delete,
        KeyCommand::Grow,
        KeyCommand::Shrink,
    ];

    /// `(dx, dy)` for move commands, `None` otherwise.
    pub fn move_offset(self, step: i32) -> Option<(i32, i32)> {
        match self {
            KeyCommand::MoveUp => Some((0, step.saturating_neg())),
            KeyCommand::MoveLeft => Some((step.saturating_neg(), 0)),
            KeyCommand::MoveDown => Some((0, step)),
            KeyCommand::MoveRight => Some((step, 0)),
            _ => None,
        }
    }

    /// Margin delta for grow/shrink commands, `None` otherwise.
    pub fn resize_delta(self, step: i32) -> Option<i32> {
        match self {
            KeyCommand::Grow => Some(step),
            KeyCommand::Shrink => Some(step.saturating_neg()),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyCommand::MoveUp => "up",
            KeyCommand::MoveLeft => "left",
            KeyCommand::MoveDown => "down",
            KeyCommand::MoveRight => "right",
            KeyCommand::Delete => "delete",
            KeyCommand::Grow => "grow",
            KeyCommand::Shrink => "shrink",
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        KeyCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == lower)
            .ok_or_else(|| format!("unknown key command '{}'", s))
    }
}
