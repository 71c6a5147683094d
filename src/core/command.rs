//! Hero commands and their wire text

use std::fmt::Display;

use super::coords::Point;

/// What a hero does this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wait,
    Move { to: Point },
    Wind { aim: Point },
    Shield { id: i32 },
    Control { id: i32, to: Point },
}

/// One command line for one hero, with an optional free-text note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub note: Option<String>,
}

impl Command {
    fn new(action: Action) -> Self {
        Self { action, note: None }
    }

    pub fn wait() -> Self {
        Self::new(Action::Wait)
    }

    pub fn move_to(to: Point) -> Self {
        Self::new(Action::Move { to })
    }

    /// Wind pushes everything unshielded near the caster toward `aim`.
    pub fn wind(aim: Point) -> Self {
        Self::new(Action::Wind { aim })
    }

    pub fn shield(id: i32) -> Self {
        Self::new(Action::Shield { id })
    }

    pub fn control(id: i32, to: Point) -> Self {
        Self::new(Action::Control { id, to })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.action {
            Action::Wait => write!(f, "WAIT")?,
            Action::Move { to } => write!(f, "MOVE {}", to)?,
            Action::Wind { aim } => write!(f, "SPELL WIND {}", aim)?,
            Action::Shield { id } => write!(f, "SPELL SHIELD {}", id)?,
            Action::Control { id, to } => write!(f, "SPELL CONTROL {} {}", id, to)?,
        }

        if let Some(note) = &self.note {
            write!(f, " {}", note)?;
        }

        Ok(())
    }
}
