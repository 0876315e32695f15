//! Front-end session: the engine state plus the panel toggle and settings.

use serde::Serialize;

use crate::calculator::{CalcState, Key};
use crate::config::Config;
use crate::keys::{Command, Input};

/// What the caller should do after an input was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Put this text on the clipboard.
    Copy(String),
    /// The key is on the scientific panel, which is hidden.
    Ignored(Key),
    Quit,
}

#[derive(Clone, Debug, Serialize)]
pub struct Session {
    state: CalcState,
    scientific: bool,
    #[serde(skip)]
    copy_on_equals: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            state: CalcState::with_angle_mode(config.angle_mode),
            scientific: config.scientific,
            copy_on_equals: config.copy_on_equals,
        }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Key(key) => self.handle_key(key),
            Input::Command(Command::Copy) => Flow::Copy(self.state.display().to_string()),
            Input::Command(Command::ToggleScientific) => {
                self.scientific = !self.scientific;
                tracing::debug!(scientific = self.scientific, "scientific panel toggled");
                Flow::Continue
            }
            Input::Command(Command::Show) => Flow::Continue,
            Input::Command(Command::Quit) => Flow::Quit,
        }
    }

    fn handle_key(&mut self, key: Key) -> Flow {
        if key.is_scientific() && !self.scientific {
            tracing::warn!(%key, "scientific panel is hidden, key ignored");
            return Flow::Ignored(key);
        }

        self.state.press(key);

        if key == Key::Equals && self.copy_on_equals && !self.state.is_error() {
            return Flow::Copy(self.state.display().to_string());
        }

        Flow::Continue
    }

    /// One-line rendering of the display, e.g. `[DEG] 12 +`.
    pub fn status_line(&self) -> String {
        let mut line = String::new();
        if self.scientific {
            line.push_str(&format!("[{}] ", self.state.angle_mode().label()));
        }
        line.push_str(self.state.display());
        if let Some(op) = self.state.pending_operation() {
            line.push(' ');
            line.push_str(op.symbol());
        }
        line
    }
}
