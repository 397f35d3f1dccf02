//! Interactive terminal UI.

use std::io::Write;

use console::{style, Term};
use dialoguer::Confirm;

use crate::error::{CanopyError, Result};

use super::UserInterface;

/// Terminal implementation backed by console and dialoguer.
pub struct TerminalUI {
    term: Term,
}

impl TerminalUI {
    /// Create a UI writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert dialoguer errors to CanopyError.
fn map_dialoguer_err(e: dialoguer::Error) -> CanopyError {
    CanopyError::Io(e.into())
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).green()).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).yellow()).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", style(msg).red().bold()).ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}
