//! Terminal output and confirmation prompts.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] capturing implementation for tests

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::TerminalUI;

use crate::error::Result;

/// Trait for user-facing output and confirmation.
///
/// The preflight and install flows talk to the operator only through
/// this trait, so every prompt path can run against a mock in tests and
/// no leaf code ever owns process termination.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question and return the answer.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}
