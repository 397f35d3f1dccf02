//! Mock UI implementation for testing.
//!
//! `MockUI` implements the [`UserInterface`] trait, captures all output
//! for later assertion, and answers confirmations from a scripted queue.

use std::collections::VecDeque;

use crate::error::Result;

use super::UserInterface;

/// Capturing UI with scripted confirmation answers.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    questions: Vec<String>,
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirmation.
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Answer returned once the queue is exhausted.
    pub fn set_default_answer(&mut self, answer: bool) {
        self.default_answer = answer;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get every confirmation question that was shown.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Check if a confirmation containing `fragment` was shown.
    pub fn was_asked(&self, fragment: &str) -> bool {
        self.questions.iter().any(|q| q.contains(fragment))
    }

    /// Check if a warning containing `fragment` was shown.
    pub fn has_warning(&self, fragment: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(fragment))
    }

    /// Check if an error containing `fragment` was shown.
    pub fn has_error(&self, fragment: &str) -> bool {
        self.errors.iter().any(|m| m.contains(fragment))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(self.default_answer))
    }
}
