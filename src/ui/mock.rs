//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    headings: Vec<String>,
    commands: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured failure lines.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section headings.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// Get all captured commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Every line in output order, tagged by kind (`ok:`, `fail:`, ...).
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(format!("msg: {}", msg));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(format!("ok: {}", msg));
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
        self.transcript.push(format!("fail: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(format!("warn: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(format!("error: {}", msg));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(format!("header: {}", title));
    }

    fn show_heading(&mut self, title: &str) {
        self.headings.push(title.to_string());
        self.transcript.push(format!("heading: {}", title));
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
        self.transcript.push(format!("cmd: {}", command));
    }
}
