//! Diagnostics sink passed into the ingestion and emission stages.

use crate::error::ParseWarning;
use std::cell::RefCell;

/// Receives progress messages and recoverable warnings.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warn(&self, warning: &ParseWarning);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, warning: &ParseWarning) {
        log::warn!("{warning}");
    }
}

/// Keeps every message in memory. Used by tests and by callers that want to
/// inspect what a run reported.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: RefCell<Vec<String>>,
    warnings: RefCell<Vec<ParseWarning>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<ParseWarning> {
        self.warnings.borrow().clone()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn warn(&self, warning: &ParseWarning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}
