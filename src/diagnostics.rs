//! Per-row diagnostics for skipped input.
//!
//! The pipeline never writes diagnostics next to its JSON output. Instead it
//! hands each skipped row to a [`DiagnosticSink`] supplied by the caller:
//!
//! - [`TracingSink`] - emits a `tracing` warning per row (used by the CLI)
//! - [`CollectingSink`] - keeps diagnostics in memory
//!
//! `Vec<Diagnostic>` implements the trait as well.

use std::fmt;

/// A row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number of the row in the input
    pub line: u64,
    /// The row's id, when the row was long enough to have one
    pub sid: Option<String>,
    /// Why the row was skipped
    pub reason: String,
}

impl Diagnostic {
    pub fn new(line: u64, sid: Option<&str>, reason: impl ToString) -> Self {
        Self {
            line,
            sid: sid.map(str::to_string),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sid {
            Some(sid) => write!(f, "line {} (sid {}): {}", self.line, sid, self.reason),
            None => write!(f, "line {}: {}", self.line, self.reason),
        }
    }
}

/// Receives diagnostics for skipped rows.
pub trait DiagnosticSink {
    /// Reports one skipped row.
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Forwards diagnostics to `tracing` as `WARN` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        tracing::warn!(
            line = diagnostic.line,
            sid = diagnostic.sid.as_deref().unwrap_or("-"),
            "skipping row: {}",
            diagnostic.reason
        );
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the sink, returning its diagnostics.
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_sid() {
        let diagnostic = Diagnostic::new(3, Some("00a12df6"), "bad phone");
        assert_eq!(diagnostic.to_string(), "line 3 (sid 00a12df6): bad phone");
    }

    #[test]
    fn test_display_without_sid() {
        let diagnostic = Diagnostic::new(7, None, "too short");
        assert_eq!(diagnostic.to_string(), "line 7: too short");
    }

    #[test]
    fn test_collecting_sink() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(&Diagnostic::new(1, None, "a"));
        sink.report(&Diagnostic::new(2, Some("x"), "b"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.diagnostics()[1].sid.as_deref(), Some("x"));
        assert_eq!(sink.into_inner().len(), 2);
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(&Diagnostic::new(1, None, "a"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(&Diagnostic::new(1, Some("x"), "reason"));
    }
}
