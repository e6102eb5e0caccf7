use std::{fmt::Display, rc::Rc, slice::Iter};

use crate::{location_of, Location, Span};

/// A recoverable syntax problem. The location is resolved when the record is
/// made, not when it is printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub span: Span,
    pub location: Location,
    pub message: String,
    pub file: Rc<String>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: error: {}", self.file, self.location, self.message)
    }
}

/// Append-only list of diagnostics, in the order they were detected.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    file: Rc<String>,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(file: Rc<String>) -> Self {
        Diagnostics {
            file,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, source: &str, span: Span, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            span,
            location: location_of(source, span.start),
            message: message.into(),
            file: Rc::clone(&self.file),
        });
    }

    /// Drops every entry recorded after the first `count`.
    pub fn truncate(&mut self, count: usize) {
        self.entries.truncate(count);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
