use std::rc::Rc;

use thiserror::Error;

use crate::{Location, Span};

/// A scan error surfaced by the parser. Parsing stops as soon as one is
/// observed; it is never recorded as a diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{file}:{location}: error: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    location: Location,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span, location: Location, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            span,
            location,
            file,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_location(&self) -> Location {
        self.location
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character `{character}`")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
}
