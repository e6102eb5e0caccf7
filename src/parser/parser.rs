//! Parser state and the helpers shared by every production.
//!
//! The parser pulls tokens from the lexer one at a time and keeps exactly
//! one token of lookahead. Failed productions record a diagnostic and yield
//! `Ok(None)`; a scan error seen in the lookahead aborts the whole parse with
//! `Err`.

use std::{mem, rc::Rc};

use crate::{
    ast::statements::Declaration,
    errors::{
        diagnostics::{Diagnostic, Diagnostics},
        errors::Error,
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenValue},
    },
    location_of,
};

use super::stmt::parse_declaration;

/// `Ok(None)` is a failed production whose diagnostic is already recorded.
pub type ParseResult<T> = Result<Option<T>, Error>;

/// Everything needed to put the parser back where it was: the scanner
/// offset after the lookahead, the number of diagnostics, and the lookahead.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    offset: usize,
    diagnostics: usize,
    token: Token,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// The single lookahead token
    token: Token,
    /// Problems found so far, in detection order
    diagnostics: Diagnostics,
}

impl Parser {
    /// Creates a parser over `source` and reads the first lookahead token.
    pub fn new(source: String, file: Option<String>) -> Self {
        let mut lexer = Lexer::new(source, file);
        let token = lexer.next_token();
        let diagnostics = Diagnostics::new(lexer.file());

        Parser {
            lexer,
            token,
            diagnostics,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Advances to the next token and returns the previous one by value.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.token, next)
    }

    /// Turns an `Error` lookahead into the fatal error that ends the parse.
    pub fn check_scan_error(&self) -> Result<(), Error> {
        if let TokenValue::Error(error) = &self.token.value {
            return Err(Error::new(
                error.clone(),
                self.token.span,
                location_of(self.lexer.source(), self.token.span.start),
                self.file(),
            ));
        }

        Ok(())
    }

    /// Consumes the lookahead if it has the given kind.
    ///
    /// A mismatch leaves the parser untouched and records nothing; reporting
    /// is left to the caller.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<bool, Error> {
        Ok(self.expect_token(expected_kind)?.is_some())
    }

    /// Like [`Parser::expect`], but hands back the consumed token.
    pub fn expect_token(&mut self, expected_kind: TokenKind) -> Result<Option<Token>, Error> {
        self.check_scan_error()?;

        if self.token.kind != expected_kind {
            return Ok(None);
        }

        Ok(Some(self.advance()))
    }

    /// Records a diagnostic at the lookahead token.
    pub fn error(&mut self, message: impl Into<String>) {
        let span = self.token.span;
        self.diagnostics.record(self.lexer.source(), span, message);
    }

    /// Records "expected `X`, but got `Y` instead" at the lookahead token.
    pub fn error_expected(&mut self, expected_kind: TokenKind) {
        let message = format!(
            "expected `{}`, but got `{}` instead",
            expected_kind, self.token.kind
        );
        self.error(message);
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.lexer.position(),
            diagnostics: self.diagnostics.len(),
            token: self.token.clone(),
        }
    }

    /// Puts scanner, lookahead and diagnostics back to the checkpoint.
    /// Diagnostics recorded since then are discarded.
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        self.lexer.rewind(checkpoint.offset);
        self.diagnostics.truncate(checkpoint.diagnostics);
        self.token = checkpoint.token.clone();
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }

    pub fn source(&self) -> &str {
        self.lexer.source()
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }
}

/// Parses one top-level `name :: value` declaration.
///
/// Returns the declaration, or `None` when it is malformed, together with
/// every diagnostic recorded on the way. Only a scan error is returned as
/// `Err`. Input after the declaration is left unread.
pub fn parse_top_level_declaration(
    source: &str,
    display_name: &str,
) -> Result<(Option<Declaration>, Vec<Diagnostic>), Error> {
    let mut parser = Parser::new(source.to_string(), Some(display_name.to_string()));

    let declaration = parse_declaration(&mut parser)?;

    Ok((declaration, parser.into_diagnostics()))
}
