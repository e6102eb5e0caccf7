//! Lexical analysis.
//!
//! This module contains the scanner that converts source text into tokens
//! on demand. It handles:
//!
//! - Recognition of identifiers, numeric and string literals, and operators
//!   through an ordered table of anchored regex patterns
//! - The static token table (display names, operator flags, precedence)
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;
