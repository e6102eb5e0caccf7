//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a recursive-descent parser that pulls tokens from
//! the lexer and builds the tree bottom-up. It handles:
//!
//! - Declarations and statements, telling the two apart by trying a
//!   declaration first and rolling back on failure
//! - Expressions, grouped by precedence climbing over the token table
//! - Function literals and their parameters
//! - Type annotations
//!
//! Malformed input is reported through diagnostics rather than aborting.

pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
