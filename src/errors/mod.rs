//! Error types and diagnostics for the front end.
//!
//! This module defines:
//!
//! - The fatal error raised when the parser runs into a scan error
//! - The diagnostic records collected for recoverable syntax errors
//! - Formatting of both in `<file>:<line>:<column>: error: <message>` form

pub mod diagnostics;
pub mod errors;
