#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::diagnostics::Diagnostic;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use crate::parser::parser::parse_top_level_declaration;

/// Half-open byte range `[start, end)` into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Span running from the start of `self` to the end of `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps a byte offset to its line and column. Offsets past the end of the
/// source are clamped to the end.
pub fn location_of(source: &str, offset: usize) -> Location {
    let mut location = Location { line: 1, column: 1 };

    for byte in source.as_bytes().iter().take(offset) {
        if *byte == b'\n' {
            location.line += 1;
            location.column = 1;
        } else {
            location.column += 1;
        }
    }

    location
}

/// Returns the line number, the text of the line and the offset within that
/// line for a byte position. A position at or past the end of the source
/// points just after the last character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    if last_line.ends_with('\n') || last_line.is_empty() {
        // end of input sits on a fresh, empty line
        return (line_number, String::new(), 0);
    }

    (line_number - 1, last_line.to_string(), last_line.len())
}

/// Renders a header line followed by the offending source line and a caret
/// pointing at `position`.
///
/// ```text
/// main.lang:1:6: error: expected an expression, but got `}` instead
///   |
/// 1 | x :: }
///   | -----^
/// ```
pub fn display_error(header: impl Display, position: usize, source: &str) -> String {
    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let mut rendered = format!("{}\n", header);
    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

/// Renders a recorded diagnostic with its source snippet.
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str) -> String {
    display_error(diagnostic, diagnostic.span.start, source)
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

/// Spreads the single-line rendering of a tree over several lines, one
/// statement per line, indenting function bodies.
pub fn pretty_print(string: &str) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut ignore_next_space = false;
    let mut in_string = false;

    for c in string.chars() {
        if in_string {
            result.push(c);
            in_string = c != '"';
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                ignore_next_space = false;
                result.push(c);
            }
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' => {
                indent -= 1;
                while result.ends_with(' ') {
                    result.pop();
                }
                if !result.ends_with('\n') {
                    result.push('\n');
                }
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ';' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
