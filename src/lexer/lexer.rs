use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::ErrorImpl, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue};

/// Turns the matched text into a token; `None` means the text is skipped.
pub type PatternHandler = fn(&str, Span) -> Option<Token>;

pub struct ScanPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Two-character operators come before their one-character prefixes so the
    // first match is always the longest one.
    static ref PATTERNS: Vec<ScanPattern> = vec![
        ScanPattern { regex: Regex::new(r"\A[ \t\n\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        ScanPattern { regex: Regex::new("\\A\"[^\"]*\"?").unwrap(), handler: string_handler },
        ScanPattern { regex: Regex::new(r"\A0x[0-9a-fA-F]*").unwrap(), handler: hex_handler },
        ScanPattern { regex: Regex::new(r"\A0b[01]*").unwrap(), handler: binary_handler },
        ScanPattern { regex: Regex::new(r"\A[0-9]+(\.[0-9]*)?").unwrap(), handler: number_handler },
        ScanPattern { regex: Regex::new(r"\A[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        ScanPattern { regex: Regex::new(r"\A\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals) },
        ScanPattern { regex: Regex::new(r"\A\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        ScanPattern { regex: Regex::new(r"\A->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow) },
        ScanPattern { regex: Regex::new(r"\A-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals) },
        ScanPattern { regex: Regex::new(r"\A-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
        ScanPattern { regex: Regex::new(r"\A\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AsteriskEquals) },
        ScanPattern { regex: Regex::new(r"\A\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk) },
        ScanPattern { regex: Regex::new(r"\A/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals) },
        ScanPattern { regex: Regex::new(r"\A/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        ScanPattern { regex: Regex::new(r"\A%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals) },
        ScanPattern { regex: Regex::new(r"\A%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
        ScanPattern { regex: Regex::new(r"\A==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqualsEquals) },
        ScanPattern { regex: Regex::new(r"\A=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        ScanPattern { regex: Regex::new(r"\A!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::BangEquals) },
        ScanPattern { regex: Regex::new(r"\A!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang) },
        ScanPattern { regex: Regex::new(r"\A<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThanEquals) },
        ScanPattern { regex: Regex::new(r"\A<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan) },
        ScanPattern { regex: Regex::new(r"\A>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThanEquals) },
        ScanPattern { regex: Regex::new(r"\A>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan) },
        ScanPattern { regex: Regex::new(r"\A\?\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::QuestionQuestion) },
        ScanPattern { regex: Regex::new(r"\A\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question) },
        ScanPattern { regex: Regex::new(r"\A::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColon) },
        ScanPattern { regex: Regex::new(r"\A:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonEquals) },
        ScanPattern { regex: Regex::new(r"\A:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        ScanPattern { regex: Regex::new(r"\A\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        ScanPattern { regex: Regex::new(r"\A\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        ScanPattern { regex: Regex::new(r"\A\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBrace) },
        ScanPattern { regex: Regex::new(r"\A\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBrace) },
        ScanPattern { regex: Regex::new(r"\A;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        ScanPattern { regex: Regex::new(r"\A,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
    ];
}

/// Pull-based scanner over an immutable source buffer. Produces one token per
/// call to [`Lexer::next_token`] and never fails: bad input becomes an
/// `Error` token and the end of input is an endless run of `EOF` tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Token {
        'scan: loop {
            let start = self.pos;
            let remainder = self.remainder();

            let Some(character) = remainder.chars().next() else {
                return MK_TOKEN!(TokenKind::EOF, TokenValue::None, Span::new(start, start));
            };

            for pattern in PATTERNS.iter() {
                if let Some(matched) = pattern.regex.find(remainder) {
                    let end = start + matched.end();
                    let token = (pattern.handler)(matched.as_str(), Span::new(start, end));
                    self.pos = end;

                    match token {
                        Some(token) => return token,
                        None => continue 'scan,
                    }
                }
            }

            let end = start + character.len_utf8();
            self.pos = end;
            return MK_TOKEN!(
                TokenKind::Error,
                TokenValue::Error(ErrorImpl::UnrecognisedCharacter { character }),
                Span::new(start, end)
            );
        }
    }

    /// Byte offset of the next character to scan.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to an offset previously returned by
    /// [`Lexer::position`].
    pub fn rewind(&mut self, position: usize) {
        self.pos = position.min(self.source.len());
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// The unscanned tail of the source.
    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }
}

fn skip_handler(_matched: &str, _span: Span) -> Option<Token> {
    None
}

fn string_handler(matched: &str, span: Span) -> Option<Token> {
    if matched.len() < 2 || !matched.ends_with('"') {
        return Some(MK_TOKEN!(
            TokenKind::Error,
            TokenValue::Error(ErrorImpl::UnterminatedString),
            span
        ));
    }

    let text = &matched[1..matched.len() - 1];
    Some(MK_TOKEN!(TokenKind::String, TokenValue::Text(text.to_string()), span))
}

fn hex_handler(matched: &str, span: Span) -> Option<Token> {
    let value = integer_value(&matched[2..], 16);
    Some(MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(value), span))
}

fn binary_handler(matched: &str, span: Span) -> Option<Token> {
    let value = integer_value(&matched[2..], 2);
    Some(MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(value), span))
}

fn number_handler(matched: &str, span: Span) -> Option<Token> {
    if matched.contains('.') {
        // the pattern only admits `digits.digits*`, which always parses
        let value = matched.parse::<f64>().unwrap_or_default();
        return Some(MK_TOKEN!(TokenKind::Float, TokenValue::Float(value), span));
    }

    let value = integer_value(matched, 10);
    Some(MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(value), span))
}

fn symbol_handler(matched: &str, span: Span) -> Option<Token> {
    Some(MK_TOKEN!(
        TokenKind::Identifier,
        TokenValue::Text(matched.to_string()),
        span
    ))
}

/// Folds a digit run into an `i64`, wrapping around on overflow.
fn integer_value(digits: &str, radix: u32) -> i64 {
    digits
        .chars()
        .filter_map(|digit| digit.to_digit(radix))
        .fold(0i64, |value, digit| {
            value
                .wrapping_mul(radix as i64)
                .wrapping_add(digit as i64)
        })
}

/// Scans the whole source, stopping after the first `EOF` or `Error` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let kind = token.kind;
        tokens.push(token);

        if kind == TokenKind::EOF || kind == TokenKind::Error {
            return tokens;
        }
    }
}
