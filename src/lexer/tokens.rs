use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::ErrorImpl, Span};

/// Display name, operator flag and precedence of a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub name: &'static str,
    pub precedence: Option<u8>,
}

impl TokenInfo {
    const fn plain(name: &'static str) -> Self {
        TokenInfo {
            name,
            precedence: None,
        }
    }

    const fn binary(name: &'static str, precedence: u8) -> Self {
        TokenInfo {
            name,
            precedence: Some(precedence),
        }
    }
}

lazy_static! {
    /// The single source of truth for token names, operator-ness and precedence.
    pub static ref TOKEN_TABLE: HashMap<TokenKind, TokenInfo> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Identifier, TokenInfo::plain("<ident>"));
        map.insert(TokenKind::Integer, TokenInfo::plain("<int>"));
        map.insert(TokenKind::Float, TokenInfo::plain("<float>"));
        map.insert(TokenKind::String, TokenInfo::plain("<string>"));
        map.insert(TokenKind::StringStart, TokenInfo::plain("<string_start>"));
        map.insert(TokenKind::StringEnd, TokenInfo::plain("<string_end>"));
        map.insert(TokenKind::StringMiddle, TokenInfo::plain("<string_middle>"));

        map.insert(TokenKind::Plus, TokenInfo::binary("+", 5));
        map.insert(TokenKind::PlusEquals, TokenInfo::binary("+=", 1));
        map.insert(TokenKind::Minus, TokenInfo::binary("-", 5));
        map.insert(TokenKind::MinusEquals, TokenInfo::binary("-=", 1));
        map.insert(TokenKind::Arrow, TokenInfo::plain("->"));
        map.insert(TokenKind::Asterisk, TokenInfo::binary("*", 6));
        map.insert(TokenKind::AsteriskEquals, TokenInfo::binary("*=", 1));
        map.insert(TokenKind::Slash, TokenInfo::binary("/", 6));
        map.insert(TokenKind::SlashEquals, TokenInfo::binary("/=", 1));
        map.insert(TokenKind::Percent, TokenInfo::binary("%", 7));
        map.insert(TokenKind::PercentEquals, TokenInfo::binary("%=", 1));
        map.insert(TokenKind::Equals, TokenInfo::binary("=", 1));
        map.insert(TokenKind::EqualsEquals, TokenInfo::binary("==", 2));
        map.insert(TokenKind::Bang, TokenInfo::plain("!"));
        map.insert(TokenKind::BangEquals, TokenInfo::binary("!=", 2));
        map.insert(TokenKind::LessThan, TokenInfo::binary("<", 3));
        map.insert(TokenKind::LessThanEquals, TokenInfo::binary("<=", 3));
        map.insert(TokenKind::GreaterThan, TokenInfo::binary(">", 3));
        map.insert(TokenKind::GreaterThanEquals, TokenInfo::binary(">=", 3));
        map.insert(TokenKind::Question, TokenInfo::plain("?"));
        map.insert(TokenKind::QuestionQuestion, TokenInfo::binary("??", 4));

        map.insert(TokenKind::OpenParen, TokenInfo::plain("("));
        map.insert(TokenKind::CloseParen, TokenInfo::plain(")"));
        map.insert(TokenKind::OpenBrace, TokenInfo::plain("{"));
        map.insert(TokenKind::CloseBrace, TokenInfo::plain("}"));
        map.insert(TokenKind::Semicolon, TokenInfo::plain(";"));
        map.insert(TokenKind::Colon, TokenInfo::plain(":"));
        map.insert(TokenKind::ColonColon, TokenInfo::plain("::"));
        map.insert(TokenKind::ColonEquals, TokenInfo::plain(":="));
        map.insert(TokenKind::Comma, TokenInfo::plain(","));
        map.insert(TokenKind::Error, TokenInfo::plain("<error>"));
        map.insert(TokenKind::EOF, TokenInfo::plain("<eof>"));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Float,
    String,
    // Reserved for string interpolation, never produced by the scanner.
    StringStart,
    StringEnd,
    StringMiddle,

    Plus,
    PlusEquals,
    Minus,
    MinusEquals,
    Arrow,
    Asterisk,
    AsteriskEquals,
    Slash,
    SlashEquals,
    Percent,
    PercentEquals,
    Equals,
    EqualsEquals,
    Bang,
    BangEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    Question,
    QuestionQuestion,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Colon,
    ColonColon,
    ColonEquals,
    Comma,

    Error,
    EOF,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 39] = [
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::StringStart,
        TokenKind::StringEnd,
        TokenKind::StringMiddle,
        TokenKind::Plus,
        TokenKind::PlusEquals,
        TokenKind::Minus,
        TokenKind::MinusEquals,
        TokenKind::Arrow,
        TokenKind::Asterisk,
        TokenKind::AsteriskEquals,
        TokenKind::Slash,
        TokenKind::SlashEquals,
        TokenKind::Percent,
        TokenKind::PercentEquals,
        TokenKind::Equals,
        TokenKind::EqualsEquals,
        TokenKind::Bang,
        TokenKind::BangEquals,
        TokenKind::LessThan,
        TokenKind::LessThanEquals,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanEquals,
        TokenKind::Question,
        TokenKind::QuestionQuestion,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::ColonColon,
        TokenKind::ColonEquals,
        TokenKind::Comma,
        TokenKind::Error,
        TokenKind::EOF,
    ];

    fn info(&self) -> TokenInfo {
        TOKEN_TABLE
            .get(self)
            .copied()
            .unwrap_or(TokenInfo::plain("<unknown>"))
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn is_binary_operator(&self) -> bool {
        self.info().precedence.is_some()
    }

    /// Binding strength of a binary operator; `None` for every other kind.
    pub fn precedence(&self) -> Option<u8> {
        self.info().precedence
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload of a token. Which variant is populated depends on the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Text(String),
    Integer(i64),
    Float(f64),
    Error(ErrorImpl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}", self.kind),
            TokenValue::Text(text) => write!(f, "{} ({})", self.kind, text),
            TokenValue::Integer(value) => write!(f, "{} ({})", self.kind, value),
            TokenValue::Float(value) => write!(f, "{} ({})", self.kind, value),
            TokenValue::Error(error) => write!(f, "{} ({})", self.kind, error),
        }
    }
}

impl Token {
    /// Moves the text payload out of an identifier or string token.
    pub fn into_text(self) -> String {
        match self.value {
            TokenValue::Text(text) => text,
            _ => String::new(),
        }
    }

    pub fn integer(&self) -> i64 {
        match self.value {
            TokenValue::Integer(value) => value,
            _ => 0,
        }
    }

    pub fn float(&self) -> f64 {
        match self.value {
            TokenValue::Float(value) => value,
            _ => 0.0,
        }
    }

    pub fn debug(&self) {
        println!("{:>8}  {}", self.span.to_string(), self);
    }
}
