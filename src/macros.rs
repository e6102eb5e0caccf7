//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a scanner handler for payload-free tokens
//!
//! These macros keep the scanner's pattern table readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (a `TokenValue`)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a scanner handler for tokens that carry no payload, such as
/// operators and delimiters. The matched text only decides the span.
///
/// # Example
///
/// ```ignore
/// ScanPattern {
///     regex: Regex::new(r"\A\+=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |_matched: &str, span: $crate::Span| {
            Some($crate::MK_TOKEN!(
                $kind,
                $crate::lexer::tokens::TokenValue::None,
                span
            ))
        }
    };
}
