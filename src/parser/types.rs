use crate::{
    ast::types::{Type, TypeKind},
    lexer::tokens::TokenKind,
};

use super::parser::{ParseResult, Parser};

/// A named type, or `*` followed by another type.
///
/// Leading stars are collected in a loop and wrapped around the name
/// afterwards, so the depth of a pointer chain is not bounded by the stack.
pub fn parse_type(parser: &mut Parser) -> ParseResult<Type> {
    let mut stars = vec![];

    loop {
        parser.check_scan_error()?;

        if parser.current_token_kind() != TokenKind::Asterisk {
            break;
        }
        stars.push(parser.advance().span);
    }

    let named = match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance();
            let span = token.span;
            Type {
                kind: TypeKind::UserDefined(token.into_text()),
                span,
            }
        }
        kind => {
            parser.error(format!("expected a type, but got `{}` instead", kind));
            return Ok(None);
        }
    };

    Ok(Some(
        stars
            .into_iter()
            .rev()
            .fold(named, |inner, star| Type::pointer(star, inner)),
    ))
}
