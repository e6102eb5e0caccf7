use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryExpr, Expression, ExpressionKind, FunctionLiteral, Parameter},
    },
    lexer::tokens::TokenKind,
};

use super::{
    parser::{ParseResult, Parser},
    stmt::parse_statement,
    types::parse_type,
};

/// A primary expression followed by any run of binary operators.
pub fn parse_expression(parser: &mut Parser) -> ParseResult<Expression> {
    let Some(lhs) = parse_primary(parser)? else {
        return Ok(None);
    };

    parse_precedence(parser, lhs, 0)
}

/// Precedence climbing.
///
/// Folds operators of at least `min_precedence` onto `lhs`. Operators of
/// equal precedence group to the left; a tighter operator after the right
/// operand pulls that operand into a nested call first.
pub fn parse_precedence(
    parser: &mut Parser,
    lhs: Expression,
    min_precedence: u8,
) -> ParseResult<Expression> {
    let mut lhs = lhs;

    while let Some(precedence) = parser
        .current_token_kind()
        .precedence()
        .filter(|precedence| *precedence >= min_precedence)
    {
        let operator = parser.advance().kind;

        let Some(mut rhs) = parse_primary(parser)? else {
            return Ok(None);
        };

        while parser
            .current_token_kind()
            .precedence()
            .is_some_and(|next| next > precedence)
        {
            let Some(grouped) = parse_precedence(parser, rhs, precedence + 1)? else {
                return Ok(None);
            };
            rhs = grouped;
        }

        let span = lhs.get_span().to(*rhs.get_span());
        lhs = Expression::new(
            ExpressionKind::Binary(BinaryExpr {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            }),
            span,
        );
    }

    Ok(Some(lhs))
}

pub fn parse_primary(parser: &mut Parser) -> ParseResult<Expression> {
    parser.check_scan_error()?;

    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance();
            let span = token.span;
            Ok(Some(Expression::new(
                ExpressionKind::Identifier(token.into_text()),
                span,
            )))
        }
        TokenKind::String => {
            let token = parser.advance();
            let span = token.span;
            Ok(Some(Expression::new(
                ExpressionKind::String(token.into_text()),
                span,
            )))
        }
        TokenKind::Integer => {
            let token = parser.advance();
            Ok(Some(Expression::new(
                ExpressionKind::Integer(token.integer()),
                token.span,
            )))
        }
        TokenKind::Float => {
            let token = parser.advance();
            Ok(Some(Expression::new(
                ExpressionKind::Float(token.float()),
                token.span,
            )))
        }
        TokenKind::OpenParen => parse_function_literal(parser),
        kind => {
            parser.error(format!(
                "expected an expression, but got `{}` instead",
                kind
            ));
            Ok(None)
        }
    }
}

/// `( [param (, param)*] ) [-> type] { [stmt (; stmt)*] }`
///
/// A trailing separator is accepted in both lists. A missing closing
/// delimiter fails the whole literal.
pub fn parse_function_literal(parser: &mut Parser) -> ParseResult<Expression> {
    let Some(open) = parser.expect_token(TokenKind::OpenParen)? else {
        parser.error_expected(TokenKind::OpenParen);
        return Ok(None);
    };

    let mut params = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        let Some(param) = parse_param(parser)? else {
            return Ok(None);
        };
        params.push(param);

        if !parser.expect(TokenKind::Comma)? {
            break;
        }
    }

    if !parser.expect(TokenKind::CloseParen)? {
        parser.error_expected(TokenKind::CloseParen);
        return Ok(None);
    }

    let mut return_type = None;
    if parser.expect(TokenKind::Arrow)? {
        let Some(ty) = parse_type(parser)? else {
            return Ok(None);
        };
        return_type = Some(ty);
    }

    if !parser.expect(TokenKind::OpenBrace)? {
        parser.error_expected(TokenKind::OpenBrace);
        return Ok(None);
    }

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseBrace {
        let Some(statement) = parse_statement(parser)? else {
            return Ok(None);
        };
        body.push(statement);

        if !parser.expect(TokenKind::Semicolon)? {
            break;
        }
    }

    let Some(close) = parser.expect_token(TokenKind::CloseBrace)? else {
        parser.error_expected(TokenKind::CloseBrace);
        return Ok(None);
    };

    Ok(Some(Expression::new(
        ExpressionKind::Function(FunctionLiteral {
            params,
            return_type,
            body,
        }),
        open.span.to(close.span),
    )))
}

/// `name := default`, `name: type` or `name: type = default`
pub fn parse_param(parser: &mut Parser) -> ParseResult<Parameter> {
    let Some(name) = parser.expect_token(TokenKind::Identifier)? else {
        parser.error_expected(TokenKind::Identifier);
        return Ok(None);
    };
    let mut span = name.span;

    let (ty, default) = if parser.expect(TokenKind::ColonEquals)? {
        let Some(default) = parse_expression(parser)? else {
            return Ok(None);
        };
        span = span.to(*default.get_span());
        (None, Some(default))
    } else if parser.expect(TokenKind::Colon)? {
        let Some(ty) = parse_type(parser)? else {
            return Ok(None);
        };
        span = span.to(*ty.get_span());

        let mut default = None;
        if parser.expect(TokenKind::Equals)? {
            let Some(value) = parse_expression(parser)? else {
                return Ok(None);
            };
            span = span.to(*value.get_span());
            default = Some(value);
        }

        (Some(ty), default)
    } else {
        let message = format!(
            "expected either `:` or `:=`, but got `{}` instead",
            parser.current_token_kind()
        );
        parser.error(message);
        return Ok(None);
    };

    Ok(Some(Parameter {
        name: name.into_text(),
        span,
        ty,
        default,
    }))
}
