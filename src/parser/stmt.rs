use crate::{
    ast::{
        ast::Node,
        statements::{Declaration, Statement},
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expression,
    parser::{ParseResult, Parser},
};

/// `name :: value`
///
/// Records a diagnostic and yields `None` on failure without undoing what it
/// consumed; callers that want to try something else restore a checkpoint.
pub fn parse_declaration(parser: &mut Parser) -> ParseResult<Declaration> {
    let Some(name) = parser.expect_token(TokenKind::Identifier)? else {
        parser.error_expected(TokenKind::Identifier);
        return Ok(None);
    };

    if !parser.expect(TokenKind::ColonColon)? {
        parser.error_expected(TokenKind::ColonColon);
        return Ok(None);
    }

    let Some(value) = parse_expression(parser)? else {
        return Ok(None);
    };

    let span = name.span.to(*value.get_span());
    Ok(Some(Declaration {
        name: name.into_text(),
        span,
        ty: None,
        value,
        constant: true,
    }))
}

/// A declaration if one parses from here, otherwise a bare expression.
///
/// Neither attempt leaves diagnostics behind when it fails. If both fail,
/// the parser is put back at the start of the statement and a single
/// diagnostic is recorded there.
pub fn parse_statement(parser: &mut Parser) -> ParseResult<Statement> {
    let start = parser.checkpoint();

    if let Some(declaration) = parse_declaration(parser)? {
        return Ok(Some(Statement::Declaration(declaration)));
    }
    parser.restore(&start);

    if let Some(expression) = parse_expression(parser)? {
        return Ok(Some(Statement::Expression(expression)));
    }
    parser.restore(&start);

    let message = format!(
        "expected a statement, but got `{}` instead",
        parser.current_token_kind()
    );
    parser.error(message);
    Ok(None)
}
