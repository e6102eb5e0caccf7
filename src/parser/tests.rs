//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations and expression statements
//! - Binary expressions and precedence
//! - Function literals and parameters
//! - Pointer types
//! - Diagnostics and the fatal scan error

use super::{
    expr::parse_expression,
    parser::{parse_top_level_declaration, Parser},
    stmt::parse_statement,
    types::parse_type,
};
use crate::{
    ast::{
        ast::Node,
        expressions::{Expression, ExpressionKind},
        statements::Statement,
        types::TypeKind,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Location, Span,
};

fn parser(source: &str) -> Parser {
    Parser::new(source.to_string(), Some("test.lang".to_string()))
}

fn messages(parser: &Parser) -> Vec<String> {
    parser
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.message.clone())
        .collect()
}

fn assert_integer(expression: &Expression, expected: i64) {
    assert!(
        matches!(expression.kind, ExpressionKind::Integer(value) if value == expected),
        "expected {}, got {:?}",
        expected,
        expression.kind
    );
}

#[test]
fn test_parse_declaration() {
    let (declaration, diagnostics) = parse_top_level_declaration("x :: 42", "test.lang").unwrap();
    let declaration = declaration.unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(declaration.name, "x");
    assert!(declaration.constant);
    assert!(declaration.ty.is_none());
    assert_integer(&declaration.value, 42);
    assert_eq!(declaration.span, Span::new(0, 7));
}

#[test]
fn test_multiplication_binds_tighter() {
    let (declaration, _) = parse_top_level_declaration("x :: 1 + 2 * 3", "test.lang").unwrap();
    let value = declaration.unwrap().value;

    let sum = value.as_binary().unwrap();
    assert_eq!(sum.operator, TokenKind::Plus);
    assert_integer(&sum.lhs, 1);

    let product = sum.rhs.as_binary().unwrap();
    assert_eq!(product.operator, TokenKind::Asterisk);
    assert_integer(&product.lhs, 2);
    assert_integer(&product.rhs, 3);

    assert_eq!(value.span, Span::new(5, 14));
    assert_eq!(sum.rhs.span, Span::new(9, 14));
}

#[test]
fn test_equal_precedence_groups_left() {
    let (declaration, _) = parse_top_level_declaration("x :: 1 + 2 + 3", "test.lang").unwrap();
    let value = declaration.unwrap().value;

    let outer = value.as_binary().unwrap();
    assert_eq!(outer.operator, TokenKind::Plus);
    assert_integer(&outer.rhs, 3);

    let inner = outer.lhs.as_binary().unwrap();
    assert_integer(&inner.lhs, 1);
    assert_integer(&inner.rhs, 2);
}

#[test]
fn test_tighter_operator_first() {
    let (declaration, _) = parse_top_level_declaration("x :: 1 * 2 + 3", "test.lang").unwrap();
    let value = declaration.unwrap().value;

    let sum = value.as_binary().unwrap();
    assert_eq!(sum.operator, TokenKind::Plus);
    assert_eq!(sum.lhs.as_binary().unwrap().operator, TokenKind::Asterisk);
    assert_integer(&sum.rhs, 3);
}

#[test]
fn test_remainder_binds_tighter_than_product() {
    let mut parser = parser("a * b % c");
    let expression = parse_expression(&mut parser).unwrap().unwrap();

    let product = expression.as_binary().unwrap();
    assert_eq!(product.operator, TokenKind::Asterisk);
    assert_eq!(product.rhs.as_binary().unwrap().operator, TokenKind::Percent);
}

#[test]
fn test_assignment_is_left_associative() {
    let mut parser = parser("a = b = c");
    let expression = parse_expression(&mut parser).unwrap().unwrap();

    let outer = expression.as_binary().unwrap();
    assert_eq!(outer.operator, TokenKind::Equals);
    assert!(outer.lhs.as_binary().is_some());
    assert!(matches!(outer.rhs.kind, ExpressionKind::Identifier(ref name) if name == "c"));
}

#[test]
fn test_mixed_precedence_levels() {
    let mut parser = parser("a ?? b == c + d * e < f");
    let expression = parse_expression(&mut parser).unwrap().unwrap();

    let equality = expression.as_binary().unwrap();
    assert_eq!(equality.operator, TokenKind::EqualsEquals);
    assert_eq!(equality.lhs.as_binary().unwrap().operator, TokenKind::QuestionQuestion);

    let comparison = equality.rhs.as_binary().unwrap();
    assert_eq!(comparison.operator, TokenKind::LessThan);
    assert_eq!(comparison.lhs.as_binary().unwrap().operator, TokenKind::Plus);
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn test_expression_statement() {
    let mut parser = parser("foo");
    let statement = parse_statement(&mut parser).unwrap().unwrap();

    assert!(
        matches!(statement, Statement::Expression(Expression { kind: ExpressionKind::Identifier(ref name), .. }) if name == "foo")
    );
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn test_declaration_statement() {
    let mut parser = parser("y :: \"hi\"");
    let statement = parse_statement(&mut parser).unwrap().unwrap();

    let Statement::Declaration(declaration) = statement else {
        panic!("expected a declaration");
    };
    assert_eq!(declaration.name, "y");
    assert!(matches!(declaration.value.kind, ExpressionKind::String(ref text) if text == "hi"));
    assert_eq!(declaration.value.span, Span::new(5, 9));
}

#[test]
fn test_statement_failure_records_one_diagnostic() {
    let mut parser = parser(")");
    let statement = parse_statement(&mut parser).unwrap();

    assert!(statement.is_none());
    assert_eq!(
        messages(&parser),
        vec!["expected a statement, but got `)` instead"]
    );
    assert_eq!(parser.current_token_kind(), TokenKind::CloseParen);
}

#[test]
fn test_failed_declaration_is_rolled_back() {
    let mut parser = parser("x :: )");
    let statement = parse_statement(&mut parser).unwrap().unwrap();

    // the declaration fails at `)`, the retry reads `x` alone
    assert!(matches!(statement, Statement::Expression(_)));
    assert_eq!(*statement.get_span(), Span::new(0, 1));
    assert!(parser.diagnostics().is_empty());
    assert_eq!(parser.current_token_kind(), TokenKind::ColonColon);
}

#[test]
fn test_checkpoint_restore() {
    let mut parser = parser("a b c");
    parser.advance();
    let checkpoint = parser.checkpoint();

    parser.advance();
    parser.error("scratch");
    assert_eq!(parser.diagnostics().len(), 1);

    parser.restore(&checkpoint);
    assert!(parser.diagnostics().is_empty());
    assert_eq!(parser.current_token().span, Span::new(2, 3));
    parser.advance();
    assert_eq!(parser.current_token().span, Span::new(4, 5));
}

#[test]
fn test_expect_does_not_record() {
    let mut parser = parser("a");

    assert!(!parser.expect(TokenKind::Comma).unwrap());
    assert!(parser.diagnostics().is_empty());
    assert!(parser.expect(TokenKind::Identifier).unwrap());
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_parse_pointer_type() {
    let mut parser = parser("**T");
    let ty = parse_type(&mut parser).unwrap().unwrap();

    assert_eq!(ty.span, Span::new(0, 3));
    let TypeKind::Pointer(inner) = &ty.kind else {
        panic!("expected a pointer");
    };
    assert_eq!(inner.span, Span::new(1, 3));
    let TypeKind::Pointer(innermost) = &inner.kind else {
        panic!("expected a pointer");
    };
    assert!(matches!(innermost.kind, TypeKind::UserDefined(ref name) if name == "T"));
    assert_eq!(innermost.span, Span::new(2, 3));
}

#[test]
fn test_parse_type_failure() {
    let mut parser = parser("*,");
    let ty = parse_type(&mut parser).unwrap();

    assert!(ty.is_none());
    assert_eq!(messages(&parser), vec!["expected a type, but got `,` instead"]);
}

#[test]
fn test_parse_function_literal() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: (a: int, b := 1) -> int { a + b }", "test.lang")
            .unwrap();
    let value = declaration.unwrap().value;
    let function = value.as_function().unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(function.params.len(), 2);

    let a = &function.params[0];
    assert_eq!(a.name, "a");
    assert_eq!(a.ty.as_ref().unwrap().base_name(), "int");
    assert!(a.default.is_none());
    assert_eq!(a.span, Span::new(6, 12));

    let b = &function.params[1];
    assert_eq!(b.name, "b");
    assert!(b.ty.is_none());
    assert_integer(b.default.as_ref().unwrap(), 1);

    let return_type = function.return_type.as_ref().unwrap();
    assert!(matches!(return_type.kind, TypeKind::UserDefined(ref name) if name == "int"));

    assert_eq!(function.body.len(), 1);
    assert!(matches!(function.body[0], Statement::Expression(_)));
    assert_eq!(value.span, Span::new(5, 38));
}

#[test]
fn test_param_with_type_and_default() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: (p: *int = 0) {}", "test.lang").unwrap();
    let value = declaration.unwrap().value;
    let param = &value.as_function().unwrap().params[0];

    assert!(diagnostics.is_empty());
    assert_eq!(param.ty.as_ref().unwrap().pointer_depth(), 1);
    assert_integer(param.default.as_ref().unwrap(), 0);
}

#[test]
fn test_function_body_statements() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: () { a :: 1; b :: a * 2; b; }", "test.lang").unwrap();
    let value = declaration.unwrap().value;
    let function = value.as_function().unwrap();

    assert!(diagnostics.is_empty());
    assert!(function.params.is_empty());
    assert!(function.return_type.is_none());
    assert_eq!(function.body.len(), 3);
    assert!(matches!(function.body[0], Statement::Declaration(_)));
    assert!(matches!(function.body[1], Statement::Declaration(_)));
    assert!(matches!(function.body[2], Statement::Expression(_)));
}

#[test]
fn test_nested_function_literal() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: () { g :: (x: int) { x } }", "test.lang").unwrap();
    let value = declaration.unwrap().value;

    assert!(diagnostics.is_empty());
    let Statement::Declaration(inner) = &value.as_function().unwrap().body[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(inner.value.as_function().unwrap().params[0].name, "x");
}

#[test]
fn test_param_without_introducer() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: (a int) {}", "test.lang").unwrap();

    assert!(declaration.is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected either `:` or `:=`, but got `<ident>` instead"
    );
    assert_eq!(diagnostics[0].span, Span::new(8, 11));
}

#[test]
fn test_missing_close_brace() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: () { a", "test.lang").unwrap();

    assert!(declaration.is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected `}`, but got `<eof>` instead"
    );
    assert_eq!(diagnostics[0].location, Location { line: 1, column: 12 });
}

#[test]
fn test_missing_close_paren() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("f :: (a: int {}", "test.lang").unwrap();

    assert!(declaration.is_none());
    assert_eq!(
        diagnostics[0].message,
        "expected `)`, but got `{` instead"
    );
}

#[test]
fn test_missing_expression() {
    let (declaration, diagnostics) = parse_top_level_declaration("x ::", "test.lang").unwrap();

    assert!(declaration.is_none());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected an expression, but got `<eof>` instead"
    );
    assert_eq!(diagnostics[0].span, Span::new(4, 4));
}

#[test]
fn test_missing_double_colon() {
    let (declaration, diagnostics) = parse_top_level_declaration("x = 1", "test.lang").unwrap();

    assert!(declaration.is_none());
    assert_eq!(
        diagnostics[0].message,
        "expected `::`, but got `=` instead"
    );
}

#[test]
fn test_diagnostic_location_on_later_line() {
    let (_, diagnostics) = parse_top_level_declaration("f :: () {\n  a;\n  )\n}", "test.lang").unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "expected a statement, but got `)` instead"
    );
    assert_eq!(diagnostics[0].location, Location { line: 3, column: 3 });
    assert_eq!(
        diagnostics[0].to_string(),
        "test.lang:3:3: error: expected a statement, but got `)` instead"
    );
}

#[test]
fn test_unrecognised_character_is_fatal() {
    let error = parse_top_level_declaration("x :: $", "test.lang").unwrap_err();

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnrecognisedCharacter { character: '$' }
    );
    assert_eq!(error.get_span(), Span::new(5, 6));
    assert_eq!(error.get_location(), Location { line: 1, column: 6 });
    assert_eq!(error.to_string(), "test.lang:1:6: error: unexpected character `$`");
}

#[test]
fn test_error_token_in_expect_is_fatal() {
    let error = parse_top_level_declaration("x # 1", "test.lang").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_span(), Span::new(2, 3));
}

#[test]
fn test_unterminated_string_is_fatal() {
    let error = parse_top_level_declaration("s :: \"abc", "test.lang").unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::UnterminatedString);
    assert_eq!(error.get_span(), Span::new(5, 9));
}

#[test]
fn test_fatal_error_inside_function_body() {
    let result = parse_top_level_declaration("f :: () { a :: 1; @ }", "test.lang");

    assert!(result.is_err());
}

#[test]
fn test_trailing_input_is_ignored() {
    let (declaration, diagnostics) =
        parse_top_level_declaration("x :: 1 y :: 2", "test.lang").unwrap();

    assert!(diagnostics.is_empty());
    assert_integer(&declaration.unwrap().value, 1);
}

#[test]
fn test_round_trip() {
    let mut sources: Vec<String> = [
        "x :: 1 + 2 * 3",
        "x :: a - b - c % d",
        "f :: (a: int, b := 1) -> int { a + b }",
        "f :: (p: **char = s, n := 0x10) -> *void { q :: p; q == n ?? 2.5 }",
        "s :: \"hello world\"",
        "big :: 0xffffffffffffffff",
        "g :: () {}",
    ]
    .iter()
    .map(|source| source.to_string())
    .collect();
    // overflows f64 to infinity
    sources.push(format!("x :: 1{}.0", "0".repeat(400)));

    for source in &sources {
        let (first, diagnostics) = parse_top_level_declaration(source, "test.lang").unwrap();
        assert!(diagnostics.is_empty(), "{}", source);
        let first = first.unwrap();

        let printed = first.to_string();
        let (second, diagnostics) = parse_top_level_declaration(&printed, "test.lang").unwrap();
        assert!(diagnostics.is_empty(), "{}", printed);

        assert!(first.same_shape(&second.unwrap()), "{} -> {}", source, printed);
    }
}

#[test]
fn test_overflowing_float_is_infinite() {
    let source = format!("x :: 1{}.0", "0".repeat(400));
    let (declaration, diagnostics) = parse_top_level_declaration(&source, "test.lang").unwrap();
    assert!(diagnostics.is_empty());

    let declaration = declaration.unwrap();
    match &declaration.value.kind {
        ExpressionKind::Float(value) => assert!(value.is_infinite()),
        kind => panic!("expected a float, got {:?}", kind),
    }
    assert!(!declaration.to_string().contains("inf"));
}

#[test]
fn test_deep_pointer_chain() {
    let depth = 100_000;
    let source = format!("f :: (a: {}T) {{}}", "*".repeat(depth));
    let (declaration, diagnostics) = parse_top_level_declaration(&source, "test.lang").unwrap();
    assert!(diagnostics.is_empty());

    let declaration = declaration.unwrap();
    let function = declaration.value.as_function().unwrap();
    let ty = function.params[0].ty.as_ref().unwrap();

    assert!(ty.pointer_depth() == depth);
    assert!(ty.base_name() == "T");
    assert!(ty.span == Span::new(9, 9 + depth + 1));

    let copy = ty.clone();
    assert!(copy == *ty);
    drop(copy);

    let printed = declaration.to_string();
    let (reparsed, diagnostics) = parse_top_level_declaration(&printed, "test.lang").unwrap();
    assert!(diagnostics.is_empty());
    assert!(declaration.same_shape(&reparsed.unwrap()));
}
