use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{
    ast::{same_list, same_optional, Node},
    statements::Statement,
    types::Type,
};

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Identifier(String),
    /// Text between the quotes, verbatim.
    String(String),
    Function(FunctionLiteral),
    Integer(i64),
    Float(f64),
    Binary(BinaryExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression { kind, span }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match &self.kind {
            ExpressionKind::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionLiteral> {
        match &self.kind {
            ExpressionKind::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Like `Display`, but every binary node is wrapped in parentheses to
    /// show how the operators were grouped. The result is not valid source.
    pub fn grouped(&self) -> String {
        match &self.kind {
            ExpressionKind::Binary(binary) => format!(
                "({} {} {})",
                binary.lhs.grouped(),
                binary.operator,
                binary.rhs.grouped()
            ),
            ExpressionKind::Function(function) => {
                function.render(Parameter::grouped, Statement::grouped)
            }
            _ => self.to_string(),
        }
    }
}

impl Node for Expression {
    fn get_span(&self) -> &Span {
        &self.span
    }

    fn same_shape(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ExpressionKind::Identifier(lhs), ExpressionKind::Identifier(rhs)) => lhs == rhs,
            (ExpressionKind::String(lhs), ExpressionKind::String(rhs)) => lhs == rhs,
            (ExpressionKind::Integer(lhs), ExpressionKind::Integer(rhs)) => lhs == rhs,
            (ExpressionKind::Float(lhs), ExpressionKind::Float(rhs)) => lhs == rhs,
            (ExpressionKind::Function(lhs), ExpressionKind::Function(rhs)) => lhs.same_shape(rhs),
            (ExpressionKind::Binary(lhs), ExpressionKind::Binary(rhs)) => {
                lhs.operator == rhs.operator
                    && lhs.lhs.same_shape(&rhs.lhs)
                    && lhs.rhs.same_shape(&rhs.rhs)
            }
            _ => false,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExpressionKind::Identifier(name) => write!(f, "{}", name),
            ExpressionKind::String(text) => write!(f, "\"{}\"", text),
            // the scanner has no sign, so wrapped values go back out as hex
            ExpressionKind::Integer(value) if *value < 0 => write!(f, "0x{:x}", value),
            ExpressionKind::Integer(value) => write!(f, "{}", value),
            // too large for an f64; a literal just past the range overflows again
            ExpressionKind::Float(value) if value.is_infinite() => {
                write!(f, "1{}.0", "0".repeat(f64::MAX_10_EXP as usize + 1))
            }
            ExpressionKind::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
            ExpressionKind::Function(function) => write!(f, "{}", function),
            ExpressionKind::Binary(binary) => write!(f, "{}", binary),
        }
    }
}

// OPERATORS

/// `lhs operator rhs`, where the operator is one of the binary operator
/// token kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub lhs: Box<Expression>,
    pub operator: TokenKind,
    pub rhs: Box<Expression>,
}

impl Display for BinaryExpr {
    // Printed flat: every tree the parser builds regroups the same way when
    // read back.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

// FUNCTIONS

/// `(params) -> return_type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub params: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Vec<Statement>,
}

impl FunctionLiteral {
    fn same_shape(&self, other: &Self) -> bool {
        same_list(&self.params, &other.params)
            && same_optional(&self.return_type, &other.return_type)
            && same_list(&self.body, &other.body)
    }

    fn render(
        &self,
        param: impl Fn(&Parameter) -> String,
        statement: impl Fn(&Statement) -> String,
    ) -> String {
        let params = self.params.iter().map(param).collect::<Vec<_>>().join(", ");
        let mut rendered = format!("({})", params);

        if let Some(return_type) = &self.return_type {
            rendered.push_str(&format!(" -> {}", return_type));
        }

        if self.body.is_empty() {
            rendered.push_str(" {}");
        } else {
            let body = self.body.iter().map(statement).collect::<Vec<_>>().join("; ");
            rendered.push_str(&format!(" {{ {} }}", body));
        }

        rendered
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.render(|param| param.to_string(), |statement| statement.to_string());
        write!(f, "{}", rendered)
    }
}

/// A function parameter. Always has a type, a default value, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub span: Span,
    pub ty: Option<Type>,
    pub default: Option<Expression>,
}

impl Node for Parameter {
    fn get_span(&self) -> &Span {
        &self.span
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.name == other.name
            && same_optional(&self.ty, &other.ty)
            && same_optional(&self.default, &other.default)
    }
}

impl Parameter {
    fn render(&self, expression: impl Fn(&Expression) -> String) -> String {
        match (&self.ty, &self.default) {
            (Some(ty), Some(default)) => format!("{}: {} = {}", self.name, ty, expression(default)),
            (Some(ty), None) => format!("{}: {}", self.name, ty),
            (None, Some(default)) => format!("{} := {}", self.name, expression(default)),
            (None, None) => self.name.clone(),
        }
    }

    pub fn grouped(&self) -> String {
        self.render(Expression::grouped)
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(|expression| expression.to_string()))
    }
}
