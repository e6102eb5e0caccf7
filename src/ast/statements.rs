use std::fmt::Display;

use crate::Span;

use super::{
    ast::{same_optional, Node},
    expressions::Expression,
    types::Type,
};

/// `name :: value`. Only constant bindings exist in the grammar, so
/// `constant` is always set and `ty` is never filled in by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub span: Span,
    pub ty: Option<Type>,
    pub value: Expression,
    pub constant: bool,
}

impl Node for Declaration {
    fn get_span(&self) -> &Span {
        &self.span
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.name == other.name
            && self.constant == other.constant
            && same_optional(&self.ty, &other.ty)
            && self.value.same_shape(&other.value)
    }
}

impl Declaration {
    fn render(&self, value: String) -> String {
        let binding = if self.constant { ":" } else { "=" };

        match &self.ty {
            Some(ty) => format!("{}: {} {} {}", self.name, ty, binding, value),
            None => format!("{} :{} {}", self.name, binding, value),
        }
    }

    /// Renders the declaration with its operators grouped; see
    /// [`Expression::grouped`].
    pub fn grouped(&self) -> String {
        self.render(self.value.grouped())
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(self.value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Expression(Expression),
}

impl Statement {
    pub fn grouped(&self) -> String {
        match self {
            Statement::Declaration(declaration) => declaration.grouped(),
            Statement::Expression(expression) => expression.grouped(),
        }
    }
}

impl Node for Statement {
    fn get_span(&self) -> &Span {
        match self {
            Statement::Declaration(declaration) => declaration.get_span(),
            Statement::Expression(expression) => expression.get_span(),
        }
    }

    fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Statement::Declaration(lhs), Statement::Declaration(rhs)) => lhs.same_shape(rhs),
            (Statement::Expression(lhs), Statement::Expression(rhs)) => lhs.same_shape(rhs),
            _ => false,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Declaration(declaration) => write!(f, "{}", declaration),
            Statement::Expression(expression) => write!(f, "{}", expression),
        }
    }
}
