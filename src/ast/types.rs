//! Type annotations.
//!
//! Types are written either as a bare name or as `*` followed by another
//! type. They carry no meaning until a later stage resolves the names.
//!
//! Pointer chains can be arbitrarily long, so every walk over a chain is a
//! loop rather than a recursion, including clone, comparison and drop.

use std::{fmt::Display, mem};

use crate::Span;

use super::ast::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// A named type such as `int`.
    UserDefined(String),
    /// `*T`, nested to any depth.
    Pointer(Box<Type>),
}

#[derive(Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

impl Type {
    /// `*inner`, spanning from the star to the end of `inner`.
    pub fn pointer(star: Span, inner: Type) -> Type {
        Type {
            span: star.to(inner.span),
            kind: TypeKind::Pointer(Box::new(inner)),
        }
    }

    /// Follows the pointer chain down to the named type at its bottom,
    /// counting the pointers on the way.
    pub fn innermost(&self) -> (usize, &Type) {
        let mut depth = 0;
        let mut current = self;

        while let TypeKind::Pointer(inner) = &current.kind {
            depth += 1;
            current = inner;
        }

        (depth, current)
    }

    /// Number of `*` in front of the innermost named type.
    pub fn pointer_depth(&self) -> usize {
        self.innermost().0
    }

    /// The name at the bottom of a pointer chain.
    pub fn base_name(&self) -> &str {
        match &self.innermost().1.kind {
            TypeKind::UserDefined(name) => name,
            TypeKind::Pointer(_) => "",
        }
    }
}

impl Clone for Type {
    fn clone(&self) -> Self {
        let mut spans = vec![];
        let mut current = self;

        while let TypeKind::Pointer(inner) = &current.kind {
            spans.push(current.span);
            current = inner;
        }

        // `current` is a named type here, so cloning its kind is shallow
        let base = Type {
            kind: current.kind.clone(),
            span: current.span,
        };

        spans.into_iter().rev().fold(base, |inner, span| Type {
            kind: TypeKind::Pointer(Box::new(inner)),
            span,
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);

        loop {
            if lhs.span != rhs.span {
                return false;
            }

            match (&lhs.kind, &rhs.kind) {
                (TypeKind::Pointer(lhs_inner), TypeKind::Pointer(rhs_inner)) => {
                    lhs = lhs_inner;
                    rhs = rhs_inner;
                }
                (TypeKind::UserDefined(lhs_name), TypeKind::UserDefined(rhs_name)) => {
                    return lhs_name == rhs_name
                }
                _ => return false,
            }
        }
    }
}

impl Drop for Type {
    fn drop(&mut self) {
        let mut kind = mem::replace(&mut self.kind, TypeKind::UserDefined(String::new()));

        // unlink one level at a time so each box drops with a flat kind
        while let TypeKind::Pointer(mut inner) = kind {
            kind = mem::replace(&mut inner.kind, TypeKind::UserDefined(String::new()));
        }
    }
}

impl Node for Type {
    fn get_span(&self) -> &Span {
        &self.span
    }

    fn same_shape(&self, other: &Self) -> bool {
        let (lhs_depth, lhs) = self.innermost();
        let (rhs_depth, rhs) = other.innermost();

        lhs_depth == rhs_depth
            && match (&lhs.kind, &rhs.kind) {
                (TypeKind::UserDefined(lhs), TypeKind::UserDefined(rhs)) => lhs == rhs,
                _ => false,
            }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (depth, innermost) = self.innermost();

        write!(f, "{}", "*".repeat(depth))?;
        match &innermost.kind {
            TypeKind::UserDefined(name) => write!(f, "{}", name),
            TypeKind::Pointer(_) => Ok(()),
        }
    }
}
