use std::fmt::{Debug, Display};

use crate::Span;

/// Node Trait
///
/// Defines the behavior shared by every node of the tree.
pub trait Node: Debug + Display {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Compares two trees by shape and literal values, ignoring spans.
    fn same_shape(&self, other: &Self) -> bool;
}

/// Compares two optional nodes by shape.
pub fn same_optional<T: Node>(lhs: &Option<T>, rhs: &Option<T>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.same_shape(rhs),
        (None, None) => true,
        _ => false,
    }
}

/// Compares two node lists by shape, element by element.
pub fn same_list<T: Node>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(lhs, rhs)| lhs.same_shape(rhs))
}
