//! The [`Node`] sum type, and the algorithms it carries.
//!
//! Each algorithm is a single exhaustive `match` over the variants, in its own submodule:
//!
//! - [`Node::evaluate`] (in `eval`) computes the value of the tree.
//! - [`Node::differentiate`] (in `derivative`) builds the derivative tree.
//! - [`Node::substitute`] (in `substitute`) replaces variables with constants.
//! - [`Display`] renders the fully parenthesized infix form.
//!
//! All of them recurse once per level of the tree, so the depth of a tree is limited by the
//! stack. The parser rejects input that would build a tree deeper than its depth limit, including
//! long flat chains such as `x + x + ... + x`. Trees built directly with the constructors are not
//! checked.

mod derivative;
mod eval;
mod substitute;

use std::{collections::BTreeSet, fmt::{self, Display}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single node of an expression tree.
///
/// Non-leaf nodes exclusively own their children, so cloning a node deep-copies the whole
/// subtree. [`PartialEq`] is structural equality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<T> {
    /// A numeric literal, such as `2` or `3.14`.
    Const(T),

    /// A free variable, such as `x`.
    Var(String),

    /// `left + right`
    Add(Box<Node<T>>, Box<Node<T>>),

    /// `left - right`
    Subtract(Box<Node<T>>, Box<Node<T>>),

    /// `left * right`
    Multiply(Box<Node<T>>, Box<Node<T>>),

    /// `left / right`
    Divide(Box<Node<T>>, Box<Node<T>>),

    /// `base ^ exponent`
    Power(Box<Node<T>>, Box<Node<T>>),

    /// `-arg`
    Negate(Box<Node<T>>),

    /// `sin(arg)`
    Sin(Box<Node<T>>),

    /// `cos(arg)`
    Cos(Box<Node<T>>),

    /// `ln(arg)`, the natural logarithm.
    Ln(Box<Node<T>>),

    /// `exp(arg)`
    Exp(Box<Node<T>>),
}

impl<T> Node<T> {
    pub fn constant(value: T) -> Self {
        Self::Const(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn add(left: Self, right: Self) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Self, right: Self) -> Self {
        Self::Subtract(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Self, right: Self) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    pub fn div(left: Self, right: Self) -> Self {
        Self::Divide(Box::new(left), Box::new(right))
    }

    pub fn pow(base: Self, exponent: Self) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    pub fn neg(arg: Self) -> Self {
        Self::Negate(Box::new(arg))
    }

    pub fn sin(arg: Self) -> Self {
        Self::Sin(Box::new(arg))
    }

    pub fn cos(arg: Self) -> Self {
        Self::Cos(Box::new(arg))
    }

    pub fn ln(arg: Self) -> Self {
        Self::Ln(Box::new(arg))
    }

    pub fn exp(arg: Self) -> Self {
        Self::Exp(Box::new(arg))
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Const(_) | Self::Var(_))
    }

    /// Returns an iterator over the direct children of this node, from left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        let (first, second) = match self {
            Self::Const(_) | Self::Var(_) => (None, None),
            Self::Add(left, right)
                | Self::Subtract(left, right)
                | Self::Multiply(left, right)
                | Self::Divide(left, right)
                | Self::Power(left, right) => (Some(&**left), Some(&**right)),
            Self::Negate(arg)
                | Self::Sin(arg)
                | Self::Cos(arg)
                | Self::Ln(arg)
                | Self::Exp(arg) => (Some(&**arg), None),
        };
        first.into_iter().chain(second)
    }

    /// Returns the names of the free variables in the tree, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Self::Var(name) => {
                vars.insert(name.as_str());
            },
            _ => self.children().for_each(|child| child.collect_variables(vars)),
        }
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, counting both
    /// ends. A single leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Node::depth).max().unwrap_or(0)
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(Node::node_count).sum::<usize>()
    }
}

impl<T: Clone> Node<T> {
    /// Builds a new node of the same variant as this one, with each child replaced by the result
    /// of `f`. Leaves are copied as-is.
    pub(crate) fn map_children(&self, mut f: impl FnMut(&Node<T>) -> Node<T>) -> Node<T> {
        match self {
            Self::Const(_) | Self::Var(_) => self.clone(),
            Self::Add(left, right) => Self::add(f(left), f(right)),
            Self::Subtract(left, right) => Self::sub(f(left), f(right)),
            Self::Multiply(left, right) => Self::mul(f(left), f(right)),
            Self::Divide(left, right) => Self::div(f(left), f(right)),
            Self::Power(base, exponent) => Self::pow(f(base), f(exponent)),
            Self::Negate(arg) => Self::neg(f(arg)),
            Self::Sin(arg) => Self::sin(f(arg)),
            Self::Cos(arg) => Self::cos(f(arg)),
            Self::Ln(arg) => Self::ln(f(arg)),
            Self::Exp(arg) => Self::exp(f(arg)),
        }
    }
}

/// Renders the node as a fully parenthesized infix expression: every binary operation is wrapped
/// in parentheses, and constants use the [`Display`] output of `T`.
///
/// The output parses back into an equivalent tree as long as every constant prints as a number
/// literal. Non-finite floats print as `inf`, `-inf` and `NaN`, which parse back as variables.
impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "{}", name),
            Self::Add(left, right) => write!(f, "({} + {})", left, right),
            Self::Subtract(left, right) => write!(f, "({} - {})", left, right),
            Self::Multiply(left, right) => write!(f, "({} * {})", left, right),
            Self::Divide(left, right) => write!(f, "({} / {})", left, right),
            Self::Power(base, exponent) => write!(f, "({} ^ {})", base, exponent),
            Self::Negate(arg) => write!(f, "-({})", arg),
            Self::Sin(arg) => write!(f, "sin({})", arg),
            Self::Cos(arg) => write!(f, "cos({})", arg),
            Self::Ln(arg) => write!(f, "ln({})", arg),
            Self::Exp(arg) => write!(f, "exp({})", arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn render_const() {
        assert_eq!(Node::constant(3.14).to_string(), "3.14");
        assert_eq!(Node::constant(2.0).to_string(), "2");
    }

    #[test]
    fn render_non_finite_const() {
        assert_eq!(Node::constant(f64::INFINITY).to_string(), "inf");
        assert_eq!(Node::constant(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Node::constant(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn render_binary() {
        assert_eq!(Node::add(Node::constant(2.0), Node::var("x")).to_string(), "(2 + x)");
        assert_eq!(Node::mul(Node::var("x"), Node::constant(4.0)).to_string(), "(x * 4)");
        assert_eq!(Node::pow(Node::var("x"), Node::constant(2.0)).to_string(), "(x ^ 2)");
        assert_eq!(
            Node::sub(Node::div(Node::var("a"), Node::var("b")), Node::constant(1.5)).to_string(),
            "((a / b) - 1.5)",
        );
    }

    #[test]
    fn render_unary() {
        let x = || Node::<f64>::var("x");
        assert_eq!(Node::neg(x()).to_string(), "-(x)");
        assert_eq!(Node::sin(x()).to_string(), "sin(x)");
        assert_eq!(Node::cos(x()).to_string(), "cos(x)");
        assert_eq!(Node::ln(x()).to_string(), "ln(x)");
        assert_eq!(Node::exp(Node::add(x(), Node::constant(1.0))).to_string(), "exp((x + 1))");
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let node = Node::pow(Node::constant(5.0), Node::var("y"));
        let clone = node.clone();
        assert_eq!(clone.to_string(), "(5 ^ y)");
        assert_eq!(clone, node);

        // dropping the original leaves the copy intact
        drop(node);
        assert_eq!(clone.to_string(), "(5 ^ y)");
    }

    #[test]
    fn variables_sorted_and_unique() {
        let node = Node::add(
            Node::mul(Node::<f64>::var("y"), Node::var("x")),
            Node::sin(Node::var("x")),
        );
        assert_eq!(node.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(Node::constant(1.0).variables().is_empty());
    }

    #[test]
    fn depth_and_count() {
        let leaf = Node::<f64>::var("x");
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.node_count(), 1);

        // ((x + 1) * sin(x))
        let node = Node::mul(
            Node::add(Node::var("x"), Node::constant(1.0)),
            Node::sin(Node::var("x")),
        );
        assert_eq!(node.depth(), 3);
        assert_eq!(node.node_count(), 6);
    }

    #[test]
    fn children_in_order() {
        let node = Node::div(Node::<f64>::var("a"), Node::var("b"));
        let names = node.children().map(ToString::to_string).collect::<Vec<String>>();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
        assert!(node.children().all(Node::is_leaf));
    }
}
