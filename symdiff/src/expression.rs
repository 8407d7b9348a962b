use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    ops::{Add, BitXor, Div, Mul, Neg, Sub},
    str::FromStr,
};
use symdiff_compute::{Ctxt, Node, Scalar};
use symdiff_error::Error;
use symdiff_parser::parser::Parser;

/// An expression that exclusively owns its tree.
///
/// Cloning an [`Expression`] deep-copies the tree, and every operation that produces a new tree
/// (the arithmetic operators, [`Expression::differentiate`], [`Expression::substitute`], ...)
/// returns a new [`Expression`], leaving its operands untouched. The tree can be inspected through
/// [`Expression::node`], but never modified in place.
///
/// The `^` operator builds a power, like [`Expression::pow`]:
///
/// ```
/// use symdiff::Expression;
///
/// let x = Expression::<f64>::variable("x");
/// let expr = (x.clone() ^ Expression::constant(2.0)) + x.sin();
/// assert_eq!(expr.to_string(), "((x ^ 2) + sin(x))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<T> {
    root: Node<T>,
}

impl<T> Expression<T> {
    /// Creates an expression made of a single constant.
    pub fn constant(value: T) -> Self {
        Self { root: Node::constant(value) }
    }

    /// Creates an expression made of a single variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Self { root: Node::var(name) }
    }

    /// Returns the root of the tree.
    pub fn node(&self) -> &Node<T> {
        &self.root
    }

    /// Consumes the expression, returning its tree.
    pub fn into_node(self) -> Node<T> {
        self.root
    }

    /// Returns the names of the free variables in the expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.root.variables()
    }

    pub fn sin(self) -> Self {
        Self { root: Node::sin(self.root) }
    }

    pub fn cos(self) -> Self {
        Self { root: Node::cos(self.root) }
    }

    /// The natural logarithm of the expression.
    pub fn ln(self) -> Self {
        Self { root: Node::ln(self.root) }
    }

    pub fn exp(self) -> Self {
        Self { root: Node::exp(self.root) }
    }

    /// Raises the expression to the power `exponent`. Equivalent to the `^` operator.
    pub fn pow(self, exponent: Self) -> Self {
        Self { root: Node::pow(self.root, exponent.root) }
    }
}

impl<T: Scalar> Expression<T> {
    /// Parses the first expression in `text`; anything after it is ignored, so `2 + 3) garbage`
    /// parses as `2 + 3`. Use [`Expression::parse_full`] to reject trailing input.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Parser::new(text).try_parse::<T>().map(Self::from)
    }

    /// Parses `text`, which must contain exactly one expression.
    pub fn parse_full(text: &str) -> Result<Self, Error> {
        Parser::new(text).try_parse_full::<T>().map(Self::from)
    }

    /// Evaluates the expression, using `ctxt` to look up the values of variables.
    pub fn evaluate(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        self.root.evaluate(ctxt)
    }

    /// Returns the (unsimplified) derivative of the expression with respect to `var`.
    pub fn differentiate(&self, var: &str) -> Self {
        Self { root: self.root.differentiate(var) }
    }

    /// Returns a copy of the expression with every occurrence of `var` replaced by `value`.
    pub fn substitute(&self, var: &str, value: T) -> Self {
        Self { root: self.root.substitute(var, value) }
    }
}

impl<T: Scalar> From<T> for Expression<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T> From<Node<T>> for Expression<T> {
    fn from(root: Node<T>) -> Self {
        Self { root }
    }
}

/// Parses with [`Expression::parse_full`].
impl<T: Scalar> FromStr for Expression<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_full(s)
    }
}

/// Renders the fully parenthesized form of the expression.
impl<T: Display> Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Implements a binary operator for owned and borrowed expressions.
macro_rules! impl_binary_op {
    ($($trait:ident :: $method:ident => $build:ident),* $(,)?) => {
        $(
            impl<T> $trait for Expression<T> {
                type Output = Expression<T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    Expression { root: Node::$build(self.root, rhs.root) }
                }
            }

            impl<T: Clone> $trait<&Expression<T>> for &Expression<T> {
                type Output = Expression<T>;

                fn $method(self, rhs: &Expression<T>) -> Self::Output {
                    Expression { root: Node::$build(self.root.clone(), rhs.root.clone()) }
                }
            }
        )*
    };
}

impl_binary_op! {
    Add::add => add,
    Sub::sub => sub,
    Mul::mul => mul,
    Div::div => div,
    BitXor::bitxor => pow,
}

impl<T> Neg for Expression<T> {
    type Output = Expression<T>;

    fn neg(self) -> Self::Output {
        Expression { root: Node::neg(self.root) }
    }
}

impl<T: Clone> Neg for &Expression<T> {
    type Output = Expression<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_build_nodes() {
        let x = Expression::<f64>::variable("x");
        let two = Expression::constant(2.0);

        assert_eq!((&x + &two).to_string(), "(x + 2)");
        assert_eq!((&x - &two).to_string(), "(x - 2)");
        assert_eq!((&x * &two).to_string(), "(x * 2)");
        assert_eq!((&x / &two).to_string(), "(x / 2)");
        assert_eq!((&x ^ &two).to_string(), "(x ^ 2)");
        assert_eq!((-&x).to_string(), "-(x)");
    }

    #[test]
    fn functions_wrap_tree() {
        let x = Expression::<f64>::variable("x");
        assert_eq!(x.clone().sin().to_string(), "sin(x)");
        assert_eq!(x.clone().cos().to_string(), "cos(x)");
        assert_eq!(x.clone().ln().to_string(), "ln(x)");
        assert_eq!(x.exp().to_string(), "exp(x)");
    }

    #[test]
    fn operands_are_untouched() {
        let x = Expression::<f64>::variable("x");
        let y = Expression::variable("y");
        let sum = &x + &y;
        assert_eq!(x, Expression::variable("x"));
        assert_eq!(sum.node(), &Node::add(Node::var("x"), Node::var("y")));
    }

    #[test]
    fn from_str_is_strict() {
        assert!("x + 1".parse::<Expression<f64>>().is_ok());
        assert!("x + 1)".parse::<Expression<f64>>().is_err());
        assert!(Expression::<f64>::parse("x + 1)").is_ok());
    }

    #[test]
    fn into_node_round_trip() {
        let expr = Expression::<f64>::parse("sin(x) * 2").unwrap();
        let node = expr.clone().into_node();
        assert_eq!(Expression::<f64>::from(node), expr);
    }
}
