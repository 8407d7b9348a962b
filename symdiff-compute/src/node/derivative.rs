use crate::scalar::Scalar;
use super::Node;

impl<T: Scalar> Node<T> {
    /// Computes the derivative of the tree with respect to the variable `var`.
    ///
    /// The result is built structurally from the differentiation rules and is **not**
    /// simplified, so it contains terms like `(x * 0)` and `(1 * 2)`. Variables other than `var`
    /// are treated as constants.
    ///
    /// The power rule treats the exponent as a constant: `d/dx b^e = (e * b^(e - 1)) * db`. There
    /// is no `ln(b)` term, so a variable that appears only in the exponent (as in `2^x`)
    /// differentiates to zero.
    pub fn differentiate(&self, var: &str) -> Node<T> {
        match self {
            Self::Const(_) => Node::constant(T::zero()),
            Self::Var(name) if name == var => Node::constant(T::one()),
            Self::Var(_) => Node::constant(T::zero()),

            // (f + g)' = f' + g'
            Self::Add(left, right) => Node::add(left.differentiate(var), right.differentiate(var)),

            // (f - g)' = f' - g'
            Self::Subtract(left, right) => Node::sub(left.differentiate(var), right.differentiate(var)),

            // (f * g)' = f' * g + f * g'
            Self::Multiply(left, right) => Node::add(
                Node::mul(left.differentiate(var), (**right).clone()),
                Node::mul((**left).clone(), right.differentiate(var)),
            ),

            // (f / g)' = (f' * g - f * g') / g^2
            Self::Divide(left, right) => Node::div(
                Node::sub(
                    Node::mul(left.differentiate(var), (**right).clone()),
                    Node::mul((**left).clone(), right.differentiate(var)),
                ),
                Node::pow((**right).clone(), Node::constant(T::from_f64(2.0))),
            ),

            // (b^e)' = (e * b^(e - 1)) * b'
            Self::Power(base, exponent) => Node::mul(
                Node::mul(
                    (**exponent).clone(),
                    Node::pow(
                        (**base).clone(),
                        Node::sub((**exponent).clone(), Node::constant(T::one())),
                    ),
                ),
                base.differentiate(var),
            ),

            // chain rule for the rest
            Self::Negate(arg) => Node::neg(arg.differentiate(var)),
            Self::Sin(arg) => Node::mul(Node::cos((**arg).clone()), arg.differentiate(var)),
            Self::Cos(arg) => Node::mul(
                Node::neg(Node::sin((**arg).clone())),
                arg.differentiate(var),
            ),
            Self::Ln(arg) => Node::div(arg.differentiate(var), (**arg).clone()),
            Self::Exp(arg) => Node::mul(Node::exp((**arg).clone()), arg.differentiate(var)),
        }
    }
}
