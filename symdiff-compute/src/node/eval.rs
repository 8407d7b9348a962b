use crate::{
    ctxt::Ctxt,
    error::{kind::UnboundVariable, Error},
    scalar::Scalar,
};
use super::Node;

impl<T: Scalar> Node<T> {
    /// Evaluates the tree, using `ctxt` to look up the values of variables.
    ///
    /// Returns an [`UnboundVariable`] error for the first variable (from left to right) that has
    /// no value in the context. Arithmetic follows the native semantics of the scalar type, so
    /// dividing by zero produces an infinity or `NaN` instead of an error.
    pub fn evaluate(&self, ctxt: &Ctxt<T>) -> Result<T, Error> {
        Ok(match self {
            Self::Const(value) => *value,
            Self::Var(name) => ctxt.get_var(name)
                .ok_or_else(|| Error::spanless(UnboundVariable { name: name.clone() }))?,
            Self::Add(left, right) => left.evaluate(ctxt)? + right.evaluate(ctxt)?,
            Self::Subtract(left, right) => left.evaluate(ctxt)? - right.evaluate(ctxt)?,
            Self::Multiply(left, right) => left.evaluate(ctxt)? * right.evaluate(ctxt)?,
            Self::Divide(left, right) => left.evaluate(ctxt)? / right.evaluate(ctxt)?,
            Self::Power(base, exponent) => base.evaluate(ctxt)?.pow(exponent.evaluate(ctxt)?),
            Self::Negate(arg) => -arg.evaluate(ctxt)?,
            Self::Sin(arg) => arg.evaluate(ctxt)?.sin(),
            Self::Cos(arg) => arg.evaluate(ctxt)?.cos(),
            Self::Ln(arg) => arg.evaluate(ctxt)?.ln(),
            Self::Exp(arg) => arg.evaluate(ctxt)?.exp(),
        })
    }
}
