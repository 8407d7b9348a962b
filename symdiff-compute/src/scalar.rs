//! The numeric types that expression trees can be built over.

pub use num_complex::Complex64;
use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// The reason a numeric literal could not be converted to a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// The scalar type cannot be written as a literal at all.
    Unsupported,

    /// The literal is not a valid number.
    Invalid,
}

/// A numeric type that can be stored in, and computed by, an expression tree.
///
/// Every node of a tree shares the same scalar type. Division by zero and out-of-domain inputs
/// (such as the logarithm of a negative real number) follow the native semantics of the type:
/// they produce infinities or `NaN`s instead of errors.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// A short name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Creates a scalar from a real number.
    fn from_f64(value: f64) -> Self;

    /// Returns the additive identity.
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// Returns the multiplicative identity.
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// Converts the text of a numeric literal, such as `3.25` or `.5`, into a scalar.
    fn from_literal(lexeme: &str) -> Result<Self, LiteralError>;

    /// Raises `self` to the power `exponent`.
    fn pow(self, exponent: Self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// The natural logarithm.
    fn ln(self) -> Self;

    fn exp(self) -> Self;
}

impl Scalar for f64 {
    const TYPE_NAME: &'static str = "real";

    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_literal(lexeme: &str) -> Result<Self, LiteralError> {
        lexeme.parse().map_err(|_| LiteralError::Invalid)
    }

    fn pow(self, exponent: Self) -> Self {
        f64::powf(self, exponent)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }
}

/// Complex numbers have no literal syntax; complex trees are built from real-valued constants
/// and variables bound to complex values.
impl Scalar for Complex64 {
    const TYPE_NAME: &'static str = "complex";

    fn from_f64(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn from_literal(_: &str) -> Result<Self, LiteralError> {
        Err(LiteralError::Unsupported)
    }

    fn pow(self, exponent: Self) -> Self {
        Complex64::powc(self, exponent)
    }

    fn sin(self) -> Self {
        Complex64::sin(self)
    }

    fn cos(self) -> Self {
        Complex64::cos(self)
    }

    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn exp(self) -> Self {
        Complex64::exp(self)
    }
}
