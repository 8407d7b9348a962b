//! Parse, evaluate, substitute into, and symbolically differentiate expressions.
//!
//! The entry point is [`Expression`], which owns an expression tree and exposes every operation
//! on it:
//!
//! ```
//! use symdiff::{Ctxt, Expression};
//!
//! let expr = Expression::<f64>::parse("x^2 + 3*x + 2").unwrap();
//! let derivative = expr.differentiate("x");
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 2.0);
//! assert_eq!(derivative.evaluate(&ctxt).unwrap(), 7.0);
//! ```
//!
//! Derivatives are not simplified:
//!
//! ```
//! use symdiff::Expression;
//!
//! let expr = Expression::variable("x") * Expression::constant(2.0);
//! assert_eq!(expr.differentiate("x").to_string(), "((1 * 2) + (x * 0))");
//! ```

pub mod expression;

pub use expression::Expression;
pub use symdiff_compute::{Complex64, Ctxt, Node, Scalar};
pub use symdiff_error::Error;
