//! Expression trees over a numeric [`Scalar`] type.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Node`]s. Every binary operator node owns its two
//! operands, and every unary operator / function node owns its single argument; there is no
//! sharing between trees, so [`Clone`] on a [`Node`] is a full deep copy.
//!
//! Trees are never modified after they are built. Every algorithm that produces a tree
//! ([`Node::differentiate`], [`Node::substitute`], [`Clone::clone`]) returns a **new** tree.
//!
//! ```
//! use symdiff_compute::{ctxt::Ctxt, node::Node};
//!
//! // x * 3
//! let expr = Node::mul(Node::var("x"), Node::constant(3.0));
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 4.0);
//! assert_eq!(expr.evaluate(&ctxt).unwrap(), 12.0);
//! ```
//!
//! # Differentiation
//!
//! [`Node::differentiate`] applies the structural differentiation rules (sum, product, quotient,
//! power and chain rules) to each node **without** simplifying the result. For example, the
//! derivative of `x * 2` with respect to `x` is `((1 * 2) + (x * 0))`, not `2`.
//!
//! ```
//! use symdiff_compute::node::Node;
//!
//! let expr = Node::mul(Node::var("x"), Node::constant(2.0));
//! assert_eq!(expr.differentiate("x").to_string(), "((1 * 2) + (x * 0))");
//! ```

pub mod ctxt;
pub mod error;
pub mod node;
pub mod scalar;

pub use ctxt::Ctxt;
pub use node::Node;
pub use scalar::{Complex64, LiteralError, Scalar};
