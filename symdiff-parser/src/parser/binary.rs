//! The binary operator levels of the grammar.
//!
//! Each level parses operands of the next-higher level and combines them with the operators of
//! its own level:
//!
//! | Level        | Operators | Associativity |
//! | ------------ | --------- | ------------- |
//! | `expression` | `+`, `-`  | left          |
//! | `term`       | `*`, `/`  | left          |
//! | `factor`     | `^`       | right         |

use symdiff_compute::{Node, Scalar};
use crate::tokenizer::Token;
use super::{error::Error, Parser};

/// Builds a binary operator node from its two operands.
type BinaryBuilder<T> = fn(Node<T>, Node<T>) -> Node<T>;

impl<'source> Parser<'source> {
    /// Parses a left-associative chain of operands, such as `a - b + c`. `operator` returns the
    /// builder for the operator token joining two operands, or [`None`] if the token ends the
    /// chain.
    ///
    /// The chain grows a left-deep tree, one level per operator. Its height is tracked as it
    /// grows, and a chain taller than the maximum depth is rejected with a
    /// [`RecursionLimit`](super::error::kind::RecursionLimit) error pointing at the operator that
    /// went too deep.
    fn parse_chain<T: Scalar>(
        &mut self,
        operand: fn(&mut Self) -> Result<Node<T>, Error>,
        operator: impl Fn(&Token<'source>) -> Option<BinaryBuilder<T>>,
    ) -> Result<Node<T>, Error> {
        let mut lhs = operand(self)?;
        let mut height = lhs.depth();

        loop {
            let token = self.peek()?;
            let Some(build) = operator(&token) else {
                return Ok(lhs);
            };

            self.advance();
            let rhs = operand(self)?;
            height = height.max(rhs.depth()) + 1;
            if height > self.max_depth {
                return Err(self.recursion_limit(token.span));
            }
            lhs = build(lhs, rhs);
        }
    }

    /// Parses a sum / difference of terms.
    pub(crate) fn parse_expr<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        self.parse_chain(Self::parse_term, |token| -> Option<BinaryBuilder<T>> {
            if token.is_op("+") {
                Some(Node::add)
            } else if token.is_op("-") {
                Some(Node::sub)
            } else {
                None
            }
        })
    }

    /// Parses a product / quotient of factors.
    pub(crate) fn parse_term<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        self.parse_chain(Self::parse_factor, |token| -> Option<BinaryBuilder<T>> {
            if token.is_op("*") {
                Some(Node::mul)
            } else if token.is_op("/") {
                Some(Node::div)
            } else {
                None
            }
        })
    }

    /// Parses a power. The exponent is itself parsed as a factor, which makes `^`
    /// right-associative: `2^3^2` is `2^(3^2)`.
    pub(crate) fn parse_factor<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        let base = self.parse_primary()?;

        if self.peek()?.is_op("^") {
            self.advance();
            let exponent = self.nested(Self::parse_factor)?;
            return Ok(Node::pow(base, exponent));
        }

        Ok(base)
    }
}
