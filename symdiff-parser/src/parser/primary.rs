use crate::tokenizer::{Token, TokenKind};
use symdiff_compute::{LiteralError, Node, Scalar};
use super::{error::{kind, Error}, Parser};

impl<'source> Parser<'source> {
    /// Parses a primary expression: a number, a variable, a function call, a parenthesized
    /// expression, or a negated primary expression.
    pub(crate) fn parse_primary<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number => Self::parse_number(token),
            TokenKind::Variable => Ok(Node::var(token.lexeme)),
            TokenKind::Function => self.nested(|input| input.parse_call(token)),
            TokenKind::LeftParen => self.nested(|input| {
                let expr = input.parse_expr()?;
                input.expect_close_paren(&token)?;
                Ok(expr)
            }),
            TokenKind::Operator if token.lexeme == "-" => {
                let operand = self.nested(Self::parse_primary)?;
                Ok(Node::neg(operand))
            },
            TokenKind::End => Err(Error::new(vec![token.span], kind::UnexpectedEof)),
            TokenKind::Operator | TokenKind::RightParen => Err(Error::new(
                vec![token.span.clone()],
                kind::UnexpectedToken { expected: "an expression", found: token.describe() },
            )),
        }
    }

    /// Converts a numeric literal into the scalar type.
    fn parse_number<T: Scalar>(token: Token) -> Result<Node<T>, Error> {
        match T::from_literal(token.lexeme) {
            Ok(value) => Ok(Node::constant(value)),
            Err(LiteralError::Unsupported) => Err(Error::new(
                vec![token.span],
                kind::UnsupportedLiteralType { type_name: T::TYPE_NAME },
            )),
            Err(LiteralError::Invalid) => Err(Error::new(
                vec![token.span],
                kind::InvalidNumber { lexeme: token.lexeme.to_string() },
            )),
        }
    }

    /// Consumes the `)` closing the parenthesis `open`, or returns an
    /// [`ExpectedToken`](kind::ExpectedToken) error pointing at both the next token and `open`.
    pub(crate) fn expect_close_paren(&mut self, open: &Token) -> Result<Token<'source>, Error> {
        let token = self.peek()?;
        if token.kind == TokenKind::RightParen {
            self.advance();
            Ok(token)
        } else {
            Err(Error::new(
                vec![token.span, open.span.clone()],
                kind::ExpectedToken { expected: ")" },
            ))
        }
    }
}
