use crate::tokenizer::{Token, TokenKind};
use levenshtein::levenshtein;
use symdiff_compute::{Node, Scalar};
use super::{error::{kind, Error}, Parser};

/// The names of the functions that can be called, each taking exactly one argument.
pub const FUNCTIONS: [&str; 4] = ["sin", "cos", "ln", "exp"];

/// Returns all function names similar to the given name.
pub fn similar_functions(name: &str) -> Vec<&'static str> {
    FUNCTIONS
        .iter()
        .copied()
        .filter(|func| levenshtein(func, name) < 2)
        .collect()
}

impl<'source> Parser<'source> {
    /// Parses the argument list of a call to the function `name`, whose token has already been
    /// consumed.
    ///
    /// The argument is parsed before the function name is checked, so errors inside the argument
    /// are reported first.
    pub(crate) fn parse_call<T: Scalar>(&mut self, name: Token<'source>) -> Result<Node<T>, Error> {
        // the lexer only produces function tokens when `(` follows immediately
        let open = self.next_token()?;
        if open.kind != TokenKind::LeftParen {
            return Err(Error::new(
                vec![open.span.clone()],
                kind::UnexpectedToken { expected: "`(`", found: open.describe() },
            ));
        }

        let arg = self.parse_expr()?;
        self.expect_close_paren(&open)?;

        let build: fn(Node<T>) -> Node<T> = match name.lexeme {
            "sin" => Node::sin,
            "cos" => Node::cos,
            "ln" => Node::ln,
            "exp" => Node::exp,
            _ => return Err(Error::new(
                vec![name.span],
                kind::UnknownFunction {
                    name: name.lexeme.to_string(),
                    suggestions: similar_functions(name.lexeme),
                },
            )),
        };
        Ok(build(arg))
    }
}
