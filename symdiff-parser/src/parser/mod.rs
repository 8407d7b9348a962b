pub mod binary;
pub mod call;
pub mod error;
pub mod primary;

use error::{kind, Error};
use std::ops::Range;
use super::tokenizer::{Lexer, Token, TokenKind};
use symdiff_compute::{Node, Scalar};

/// The default maximum nesting depth of parenthesized groups, function arguments, unary
/// negations and exponents. Every level of nesting costs a few stack frames in the parser and in
/// every algorithm run on the resulting tree, so this bounds the stack usage of both.
///
/// Chains of `+ - * /` are parsed in a loop but build a left-deep tree, one level per operator,
/// so a chain may be at most this many levels tall as well.
pub const MAX_RECURSION_DEPTH: usize = 1 << 8;

/// A recursive-descent parser for expressions. This is the type to use to parse an arbitrary
/// piece of text into a [`Node`] tree.
///
/// The parser pulls tokens from the lexer one at a time, keeping a single token of lookahead, so
/// a character that cannot be lexed is only reported once the parser reaches it.
#[derive(Clone)]
pub struct Parser<'source> {
    /// The lexer producing the tokens to parse.
    lexer: Lexer<'source>,

    /// The next token to be parsed, if it has already been lexed.
    peeked: Option<Token<'source>>,

    /// The current nesting depth.
    depth: usize,

    /// The maximum nesting depth.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self::with_max_depth(source, MAX_RECURSION_DEPTH)
    }

    /// Create a new parser for the given source, that rejects expressions nested more than
    /// `max_depth` levels deep.
    pub fn with_max_depth(source: &'source str, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(source),
            peeked: None,
            depth: 0,
            max_depth,
        }
    }

    /// Returns the source code being parsed.
    pub fn source(&self) -> &'source str {
        self.lexer.source()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token<'source>, Error> {
        if let Some(token) = &self.peeked {
            // cloning is cheap: only Range<_> is cloned
            return Ok(token.clone());
        }

        let token = self.lexer.next_token()?;
        self.peeked = Some(token.clone());
        Ok(token)
    }

    /// Returns the next token to be parsed, then advances past it.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.peek()?;
        self.advance();
        Ok(token)
    }

    /// Discards the peeked token. The next call to [`Parser::peek`] lexes a new one.
    fn advance(&mut self) {
        self.peeked = None;
    }

    /// Runs `f` one nesting level deeper, returning a [`kind::RecursionLimit`] error pointing at
    /// the next token if the maximum depth would be exceeded.
    fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R, Error>) -> Result<R, Error> {
        if self.depth >= self.max_depth {
            let span = self.peek()?.span;
            return Err(self.recursion_limit(span));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Builds the error for exceeding the maximum depth at `span`.
    fn recursion_limit(&self, span: Range<usize>) -> Error {
        Error::new(vec![span], kind::RecursionLimit { limit: self.max_depth })
    }

    /// Parses one expression from the start of the stream.
    ///
    /// Parsing stops at the first token that cannot continue the expression; that token and
    /// everything after it are left unparsed, so `2 + 3) garbage` parses as `2 + 3`. Use
    /// [`Parser::try_parse_full`] to reject such input.
    pub fn try_parse<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        self.parse_expr()
    }

    /// Attempts to parse an expression from the stream. All the tokens must be consumed by the
    /// parser; if not, an error is returned.
    pub fn try_parse_full<T: Scalar>(&mut self) -> Result<Node<T>, Error> {
        let node = self.parse_expr()?;
        let token = self.peek()?;
        if token.kind == TokenKind::End {
            Ok(node)
        } else {
            let end = self.source().len();
            Err(Error::new(vec![token.span.start..end], kind::ExpectedEof))
        }
    }
}

/// Parses the first expression in `source`, ignoring anything after it. See
/// [`Parser::try_parse`].
pub fn parse<T: Scalar>(source: &str) -> Result<Node<T>, Error> {
    Parser::new(source).try_parse()
}

/// Parses `source`, which must contain exactly one expression. See [`Parser::try_parse_full`].
pub fn parse_full<T: Scalar>(source: &str) -> Result<Node<T>, Error> {
    Parser::new(source).try_parse_full()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use symdiff_compute::{Complex64, Ctxt};
    use super::*;

    fn x() -> Node<f64> {
        Node::var("x")
    }

    fn c(value: f64) -> Node<f64> {
        Node::constant(value)
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse_full::<f64>("16").unwrap(), c(16.0));
        assert_eq!(parse_full::<f64>("3.25").unwrap(), c(3.25));
        assert_eq!(parse_full::<f64>(".5").unwrap(), c(0.5));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse_full::<f64>("x_1").unwrap(), Node::var("x_1"));
    }

    #[test]
    fn precedence() {
        // x^2 + 3*x + 2
        assert_eq!(
            parse_full::<f64>("x^2 + 3*x + 2").unwrap(),
            Node::add(
                Node::add(Node::pow(x(), c(2.0)), Node::mul(c(3.0), x())),
                c(2.0),
            ),
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(parse_full::<f64>("1 - 2 - 3").unwrap().to_string(), "((1 - 2) - 3)");
        assert_eq!(parse_full::<f64>("8 / 4 / 2").unwrap().to_string(), "((8 / 4) / 2)");
        assert_eq!(parse_full::<f64>("2 * 3 / 4").unwrap().to_string(), "((2 * 3) / 4)");
    }

    #[test]
    fn power_right_associative() {
        let node = parse_full::<f64>("2^3^2").unwrap();
        assert_eq!(node, Node::pow(c(2.0), Node::pow(c(3.0), c(2.0))));
        assert_eq!(node.evaluate(&Ctxt::new()).unwrap(), 512.0);
    }

    #[test]
    fn power_binds_tighter_than_product() {
        assert_eq!(parse_full::<f64>("2 * x ^ 3").unwrap().to_string(), "(2 * (x ^ 3))");
    }

    #[test]
    fn unary_negation() {
        assert_eq!(parse_full::<f64>("-x").unwrap(), Node::neg(x()));
        assert_eq!(parse_full::<f64>("--x").unwrap(), Node::neg(Node::neg(x())));
        assert_eq!(parse_full::<f64>("2 - -x").unwrap(), Node::sub(c(2.0), Node::neg(x())));

        // negation binds tighter than every binary operator, including `^`
        assert_eq!(parse_full::<f64>("-x^2").unwrap(), Node::pow(Node::neg(x()), c(2.0)));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(
            parse_full::<f64>("(x + 1) * (x - 1)").unwrap(),
            Node::mul(Node::add(x(), c(1.0)), Node::sub(x(), c(1.0))),
        );
        assert_eq!(parse_full::<f64>("((x))").unwrap(), x());
    }

    #[test]
    fn function_calls() {
        assert_eq!(parse_full::<f64>("sin(x)").unwrap(), Node::sin(x()));
        assert_eq!(parse_full::<f64>("cos(x)").unwrap(), Node::cos(x()));
        assert_eq!(parse_full::<f64>("ln(x)").unwrap(), Node::ln(x()));
        assert_eq!(
            parse_full::<f64>("exp(2 * x) + 1").unwrap(),
            Node::add(Node::exp(Node::mul(c(2.0), x())), c(1.0)),
        );
        assert_eq!(
            parse_full::<f64>("sin(cos(x))").unwrap(),
            Node::sin(Node::cos(x())),
        );
    }

    #[test]
    fn render_round_trip() {
        let source = "-x^2 / (1 + exp(x)) - ln(x) * sin(2*x)";
        let node = parse_full::<f64>(source).unwrap();
        let reparsed = parse_full::<f64>(&node.to_string()).unwrap();

        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 0.7);
        assert_float_relative_eq!(
            node.evaluate(&ctxt).unwrap(),
            reparsed.evaluate(&ctxt).unwrap()
        );
    }

    #[test]
    fn unknown_function() {
        let err = parse_full::<f64>("1 + sinh(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownFunction>(),
            Some(&kind::UnknownFunction { name: "sinh".to_string(), suggestions: vec!["sin"] }),
        );
        assert_eq!(err.spans, vec![4..8]);

        let err = parse_full::<f64>("foo(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownFunction>().map(|kind| kind.suggestions.len()),
            Some(0),
        );
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse_full::<f64>("(x + 1").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::ExpectedToken>(), Some(&kind::ExpectedToken { expected: ")" }));
        assert_eq!(err.spans, vec![6..6, 0..1]);

        let err = parse_full::<f64>("sin(x * 2").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::ExpectedToken>(), Some(&kind::ExpectedToken { expected: ")" }));
    }

    #[test]
    fn unexpected_token() {
        let err = parse_full::<f64>("2 + * 3").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnexpectedToken>(),
            Some(&kind::UnexpectedToken { expected: "an expression", found: "`*`".to_string() }),
        );
        assert_eq!(err.spans, vec![4..5]);

        assert!(parse_full::<f64>("()").unwrap_err().is::<kind::UnexpectedToken>());
    }

    #[test]
    fn unexpected_eof() {
        assert!(parse_full::<f64>("").unwrap_err().is::<kind::UnexpectedEof>());
        assert!(parse_full::<f64>("x +").unwrap_err().is::<kind::UnexpectedEof>());
    }

    #[test]
    fn invalid_number() {
        let err = parse_full::<f64>("1 + .").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::InvalidNumber>(),
            Some(&kind::InvalidNumber { lexeme: ".".to_string() }),
        );
    }

    #[test]
    fn lex_error_surfaces() {
        let err = parse_full::<f64>("x + $").unwrap_err();
        assert!(err.is::<kind::UnexpectedCharacter>());
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn complex_literal_unsupported() {
        let err = parse_full::<Complex64>("x + 1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnsupportedLiteralType>(),
            Some(&kind::UnsupportedLiteralType { type_name: "complex" }),
        );

        // trees without literals still parse
        let node = parse_full::<Complex64>("exp(z) * w").unwrap();
        assert_eq!(node.to_string(), "(exp(z) * w)");
    }

    #[test]
    fn lenient_parse_ignores_trailing_input() {
        assert_eq!(parse::<f64>("2 + 3) garbage").unwrap(), Node::add(c(2.0), c(3.0)));
        assert_eq!(parse::<f64>("sin (x)").unwrap(), Node::var("sin"));
        assert_eq!(parse::<f64>("3x").unwrap(), c(3.0));
    }

    #[test]
    fn strict_parse_rejects_trailing_input() {
        let err = parse_full::<f64>("2 + 3) garbage").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![5..14]);

        assert!(parse_full::<f64>("sin (x)").unwrap_err().is::<kind::ExpectedEof>());
    }

    #[test]
    fn recursion_limit() {
        let source = format!("{}x{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(Parser::with_max_depth(&source, 10).try_parse_full::<f64>().unwrap(), x());

        let err = Parser::with_max_depth(&source, 9).try_parse_full::<f64>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::RecursionLimit>(),
            Some(&kind::RecursionLimit { limit: 9 }),
        );

        let negations = format!("{}x", "-".repeat(MAX_RECURSION_DEPTH + 1));
        assert!(parse_full::<f64>(&negations).unwrap_err().is::<kind::RecursionLimit>());

        let powers = format!("x{}", "^x".repeat(MAX_RECURSION_DEPTH + 1));
        assert!(parse_full::<f64>(&powers).unwrap_err().is::<kind::RecursionLimit>());
    }

    #[test]
    fn operator_chains_count_towards_limit() {
        // 4 operators build a tree 5 levels deep
        let sum = "x + x - x + x - x";
        assert_eq!(Parser::with_max_depth(sum, 5).try_parse_full::<f64>().unwrap().depth(), 5);

        let err = Parser::with_max_depth(sum, 4).try_parse_full::<f64>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::RecursionLimit>(),
            Some(&kind::RecursionLimit { limit: 4 }),
        );
        // points at the operator that went too deep
        assert_eq!(err.spans, vec![14..15]);

        // a product on the left of a sum adds to its height
        let mixed = "x * x * x + x";
        assert!(Parser::with_max_depth(mixed, 4).try_parse_full::<f64>().is_ok());
        assert!(Parser::with_max_depth(mixed, 3).try_parse_full::<f64>().is_err());

        // so does a parenthesized chain
        let grouped = "(x + x + x) * x";
        assert!(Parser::with_max_depth(grouped, 4).try_parse_full::<f64>().is_ok());
        assert!(Parser::with_max_depth(grouped, 3).try_parse_full::<f64>().is_err());
    }

    #[test]
    fn long_flat_chains_are_rejected() {
        for op in ["+", "-", "*", "/"] {
            let source = vec!["x"; 50_000].join(op);
            let err = parse_full::<f64>(&source).unwrap_err();
            assert!(err.is::<kind::RecursionLimit>());
        }

        // the longest chain that fits still parses, renders and evaluates
        let source = vec!["x"; MAX_RECURSION_DEPTH].join(" + ");
        let node = parse_full::<f64>(&source).unwrap();
        assert_eq!(node.depth(), MAX_RECURSION_DEPTH);
        assert_eq!(parse_full::<f64>(&node.to_string()).unwrap(), node);
        let ctxt = Ctxt::from_iter([("x", 1.0)]);
        assert_eq!(node.evaluate(&ctxt).unwrap(), MAX_RECURSION_DEPTH as f64);

        let source = vec!["x"; MAX_RECURSION_DEPTH + 1].join(" + ");
        assert!(parse_full::<f64>(&source).unwrap_err().is::<kind::RecursionLimit>());
    }
}
