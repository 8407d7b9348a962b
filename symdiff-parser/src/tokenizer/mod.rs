pub mod token;

use crate::parser::error::{kind::UnexpectedCharacter, Error};
use logos::Logos;
use token::RawToken;
pub use token::{Token, TokenKind};

/// Returns a lexer over the tokens of the given input.
pub fn tokenize(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// A lazy lexer that produces one token per call to [`Lexer::next_token`].
///
/// The lexer only moves forward. Once the end of the input is reached, every further call
/// returns another [`TokenKind::End`] token.
#[derive(Clone)]
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,

    /// Whether the [`Iterator`] implementation has yielded the end of the input.
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Returns the source code being lexed.
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    /// Lexes the next token, skipping any whitespace before it.
    ///
    /// Returns an [`UnexpectedCharacter`] error if the next character cannot start a token. The
    /// offending character is skipped, so lexing can continue after the error.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let Some(raw) = self.inner.next() else {
            let end = self.source().len();
            return Ok(Token { span: end..end, kind: TokenKind::End, lexeme: "" });
        };

        let span = self.inner.span();
        let kind = match raw {
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::Name) if self.inner.remainder().starts_with('(') => TokenKind::Function,
            Ok(RawToken::Name) => TokenKind::Variable,
            Ok(RawToken::Operator) => TokenKind::Operator,
            Ok(RawToken::OpenParen) => TokenKind::LeftParen,
            Ok(RawToken::CloseParen) => TokenKind::RightParen,
            Err(()) => {
                // the start of the span is always on a character boundary
                let character = self.source()[span.start..].chars().next().unwrap_or_default();
                let end = span.start + character.len_utf8();
                return Err(Error::new(vec![span.start..end], UnexpectedCharacter { character }));
            },
        };

        Ok(Token { span: span.clone(), kind, lexeme: &self.source()[span] })
    }
}

/// Yields every token up to, but not including, [`TokenKind::End`].
impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token<'source>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::End => {
                self.finished = true;
                None
            },
            result => Some(result),
        }
    }
}
