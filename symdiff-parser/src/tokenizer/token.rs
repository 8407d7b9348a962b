use logos::Logos;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw tokens recognized by the [`logos`] state machine. Names are split into functions and
/// variables afterwards by [`Lexer`](super::Lexer), which looks at the character following the
/// name.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\n\r\f\v]+")]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]*")]
    Number,

    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Name,

    #[regex(r"[+\-*/^]")]
    Operator,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A run of digits with at most one `.`, such as `3`, `2.5` or `.5`.
    Number,

    /// A name that is not immediately followed by `(`.
    Variable,

    /// A name that is immediately followed by `(`.
    Function,

    /// One of `+`, `-`, `*`, `/`, or `^`.
    Operator,

    LeftParen,

    RightParen,

    /// The end of the input. The lexer keeps producing this token once it is reached.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Function => write!(f, "function"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::LeftParen => write!(f, "`(`"),
            TokenKind::RightParen => write!(f, "`)`"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token. Empty for [`TokenKind::End`].
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token is the operator `op`.
    pub fn is_op(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }

    /// Returns a short description of the token, suitable for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::End => self.kind.to_string(),
            TokenKind::Number | TokenKind::Variable | TokenKind::Function => {
                format!("{} `{}`", self.kind, self.lexeme)
            },
            _ => format!("`{}`", self.lexeme),
        }
    }
}
