use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// A character that cannot start any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", self.character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, names, parentheses, and the operators {}",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The offending character.
    pub character: char,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", self.found),
    labels = [format!("I expected to see {} here", self.expected)],
)]
pub struct UnexpectedToken {
    /// What was expected instead.
    pub expected: &'static str,

    /// A description of the token that was found.
    pub found: String,
}

/// A specific token was expected, but something else was found.
///
/// The error has two spans: where the token was expected, and the token that required it (such as
/// the opening parenthesis).
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected `{}`", self.expected),
    labels = [format!("add `{}` here", self.expected), "to close this".to_string()],
)]
pub struct ExpectedToken {
    /// The text of the token that was expected.
    pub expected: &'static str,
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A function that does not exist was called.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        format!("the available functions are: {}", "sin, cos, ln, exp".fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", self.suggestions[0].fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// Names of existing functions that are similar to the one that was called.
    pub suggestions: Vec<&'static str>,
}

/// A numeric literal was found while parsing into a scalar type that has no literal syntax.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("numeric literals cannot be parsed as {} numbers", self.type_name),
    labels = ["this literal"],
    help = "build the expression from variables and bind their values when evaluating instead",
)]
pub struct UnsupportedLiteralType {
    /// The name of the scalar type being parsed into.
    pub type_name: &'static str,
}

/// A numeric literal has no digits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", self.lexeme),
    labels = ["this literal"],
    help = format!("add digits before or after the decimal point, such as {}", "0.5".fg(EXPR)),
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum nesting depth exceeded",
    labels = ["this expression is nested too deeply"],
    help = format!("expressions may be nested at most {} levels deep", self.limit),
)]
pub struct RecursionLimit {
    /// The maximum nesting depth.
    pub limit: usize,
}
