use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// A variable was evaluated, but the context has no value bound to its name.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = format!("to define it, bind a value: {}={}", (&self.name).fg(EXPR), "<value>".fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the variable that was unbound.
    pub name: String,
}
