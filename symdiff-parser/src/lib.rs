//! Parser for symdiff expressions.
//!
//! Text is turned into a stream of tokens by the [`tokenizer`], and the [`parser`] builds a
//! [`Node`](symdiff_compute::Node) tree from them by recursive descent, one function per
//! precedence level:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := primary ('^' factor)?
//! primary    := Number | Variable
//!             | Function '(' expression ')'
//!             | '(' expression ')'
//!             | '-' primary
//! ```
//!
//! `+ - * /` are left-associative, `^` is right-associative, and unary `-` binds tighter than
//! every binary operator.
//!
//! ```
//! use symdiff_parser::parser::Parser;
//!
//! let mut parser = Parser::new("2 ^ 3 ^ 2");
//! let node = parser.try_parse_full::<f64>().unwrap();
//! assert_eq!(node.to_string(), "(2 ^ (3 ^ 2))");
//! ```

pub mod parser;
pub mod tokenizer;
