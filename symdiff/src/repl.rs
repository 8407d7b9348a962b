//! An interactive session that keeps variable bindings between lines.
//!
//! Each line is one of:
//!
//! - `name = <expression>`: evaluates the expression and binds the result to `name`
//! - `:diff <var> <expression>`: prints the derivative of the expression with respect to `var`
//! - `:vars`: lists the current bindings
//! - `<expression>`: evaluates the expression and prints the result

use rustyline::{error::ReadlineError, DefaultEditor};
use std::process::ExitCode;
use symdiff::{Ctxt, Error, Expression};

/// A single line of input to the REPL.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command<'a> {
    /// Evaluate the expression and bind the result.
    Assign { name: &'a str, expr: &'a str },

    /// Print a derivative.
    Diff { var: &'a str, expr: &'a str },

    /// List the bindings.
    Vars,

    /// Evaluate and print the expression.
    Eval(&'a str),
}

/// Returns true if `name` can be used as a variable name.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<'a> Command<'a> {
    /// Parses a line of input, which must already be trimmed.
    fn parse(line: &'a str) -> Result<Self, String> {
        if line == ":vars" {
            return Ok(Self::Vars);
        }

        if let Some(rest) = line.strip_prefix(":diff") {
            let rest = rest.trim_start();
            let (var, expr) = rest.split_once(char::is_whitespace)
                .ok_or_else(|| "usage: :diff <var> <expression>".to_string())?;
            if !is_identifier(var) {
                return Err(format!("`{}` is not a valid variable name", var));
            }
            return Ok(Self::Diff { var, expr: expr.trim() });
        }

        if line.starts_with(':') {
            return Err(format!("unknown command `{}`", line));
        }

        // expressions never contain `=`
        if let Some((name, expr)) = line.split_once('=') {
            let name = name.trim();
            if !is_identifier(name) {
                return Err(format!("`{}` is not a valid variable name", name));
            }
            return Ok(Self::Assign { name, expr: expr.trim() });
        }

        Ok(Self::Eval(line))
    }
}

/// Parses and evaluates `input` in the given context.
fn parse_eval(input: &str, ctxt: &Ctxt<f64>) -> Result<f64, Error> {
    Expression::parse_full(input)?.evaluate(ctxt)
}

/// Executes one line of input, printing the result or the error.
fn execute(line: &str, ctxt: &mut Ctxt<f64>) {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}", msg);
            return;
        },
    };

    let (result, input) = match command {
        Command::Vars => {
            let mut vars = ctxt.get_vars().iter().collect::<Vec<_>>();
            vars.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (name, value) in vars {
                println!("{} = {}", name, value);
            }
            return;
        },
        Command::Eval(expr) => (parse_eval(expr, ctxt).map(|value| println!("{}", value)), expr),
        Command::Assign { name, expr } => {
            let result = parse_eval(expr, ctxt).map(|value| {
                ctxt.add_var(name, value);
                println!("{} = {}", name, value);
            });
            (result, expr)
        },
        Command::Diff { var, expr } => {
            let result = Expression::<f64>::parse_full(expr)
                .map(|expr| println!("{}", expr.differentiate(var)));
            (result, expr)
        },
    };

    if let Err(err) = result {
        if err.report_to_stderr("input", input).is_err() {
            eprintln!("Error: {}", err);
        }
    }
}

/// Runs the REPL until the input ends or the user interrupts it.
pub fn run() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };
    let mut ctxt = Ctxt::new();

    fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt<f64>) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        let line = input.trim();
        if line.is_empty() {
            return Ok(());
        }

        rl.add_history_entry(line)?;

        execute(line, ctxt);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, &mut ctxt) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => ExitCode::SUCCESS,
                _ => {
                    eprintln!("{}", err);
                    ExitCode::FAILURE
                },
            };
        }
    }
}
