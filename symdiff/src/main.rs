mod repl;

use std::{env, process::ExitCode};
use symdiff::{Ctxt, Error, Expression};

const USAGE: &str = "Usage:
  symdiff --eval \"expression\" var1=value1 var2=value2 ...
  symdiff --diff \"expression\" --by var1
  symdiff --repl";

/// Reports the error to stderr, pointing into `input`.
fn report(err: &Error, input: &str) {
    if err.report_to_stderr("input", input).is_err() {
        eprintln!("Error: {}", err);
    }
}

/// Parses a `name=value` binding from the command line.
fn parse_binding(arg: &str) -> Option<(&str, f64)> {
    let (name, value) = arg.split_once('=')?;
    let value = value.trim().parse().ok()?;
    Some((name.trim(), value))
}

/// Evaluates `input` with the given `name=value` bindings, printing the result.
fn eval(input: &str, bindings: &[&str]) -> ExitCode {
    let mut ctxt = Ctxt::new();
    for arg in bindings {
        let Some((name, value)) = parse_binding(arg) else {
            eprintln!("Invalid variable format: {}", arg);
            return ExitCode::FAILURE;
        };
        ctxt.add_var(name, value);
    }

    match Expression::<f64>::parse_full(input).and_then(|expr| expr.evaluate(&ctxt)) {
        Ok(value) => {
            println!("Result: {}", value);
            ExitCode::SUCCESS
        },
        Err(err) => {
            report(&err, input);
            ExitCode::FAILURE
        },
    }
}

/// Differentiates `input` with respect to `var`, printing the derivative.
fn diff(input: &str, var: &str) -> ExitCode {
    match Expression::<f64>::parse_full(input) {
        Ok(expr) => {
            println!("Derivative: {}", expr.differentiate(var));
            ExitCode::SUCCESS
        },
        Err(err) => {
            report(&err, input);
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();

    match args.as_slice() {
        ["--eval", input, bindings @ ..] => eval(input, bindings),
        ["--diff", input, "--by", var, ..] => diff(input, var),
        ["--repl"] => repl::run(),
        _ => {
            println!("{}", USAGE);
            ExitCode::FAILURE
        },
    }
}
