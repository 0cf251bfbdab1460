/// Binary operator evaluation logic.
///
/// Handles arithmetic, equality and ordering comparisons and the
/// short-circuiting logical operators.
pub mod binary;

/// Unary operations.
///
/// Implements `not` and the `build`/`knock` increment and decrement
/// statements.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the [`core::Flow`] signal returned by
/// every statement and the dispatch over expressions and statements.
pub mod core;

/// Evaluation of `while` and `until` loops.
pub mod loops;

/// Function calls.
///
/// Handles argument checking, parameter binding and return values of
/// user-defined functions.
pub mod function;

/// Output and line input.
pub mod io;

use std::io::{BufRead, Write};

use crate::{
    ast::Program,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Evaluator, Flow},
        value::core::Value,
    },
};

/// Runs a program against an environment.
///
/// Statements run in source order. `give back` at the top level stops the
/// program and its value becomes the result; a top-level `break` or
/// `continue` also stops the program.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: Variables and functions, possibly left over from earlier runs.
/// - `input`: Source for `listen`.
/// - `output`: Sink for `say` and its synonyms.
///
/// # Returns
/// `Some(value)` if the program gave back a value at the top level,
/// otherwise `None`.
///
/// # Errors
/// The first [`RuntimeError`] raised; the run stops there. Output that
/// cannot be flushed once the program finishes is an I/O error too.
///
/// # Example
/// ```
/// use rockstar::interpreter::{
///     environment::Environment, evaluator::evaluate, lexer::lex, parser::parse,
/// };
///
/// let program = parse(&lex("Shout \"hello\"").unwrap()).unwrap();
/// let mut env = Environment::default();
/// let mut output = Vec::new();
///
/// evaluate(&program, &mut env, &mut &b""[..], &mut output).unwrap();
/// assert_eq!(output, b"hello\n");
/// ```
pub fn evaluate(program: &Program,
                env: &mut Environment,
                input: &mut dyn BufRead,
                output: &mut dyn Write)
                -> Result<Option<Value>, RuntimeError> {
    let mut evaluator = Evaluator::new(env, input, output);
    let flow = evaluator.exec_block(&program.statements)?;
    evaluator.flush(program.location)?;

    match flow {
        Flow::Return(value) => Ok(Some(value)),
        Flow::Normal | Flow::Break | Flow::Continue => Ok(None),
    }
}
