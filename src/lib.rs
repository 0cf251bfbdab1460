//! # rockstar
//!
//! rockstar is an interpreter for the Rockstar programming language, whose
//! programs read like song lyrics. It lexes, parses and evaluates source text
//! with support for poetic literals, pronouns, functions and line-based I/O.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::Error,
    interpreter::{
        environment::{Environment, ScopeMode},
        evaluator::evaluate,
        lexer::lex,
        parser::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent a program as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source locations to every node for error reporting.
/// - Holds variable names in canonical form, with pronouns already resolved.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source span it refers to.
///
/// # Responsibilities
/// - Defines an error enum per phase, plus the top-level [`error::Error`].
/// - Renders errors as `Error: <start> - <end>: <message>`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation and
/// value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for each phase.
pub mod interpreter;
/// Source spans.
///
/// Lines are 1-based and columns 0-based; end columns are exclusive.
pub mod location;
/// General utilities shared by several phases.
pub mod util;

/// Settings for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How function calls see the caller's variables.
    pub scope: ScopeMode,
}

/// Lexes, parses and runs a program with default [`Options`].
///
/// # Parameters
/// - `source`: Full program text.
/// - `input`: Source of lines for `listen`.
/// - `output`: Sink for printed values.
///
/// # Returns
/// The value given back at the top level, if any.
///
/// # Errors
/// The first lexing, parsing or runtime error; nothing runs after it.
///
/// # Examples
/// ```
/// use rockstar::run;
///
/// let mut output = Vec::new();
/// run("My heart is 5\nWhisper it", &mut &b""[..], &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "5\n");
///
/// // Division by zero stops the run with a located error.
/// let mut output = Vec::new();
/// let err = run("Say 1 over 0", &mut &b""[..], &mut output).unwrap_err();
/// assert_eq!(err.to_string(),
///            "Error: 1:4 - 1:12: Arithmetic error: division by zero.");
/// ```
pub fn run(source: &str,
           input: &mut dyn BufRead,
           output: &mut dyn Write)
           -> Result<Option<Value>, Error> {
    run_with_options(source, &Options::default(), input, output)
}

/// Lexes, parses and runs a program.
///
/// Same as [`run`], with explicit [`Options`].
pub fn run_with_options(source: &str,
                        options: &Options,
                        input: &mut dyn BufRead,
                        output: &mut dyn Write)
                        -> Result<Option<Value>, Error> {
    let tokens = lex(source)?;
    let program = parse(&tokens)?;
    let mut env = Environment::new(options.scope);
    Ok(evaluate(&program, &mut env, input, output)?)
}
