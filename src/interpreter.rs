/// The environment module holds program state during a run.
///
/// Variables are stored by canonical name and functions by name. The
/// [`environment::ScopeMode`] chosen at construction decides whether a
/// function call shares its caller's variables or gets a frame of its own.
///
/// # Responsibilities
/// - Reads and writes variables, yielding null for unset names.
/// - Opens and closes call frames.
/// - Registers and looks up user-defined functions.
pub mod environment;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree statement by statement, evaluates
/// expressions, performs I/O through the sinks it was given and signals
/// `break`, `continue` and `give back` as ordinary return values.
///
/// # Responsibilities
/// - Evaluates expressions with the language's coercion rules.
/// - Runs conditionals, loops and function calls.
/// - Reports runtime errors such as division by zero or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens with source spans. Besides single words it recognizes multi-word
/// keywords, strips comments and decodes poetic literals.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Classifies words through the case-insensitive keyword table.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent consumer of the token sequence. It
/// resolves variable names to canonical form and pronouns to the most
/// recently named variable while it parses.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Groups statements into blocks for conditionals, loops and functions.
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A value is null, mysterious, a boolean, a decimal number or a string. The
/// module provides truthiness, numeric coercion, loose equality and ordering.
pub mod value;
