/// Parser state and token cursor.
///
/// Holds the [`core::Parser`] context, including the pronoun register and the
/// set of declared functions, together with the shared token helpers.
pub mod core;

/// Unary expressions, calls and atoms.
///
/// Handles `not`, function calls with `taking`, literals and variable
/// references.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from `or`/`nor` down to `times`/`over`,
/// including the multi-word comparison phrases.
pub mod binary;

/// Block parsing.
///
/// Parses statement blocks and the constructs that own them: `if`/`else`,
/// `while`, `until` and function declarations.
pub mod block;

/// Name resolution helpers.
///
/// Collapses common, proper and bare variable names to canonical form and
/// resolves pronouns.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the first token of a line and parses the simple statements
/// and assignments.
pub mod statement;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::core::Parser,
    },
};

/// Builds the syntax tree for a token sequence produced by
/// [`lex`](crate::interpreter::lexer::lex).
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use rockstar::{
///     ast::Statement,
///     interpreter::{lexer::lex, parser::parse},
/// };
///
/// let tokens = lex("My heart is 5\nWhisper it").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert!(matches!(&program.statements[1],
///                  Statement::Print { value: rockstar::ast::Expr::Variable { name, .. }, .. }
///                  if name == "my heart"));
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    match tokens.last() {
        Some(end) if end.kind == TokenKind::Eof => Parser::new(tokens, end).parse_program(),
        last => {
            // Hand-built sequences may lack the terminator.
            let mut terminated = tokens.to_vec();
            terminated.push(Token { kind:     TokenKind::Eof,
                                    lexeme:   String::new(),
                                    location: last.map(|t| t.location).unwrap_or_default(), });
            parse(&terminated)
        },
    }
}
