use std::{collections::HashSet, iter::Peekable, mem::discriminant, slice::Iter};

use crate::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::lexer::token::{Token, TokenKind},
    location::SourceLocation,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser state.
///
/// Besides the token cursor, the parser owns the pronoun register: the
/// canonical name of the most recently parsed variable, which every pronoun
/// resolves to. Because the register is only touched while parsing, pronoun
/// resolution follows strict left-to-right source order regardless of how
/// the program later executes.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:    Peekable<Iter<'a, Token>>,
    /// Most recently parsed variable name, if any.
    pub(in crate::interpreter::parser) last_name: Option<String>,
    /// Functions declared so far, for the fallback call form.
    pub(in crate::interpreter::parser) functions: HashSet<String>,
    /// Indentation level reached by the `Indent`/`Dedent` tokens seen so far.
    pub(in crate::interpreter::parser) depth:     usize,
    /// The last token consumed.
    previous:                                     Option<&'a Token>,
    /// Returned by [`Parser::peek`] once the stream is exhausted.
    end:                                          &'a Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`, which must not be empty.
    pub(in crate::interpreter::parser) fn new(tokens: &'a [Token], end: &'a Token) -> Self {
        Self { tokens: tokens.iter().peekable(),
               last_name: None,
               functions: HashSet::new(),
               depth: 0,
               previous: None,
               end }
    }

    /// Parses a whole program.
    ///
    /// Grammar: `program := (Newline* statement)* Eof`
    ///
    /// Blank lines and indentation changes between top-level statements are
    /// only separators; they close nothing at this level.
    ///
    /// # Returns
    /// The parsed [`Program`], its location spanning every statement.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        loop {
            match self.peek_kind() {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance();
                },
                TokenKind::Indent | TokenKind::Dedent => self.track_indentation(),
                _ => statements.push(self.parse_statement()?),
            }
        }

        let location = Self::statements_span(&statements, SourceLocation::default());

        Ok(Program { statements,
                     location })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, `or`/`nor`, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_logical_or()
    }

    /// The next token, without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> &'a Token {
        self.tokens.peek().copied().unwrap_or(self.end)
    }

    pub(in crate::interpreter::parser) fn peek_kind(&mut self) -> &'a TokenKind {
        &self.peek().kind
    }

    /// The token after the next one, without consuming anything.
    pub(in crate::interpreter::parser) fn peek_second(&self) -> &'a TokenKind {
        let mut lookahead = self.tokens.clone();
        lookahead.next();
        lookahead.next().map_or(&self.end.kind, |t| &t.kind)
    }

    /// Consumes the next token. At the end of the stream, keeps returning the
    /// final token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Token {
        let token = self.tokens.next().unwrap_or(self.end);
        self.previous = Some(token);
        token
    }

    /// Tests whether the next token has the same kind as `kind`, ignoring
    /// payloads.
    pub(in crate::interpreter::parser) fn check(&mut self, kind: &TokenKind) -> bool {
        discriminant(self.peek_kind()) == discriminant(kind)
    }

    /// Consumes the next token if it has the kind of `kind`.
    pub(in crate::interpreter::parser) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the kind of `kind`, or fails.
    ///
    /// # Parameters
    /// - `kind`: The kind required next. Payloads are ignored.
    /// - `expected`: Description of what was required, for the error.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedToken`], or
    /// [`ParseError::UnexpectedEndOfInput`] at the end of the stream.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: &TokenKind,
                                                 expected: &str)
                                                 -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.unexpected(expected))
    }

    /// Builds the error for the next token not being `expected`.
    pub(in crate::interpreter::parser) fn unexpected(&mut self, expected: &str) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                                 location: token.location, },
            _ => ParseError::UnexpectedToken { found:    token.describe(),
                                               expected: expected.to_string(),
                                               location: token.location, },
        }
    }

    /// Requires the current statement to end here.
    ///
    /// A `Newline` is consumed; `Eof` is left for the caller.
    pub(in crate::interpreter::parser) fn expect_end_of_statement(&mut self) -> ParseResult<()> {
        match self.peek_kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            },
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of line")),
        }
    }

    /// Consumes the `Indent` and `Dedent` tokens at the start of a line and
    /// updates [`Parser::depth`].
    pub(in crate::interpreter::parser) fn track_indentation(&mut self) {
        loop {
            match self.peek_kind() {
                TokenKind::Indent => self.depth += 1,
                TokenKind::Dedent => self.depth = self.depth.saturating_sub(1),
                _ => return,
            }
            self.advance();
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(in crate::interpreter::parser) fn span_from(&self, start: SourceLocation) -> SourceLocation {
        self.previous.map_or(start, |token| start.combine(&token.location))
    }

    /// Span of a statement list, or `fallback` when it is empty.
    pub(in crate::interpreter::parser) fn statements_span(statements: &[Statement],
                                                          fallback: SourceLocation)
                                                          -> SourceLocation {
        match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.location().combine(&last.location()),
            _ => fallback,
        }
    }
}
