use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the statements of a block.
    ///
    /// The block's level is the indentation of its first line. It ends at a
    /// blank line, which is consumed, at a line indented less than its level,
    /// at the end of input, or before an `else`, which is left for the
    /// enclosing `if`. Only the innermost open block is closed by a blank
    /// line; a dedent closes every block indented deeper than the new line.
    ///
    /// # Returns
    /// The statements of the block, possibly none.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        self.track_indentation();
        let level = self.depth;

        loop {
            self.track_indentation();
            if self.depth < level {
                break;
            }

            match self.peek_kind() {
                TokenKind::Eof | TokenKind::Else => break,
                TokenKind::Newline => {
                    self.advance();
                    break;
                },
                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(statements)
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition>
    ///     <then statements>
    ///     else
    ///     <else statements>
    /// ```
    /// `else` followed by more text on the same line takes that single
    /// statement as its branch, which is how `else if` chains are written.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the condition is not followed by the end of the
    ///   line.
    /// - Propagates any errors from the condition and the branches.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<Statement> {
        let start = self.advance().location;
        let condition = self.parse_expression()?;
        let location = self.span_from(start);
        self.expect_end_of_statement()?;

        let then_branch = self.parse_block()?;
        self.track_indentation();

        let else_branch = if self.eat(&TokenKind::Else) {
            match self.peek_kind() {
                TokenKind::Newline => {
                    self.advance();
                    Some(self.parse_block()?)
                },
                TokenKind::Eof => Some(Vec::new()),
                _ => Some(vec![self.parse_statement()?]),
            }
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           location })
    }

    /// Parses a `while` or `until` loop.
    ///
    /// Both are pre-test loops over a block; they differ only in the sense of
    /// the condition.
    pub(in crate::interpreter::parser) fn parse_loop(&mut self) -> ParseResult<Statement> {
        let keyword = self.advance();
        let condition = self.parse_expression()?;
        let location = self.span_from(keyword.location);
        self.expect_end_of_statement()?;

        let body = self.parse_block()?;

        Ok(match keyword.kind {
               TokenKind::Until => Statement::Until { condition,
                                                      body,
                                                      location },
               _ => Statement::While { condition,
                                       body,
                                       location },
           })
    }

    /// Parses a function declaration.
    ///
    /// Grammar: `function := name "takes" variable (("and" | "," | "&" |
    /// "'n'") variable)* Newline block`
    ///
    /// The function is known to the fallback call form from its own body
    /// onwards. Parameters count as variable productions for the pronoun
    /// register; the function name does not.
    pub(in crate::interpreter::parser) fn parse_function(&mut self) -> ParseResult<Statement> {
        let name = self.parse_function_name()?;
        self.expect(&TokenKind::Takes, "'takes'")?;

        let mut params = vec![self.parse_variable()?.canonical];
        while matches!(self.peek_kind(),
                       TokenKind::And | TokenKind::Comma | TokenKind::ArgumentSeparator)
        {
            self.advance();
            params.push(self.parse_variable()?.canonical);
        }

        let location = self.span_from(name.location);
        self.expect_end_of_statement()?;

        self.functions.insert(name.canonical.clone());
        let body = self.parse_block()?;

        Ok(Statement::Function(Rc::new(FunctionDef { name: name.canonical,
                                                     params,
                                                     body,
                                                     location })))
    }
}
