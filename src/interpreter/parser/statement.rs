use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// Dispatches on the first token. Lines that start with a name are
    /// resolved by the token after the name: `takes` declares a function,
    /// an assignment marker, `says` or `thinks` assigns, `taking` calls.
    /// Any other shape is a call of the leading name with the rest of the
    /// line as its single argument.
    ///
    /// Simple statements consume their terminating newline; block statements
    /// end where their block ends.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let statement = match self.peek_kind() {
            TokenKind::If => return self.parse_if(),
            TokenKind::While | TokenKind::Until => return self.parse_loop(),
            TokenKind::Put => self.parse_put()?,
            TokenKind::Listen => {
                let location = self.advance().location;
                Statement::Listen { target: None,
                                    location }
            },
            TokenKind::ListenTo => {
                let start = self.advance().location;
                let target = self.parse_variable()?;
                Statement::Listen { target:   Some(target.canonical),
                                    location: self.span_from(start), }
            },
            TokenKind::Say => {
                let start = self.advance().location;
                let value = self.parse_expression()?;
                Statement::Print { value,
                                   location: self.span_from(start) }
            },
            TokenKind::Return => {
                let start = self.advance().location;
                let value = self.parse_expression()?;
                Statement::Return { value,
                                    location: self.span_from(start) }
            },
            TokenKind::Build => self.parse_step(true)?,
            TokenKind::Knock => self.parse_step(false)?,
            TokenKind::Break => Statement::Break { location: self.advance().location },
            TokenKind::Continue => Statement::Continue { location: self.advance().location },
            kind if kind.is_name_part() => match self.peek_name()? {
                Some((_, TokenKind::Takes)) => return self.parse_function(),
                _ => self.parse_named_statement()?,
            },
            _ => return Err(self.unexpected("a statement")),
        };

        self.expect_end_of_statement()?;
        Ok(statement)
    }

    /// `put <expr> into <variable>`
    fn parse_put(&mut self) -> ParseResult<Statement> {
        let start = self.advance().location;
        let value = self.parse_expression()?;
        self.expect(&TokenKind::Into, "'into'")?;
        let target = self.parse_variable()?;

        Ok(Statement::Assignment { name: target.canonical,
                                   value,
                                   location: self.span_from(start) })
    }

    /// `build <variable> up (","? up)*` or `knock <variable> down (","?
    /// down)*`.
    ///
    /// Each `up`/`down` adds one to the magnitude.
    fn parse_step(&mut self, increment: bool) -> ParseResult<Statement> {
        let start = self.advance().location;
        let target = self.parse_variable()?;

        let (step, word) = if increment {
            (TokenKind::Up, "'up'")
        } else {
            (TokenKind::Down, "'down'")
        };

        self.expect(&step, word)?;
        let mut amount = 1_u32;
        loop {
            if self.eat(&step) {
                amount = amount.saturating_add(1);
            } else if self.check(&TokenKind::Comma)
                      && std::mem::discriminant(self.peek_second()) == std::mem::discriminant(&step)
            {
                self.advance();
                self.advance();
                amount = amount.saturating_add(1);
            } else {
                break;
            }
        }

        let location = self.span_from(start);
        Ok(if increment {
               Statement::Increment { name: target.canonical,
                                      amount,
                                      location }
           } else {
               Statement::Decrement { name: target.canonical,
                                      amount,
                                      location }
           })
    }

    /// A statement starting with a name, other than a function declaration.
    ///
    /// Grammar:
    /// ```text
    /// assignment     := variable ("is" | "was" | "were" | "are" | "'s" | "thinks" | "says") expr
    /// expr_statement := name "taking" argument (separator argument)*
    ///                 | name expr?
    /// ```
    fn parse_named_statement(&mut self) -> ParseResult<Statement> {
        let Some((name, following)) = self.peek_name()? else {
            return Err(self.unexpected("a statement"));
        };

        match following {
            TokenKind::Assignment | TokenKind::Is | TokenKind::Says | TokenKind::Thinks => {
                let target = self.parse_variable()?;
                self.advance();
                let value = self.parse_expression()?;
                Ok(Statement::Assignment { name: target.canonical,
                                           value,
                                           location: self.span_from(target.location) })
            },
            TokenKind::Taking => {
                let expr = self.parse_expression()?;
                let location = expr.location();
                Ok(Statement::Expression { expr,
                                           location })
            },
            _ => {
                if !self.functions.contains(&name.canonical) {
                    return Err(ParseError::UnknownFunction { name:     name.canonical,
                                                             location: name.location, });
                }

                let callee = self.parse_function_name()?;
                let arguments = match self.peek_kind() {
                    TokenKind::Newline | TokenKind::Eof => Vec::new(),
                    _ => vec![self.parse_expression()?],
                };

                let location = self.span_from(callee.location);
                Ok(Statement::Expression { expr: Expr::FunctionCall { name: callee.canonical,
                                                                      arguments,
                                                                      location },
                                           location })
            },
        }
    }
}
