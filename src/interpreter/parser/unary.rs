use crate::{
    ast::{Expr, Literal},
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix `not`.
    ///
    /// The rule is: `unary := "not" unary | call`
    ///
    /// # Returns
    /// An `Expr::Not` wrapping the operand, or the operand itself.
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.check(&TokenKind::Not) {
            let start = self.advance().location;
            let expr = self.parse_unary()?;
            let location = start.combine(&expr.location());
            return Ok(Expr::Not { expr: Box::new(expr),
                                  location });
        }
        self.parse_call()
    }

    /// Parses a function call, or falls through to an atom.
    ///
    /// The rule is:
    /// ```text
    /// call      := name "taking" argument (separator argument)* | atom
    /// argument  := call
    /// separator := "," | "&" | "'n'"
    /// ```
    ///
    /// Arguments are atoms (or nested calls), so operators after the last
    /// argument apply to the call result: `F taking A, B is nothing` compares
    /// `F(A, B)` with null.
    pub(in crate::interpreter::parser) fn parse_call(&mut self) -> ParseResult<Expr> {
        let Some((_, TokenKind::Taking)) = self.peek_name()? else {
            return self.parse_atom();
        };

        let name = self.parse_function_name()?;
        self.advance();

        let mut arguments = vec![self.parse_call()?];
        while matches!(self.peek_kind(), TokenKind::Comma | TokenKind::ArgumentSeparator) {
            self.advance();
            arguments.push(self.parse_call()?);
        }

        let location = self.span_from(name.location);
        Ok(Expr::FunctionCall { name: name.canonical,
                                arguments,
                                location })
    }

    /// Parses a literal or a variable reference.
    ///
    /// The rule is: `atom := number | string | boolean | null | mysterious |
    /// variable`
    ///
    /// # Errors
    /// `UnexpectedToken` or `UnexpectedEndOfInput` if nothing that can start
    /// a value is next.
    pub(in crate::interpreter::parser) fn parse_atom(&mut self) -> ParseResult<Expr> {
        let literal = match self.peek_kind() {
            TokenKind::Number(n) => Literal::Number(n.clone()),
            TokenKind::Str(s) => Literal::Str(s.clone()),
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Null => Literal::Null,
            TokenKind::Mysterious => Literal::Mysterious,
            kind if kind.is_name_part() => {
                let name = self.parse_variable()?;
                return Ok(Expr::Variable { name:     name.canonical,
                                           location: name.location, });
            },
            _ => return Err(self.unexpected("an expression")),
        };

        let location = self.advance().location;
        Ok(Expr::Literal { value: literal,
                           location })
    }
}
