use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::token::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses `or` and `nor` chains.
    ///
    /// The rule is: `logical_or := logical_and (("or" | "nor") logical_and)*`
    ///
    /// # Returns
    /// A left-associative `Expr::BinaryOp` tree, or the single operand.
    pub(in crate::interpreter::parser) fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Or => BinaryOperator::Or,
                TokenKind::Nor => BinaryOperator::Nor,
                _ => break,
            };
            self.advance();
            let right = self.parse_logical_and()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses `and` chains.
    ///
    /// The rule is: `logical_and := equality ("and" equality)*`
    pub(in crate::interpreter::parser) fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.eat(&TokenKind::And) {
            let right = self.parse_equality()?;
            left = binary(left, BinaryOperator::And, right);
        }
        Ok(left)
    }

    /// Parses equality and inequality.
    ///
    /// The rule is: `equality := comparison (("is" "not"? | "ain't") comparison)*`
    ///
    /// An `is` that starts a comparison phrase (`is higher than`, `is as low
    /// as`, ...) belongs to the comparison level and is left alone here.
    pub(in crate::interpreter::parser) fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Is => {
                    self.advance();
                    if self.eat(&TokenKind::Not) {
                        BinaryOperator::NotEqual
                    } else {
                        BinaryOperator::Equal
                    }
                },
                TokenKind::NotEqual => {
                    self.advance();
                    BinaryOperator::NotEqual
                },
                _ => break,
            };
            let right = self.parse_comparison()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses the ordering comparisons.
    ///
    /// The rule is:
    /// ```text
    /// comparison := additive (ordering additive)*
    /// ordering   := "is" (greater | less) "than"
    ///             | "is" "as" (great | little) "as"
    /// ```
    /// where each of `greater`, `less`, `great` and `little` stands for its
    /// family of synonyms (`higher`, `bigger`, `stronger`, ...).
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.peek_ordering() {
            // `is`, then either `greater than` or `as great as`.
            self.advance();
            if self.eat(&TokenKind::As) {
                self.advance();
                self.expect(&TokenKind::As, "'as'")?;
            } else {
                self.advance();
                self.expect(&TokenKind::Than, "'than'")?;
            }
            let right = self.parse_additive()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Identifies an ordering phrase at the cursor without consuming it.
    fn peek_ordering(&mut self) -> Option<BinaryOperator> {
        if !self.check(&TokenKind::Is) {
            return None;
        }
        let mut lookahead = self.tokens.clone();
        lookahead.next();
        match lookahead.next().map(|t| &t.kind) {
            Some(TokenKind::Greater) => Some(BinaryOperator::Greater),
            Some(TokenKind::Less) => Some(BinaryOperator::Less),
            Some(TokenKind::As) => match lookahead.next().map(|t| &t.kind) {
                Some(TokenKind::Great) => Some(BinaryOperator::GreaterEqual),
                Some(TokenKind::Little) => Some(BinaryOperator::LessEqual),
                _ => None,
            },
            _ => None,
        }
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `additive := multiplicative (("plus" | "minus")
    /// multiplicative)*`, with `with` and `without` as synonyms.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `multiplicative := unary (("times" | "over") unary)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Times => BinaryOperator::Mul,
                TokenKind::Over => BinaryOperator::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }
}

/// Builds a binary node spanning both operands.
fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let location = left.location().combine(&right.location());
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     location }
}
