use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    location::SourceLocation,
};

impl Evaluator<'_> {
    /// Evaluates a binary expression.
    ///
    /// Logical operators go to [`eval_logic`](Evaluator::eval_logic) with the
    /// unevaluated right operand so they can short-circuit. For every other
    /// operator both operands are evaluated, left first, and the values are
    /// combined by [`eval_binary`](Evaluator::eval_binary).
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `location`: Span of the whole expression, for errors.
    pub(in crate::interpreter) fn eval_binary_op(&mut self,
                                                 left: &Expr,
                                                 op: BinaryOperator,
                                                 right: &Expr,
                                                 location: SourceLocation)
                                                 -> EvalResult<Value> {
        use BinaryOperator::{And, Nor, Or};

        if matches!(op, And | Or | Nor) {
            return self.eval_logic(op, left, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, location)
    }

    /// Combines two values with a non-logical binary operator.
    ///
    /// # Returns
    /// The result of the arithmetic or comparison.
    ///
    /// # Example
    /// ```
    /// use rockstar::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     location::SourceLocation,
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Greater,
    ///                                     &Value::Number(3.into()),
    ///                                     &Value::from("2"),
    ///                                     SourceLocation::default());
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       location: SourceLocation)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Nor, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, location),
            Equal | NotEqual | Greater | Less | GreaterEqual | LessEqual => {
                Self::eval_comparison(op, left, right, location)
            },
            And | Or | Nor => Ok(Value::Bool(Self::combine_logic(op,
                                                                 left.is_truthy(),
                                                                 right.is_truthy()))),
        }
    }
}
