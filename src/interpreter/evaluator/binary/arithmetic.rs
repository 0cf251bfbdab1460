use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    location::SourceLocation,
    util::num::is_zero,
};

impl Evaluator<'_> {
    /// Evaluates `plus`, `minus`, `times` or `over`.
    ///
    /// `plus` concatenates when either operand is a string, adds when both
    /// have a numeric reading and otherwise concatenates the display forms
    /// (`true plus mysterious` is `"truemysterious"`). The other operators
    /// need a numeric reading of both operands, where `null` reads as zero.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `location`: Span of the expression, for errors.
    ///
    /// # Errors
    /// `ArithmeticError` for a non-numeric operand or a zero divisor.
    ///
    /// # Example
    /// ```
    /// use rockstar::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    ///     location::SourceLocation,
    /// };
    ///
    /// let loc = SourceLocation::default();
    /// let sum = Evaluator::eval_arithmetic(BinaryOperator::Add,
    ///                                      &Value::from("Rock"),
    ///                                      &Value::Number(5.into()),
    ///                                      loc).unwrap();
    /// assert_eq!(sum, Value::from("Rock5"));
    ///
    /// let zero = Value::Number(0.into());
    /// assert!(Evaluator::eval_arithmetic(BinaryOperator::Div, &zero, &zero, loc).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           location: SourceLocation)
                           -> EvalResult<Value> {
        if op == BinaryOperator::Add {
            return Ok(Self::eval_plus(left, right));
        }

        let (Some(a), Some(b)) = (left.to_number(), right.to_number()) else {
            return Err(RuntimeError::ArithmeticError { details: format!("cannot apply '{op}' to {} and {}",
                                                                        left.type_name(),
                                                                        right.type_name()),
                                                       location });
        };

        let result = match op {
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => {
                if is_zero(&b) {
                    return Err(RuntimeError::ArithmeticError { details: "division by zero".to_string(),
                                                               location });
                }
                a / b
            },
            _ => {
                return Err(RuntimeError::ArithmeticError { details: format!("'{op}' is not arithmetic"),
                                                           location });
            },
        };

        Ok(Value::Number(result))
    }

    fn eval_plus(left: &Value, right: &Value) -> Value {
        if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
            return Value::Str(format!("{left}{right}"));
        }
        match (left.to_number(), right.to_number()) {
            (Some(a), Some(b)) => Value::Number(a + b),
            _ => Value::Str(format!("{left}{right}")),
        }
    }
}

