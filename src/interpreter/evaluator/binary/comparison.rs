use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    location::SourceLocation,
};

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `is` and `ain't` use [`Value::loosely_equals`] and never fail. The
    /// ordering phrases use [`Value::compare`].
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `location`: Span of the comparison, for errors.
    ///
    /// # Returns
    /// A `Value::Bool`.
    ///
    /// # Errors
    /// `ComparisonError` or `TypeError` from ordering incompatible values.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           location: SourceLocation)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => left.loosely_equals(right),
            NotEqual => !left.loosely_equals(right),
            Greater => left.compare(right, location)? == Ordering::Greater,
            Less => left.compare(right, location)? == Ordering::Less,
            GreaterEqual => left.compare(right, location)? != Ordering::Less,
            LessEqual => left.compare(right, location)? != Ordering::Greater,
            _ => {
                return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison"),
                                                     location });
            },
        };

        Ok(Value::Bool(result))
    }
}
