use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `and`, `or` or `nor` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the result. Operands are read by truthiness and the result is always a
    /// boolean.
    ///
    /// # Parameters
    /// - `op`: One of `And`, `Or`, `Nor`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression, evaluated only if needed.
    pub(in crate::interpreter) fn eval_logic(&mut self,
                                             op: BinaryOperator,
                                             left: &Expr,
                                             right: &Expr)
                                             -> EvalResult<Value> {
        let left = self.eval(left)?.is_truthy();

        let decided = match op {
            BinaryOperator::And if !left => Some(false),
            BinaryOperator::Or if left => Some(true),
            BinaryOperator::Nor if left => Some(false),
            _ => None,
        };
        if let Some(result) = decided {
            return Ok(Value::Bool(result));
        }

        let right = self.eval(right)?.is_truthy();
        Ok(Value::Bool(Self::combine_logic(op, left, right)))
    }

    /// The truth table of a logical operator. Non-logical operators yield
    /// `false`.
    #[must_use]
    pub const fn combine_logic(op: BinaryOperator, left: bool, right: bool) -> bool {
        match op {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
            BinaryOperator::Nor => !left && !right,
            _ => false,
        }
    }
}
