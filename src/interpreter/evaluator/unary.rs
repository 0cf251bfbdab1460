use bigdecimal::BigDecimal;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    location::SourceLocation,
    util::num::from_count,
};

impl Evaluator<'_> {
    /// Evaluates `not`: the negated truthiness of the operand.
    pub(in crate::interpreter) fn eval_not(&mut self, expr: &Expr) -> EvalResult<Value> {
        Ok(Value::Bool(!self.eval(expr)?.is_truthy()))
    }

    /// Applies `build ... up` or `knock ... down` to a variable.
    ///
    /// Numbers move by `amount`, with an unset or null variable counting as
    /// zero. Booleans flip once per step, so only an odd `amount` changes
    /// them.
    ///
    /// # Parameters
    /// - `name`: Canonical name of the variable.
    /// - `amount`: Number of `up`s or `down`s.
    /// - `increment`: `true` for `build`, `false` for `knock`.
    /// - `location`: Span of the statement.
    ///
    /// # Errors
    /// `TypeError` if the variable holds a string or `mysterious`.
    pub(in crate::interpreter) fn step_variable(&mut self,
                                                name: &str,
                                                amount: u32,
                                                increment: bool,
                                                location: SourceLocation)
                                                -> EvalResult<()> {
        let stepped = match self.env.get(name) {
            Value::Null => step(&BigDecimal::from(0), amount, increment),
            Value::Number(n) => step(&n, amount, increment),
            Value::Bool(b) => Value::Bool(b ^ (amount % 2 == 1)),
            other => {
                let verb = if increment { "increment" } else { "decrement" };
                return Err(RuntimeError::TypeError { details: format!("cannot {verb} {}",
                                                                      other.type_name()),
                                                     location });
            },
        };

        self.env.set(name, stepped);
        Ok(())
    }
}

fn step(value: &BigDecimal, amount: u32, increment: bool) -> Value {
    let delta = from_count(amount);
    Value::Number(if increment { value + delta } else { value - delta })
}
