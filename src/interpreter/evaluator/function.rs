use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::core::Value,
    },
    location::SourceLocation,
};

impl Evaluator<'_> {
    /// Evaluates a call to a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's scope, then bound
    /// to the parameters through the environment, so the scope mode decides
    /// whether the caller can observe them. The body runs until it gives back
    /// a value or runs out of statements; `break` and `continue` outside a
    /// loop also end the body.
    ///
    /// # Parameters
    /// - `name`: Canonical function name.
    /// - `arguments`: Argument expressions.
    /// - `location`: Span of the call.
    ///
    /// # Returns
    /// The value given back, or [`Value::Null`] if the body finished without
    /// `give back`.
    ///
    /// # Errors
    /// - `TypeError` if no function of that name has been declared.
    /// - `ArityError` if the argument count differs from the parameter count.
    /// - Any error raised while evaluating arguments or the body.
    pub(in crate::interpreter) fn eval_function_call(&mut self,
                                                     name: &str,
                                                     arguments: &[Expr],
                                                     location: SourceLocation)
                                                     -> EvalResult<Value> {
        let def = self.env
                      .function(name)
                      .ok_or_else(|| RuntimeError::TypeError { details: format!("'{name}' is not a function"),
                                                               location })?;

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArityError { name: name.to_string(),
                                                  expected: def.params.len(),
                                                  found: arguments.len(),
                                                  location });
        }

        let values = arguments.iter()
                              .map(|arg| self.eval(arg))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.env.enter_call();
        for (param, value) in def.params.iter().zip(values) {
            self.env.bind_parameter(param, value);
        }
        let flow = self.exec_block(&def.body);
        self.env.exit_call();

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal | Flow::Break | Flow::Continue => Ok(Value::Null),
        }
    }
}
