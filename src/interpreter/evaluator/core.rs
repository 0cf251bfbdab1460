use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Non-local exits are ordinary return values: every statement runner
/// inspects the flow of what it executed and either absorbs it (loops absorb
/// `Break` and `Continue`, calls absorb `Return`) or hands it upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the nearest enclosing loop.
    Break,
    /// Start the next iteration of the nearest enclosing loop.
    Continue,
    /// Leave the nearest enclosing function with a value.
    Return(Value),
}

/// Tree-walking executor.
///
/// Borrows the [`Environment`] holding program state and the two I/O
/// endpoints for the duration of a run. Nothing here touches the process's
/// standard streams.
pub struct Evaluator<'e> {
    /// Variables and functions.
    pub env:                          &'e mut Environment,
    pub(in crate::interpreter) input:  &'e mut dyn BufRead,
    pub(in crate::interpreter) output: &'e mut dyn Write,
}

impl<'e> Evaluator<'e> {
    /// Creates an evaluator over `env` with the given I/O endpoints.
    pub fn new(env: &'e mut Environment,
               input: &'e mut dyn BufRead,
               output: &'e mut dyn Write)
               -> Self {
        Self { env,
               input,
               output }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, `not`,
    /// binary operations and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of `expr`. Unset variables read as [`Value::Null`].
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, .. } => Ok(self.env.get(name)),
            Expr::Not { expr, .. } => self.eval_not(expr),
            Expr::BinaryOp { left,
                             op,
                             right,
                             location, } => self.eval_binary_op(left, *op, right, *location),
            Expr::FunctionCall { name,
                                 arguments,
                                 location, } => self.eval_function_call(name, arguments, *location),
        }
    }

    /// Runs a statement list in order.
    ///
    /// Stops at the first statement that finishes with anything other than
    /// [`Flow::Normal`] and returns that flow.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec_statement(statement)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// How the statement finished, see [`Flow`].
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::Print { value, location } => {
                let value = self.eval(value)?;
                self.print(&value, *location)?;
                Ok(Flow::Normal)
            },
            Statement::Listen { target, location } => {
                let line = self.read_line(*location)?;
                if let Some(name) = target {
                    self.env.set(name, Value::Str(line));
                }
                Ok(Flow::Normal)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.env.set(name, value);
                Ok(Flow::Normal)
            },
            Statement::Increment { name,
                                   amount,
                                   location, } => {
                self.step_variable(name, *amount, true, *location)?;
                Ok(Flow::Normal)
            },
            Statement::Decrement { name,
                                   amount,
                                   location, } => {
                self.step_variable(name, *amount, false, *location)?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.exec_block(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => self.exec_loop(condition, body, true),
            Statement::Until { condition, body, .. } => self.exec_loop(condition, body, false),
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Continue { .. } => Ok(Flow::Continue),
            Statement::Return { value, .. } => Ok(Flow::Return(self.eval(value)?)),
            Statement::Function(def) => {
                self.env.define_function(def.clone());
                Ok(Flow::Normal)
            },
        }
    }
}
