use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{EvalResult, Evaluator, Flow},
};

impl Evaluator<'_> {
    /// Runs a pre-test loop.
    ///
    /// The condition is re-evaluated before every iteration, including the
    /// first. `while` runs while it is truthy, `until` while it is not.
    ///
    /// # Parameters
    /// - `condition`: Loop condition.
    /// - `body`: Statements of the loop body.
    /// - `run_while`: `true` for `while`, `false` for `until`.
    ///
    /// # Returns
    /// [`Flow::Normal`] once the loop ends or breaks, or the [`Flow::Return`]
    /// of a `give back` inside the body.
    pub(in crate::interpreter) fn exec_loop(&mut self,
                                            condition: &Expr,
                                            body: &[Statement],
                                            run_while: bool)
                                            -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() == run_while {
            match self.exec_block(body)? {
                Flow::Break => break,
                Flow::Normal | Flow::Continue => {},
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }
}
