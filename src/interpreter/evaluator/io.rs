use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    location::SourceLocation,
};

impl Evaluator<'_> {
    /// Writes `value` and a newline to the output sink.
    ///
    /// # Errors
    /// `RuntimeError::Io` if the sink rejects the write.
    pub(in crate::interpreter) fn print(&mut self,
                                        value: &Value,
                                        location: SourceLocation)
                                        -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                                       location })
    }

    /// Pushes buffered output to its destination.
    pub(in crate::interpreter) fn flush(&mut self, location: SourceLocation) -> EvalResult<()> {
        self.output
            .flush()
            .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                            location })
    }

    /// Reads one line from the input source.
    ///
    /// The line terminator (`\n` or `\r\n`) is removed. At the end of input
    /// the result is the empty string.
    ///
    /// # Errors
    /// `RuntimeError::Io` if reading fails.
    pub(in crate::interpreter) fn read_line(&mut self, location: SourceLocation) -> EvalResult<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                            location })?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
