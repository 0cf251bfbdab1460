use crate::location::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Operands whose types cannot be combined by the operation.
    TypeError {
        /// Details about the mismatch.
        details:  String,
        /// Span of the offending expression or statement.
        location: SourceLocation,
    },
    /// Division by zero, or a non-numeric operand to arithmetic.
    ArithmeticError {
        /// Details about the failure.
        details:  String,
        /// Span of the offending expression.
        location: SourceLocation,
    },
    /// An ordering comparison involving a value that has no order.
    ComparisonError {
        /// Details about the failure.
        details:  String,
        /// Span of the comparison.
        location: SourceLocation,
    },
    /// A function was called with the wrong number of arguments.
    ArityError {
        /// The function's name.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Span of the call.
        location: SourceLocation,
    },
    /// Reading from the input source or writing to the output sink failed.
    Io {
        /// The underlying error message.
        details:  String,
        /// Span of the statement performing the I/O.
        location: SourceLocation,
    },
}

impl RuntimeError {
    /// Location of the expression or statement that failed.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::TypeError { location, .. }
            | Self::ArithmeticError { location, .. }
            | Self::ComparisonError { location, .. }
            | Self::ArityError { location, .. }
            | Self::Io { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details, .. } => write!(f, "Type error: {details}."),
            Self::ArithmeticError { details, .. } => write!(f, "Arithmetic error: {details}."),
            Self::ComparisonError { details, .. } => write!(f, "Comparison error: {details}."),
            Self::ArityError { name,
                               expected,
                               found,
                               .. } => write!(f,
                                              "Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::Io { details, .. } => write!(f, "I/O error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
