use crate::location::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// Where the token appears.
        location: SourceLocation,
    },
    /// Reached the end of the token stream while a construct was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Location of the end-of-input token.
        location: SourceLocation,
    },
    /// A statement could only be read as a call, but no function of that name
    /// has been declared.
    UnknownFunction {
        /// The canonical name that was used.
        name:     String,
        /// Span of the name.
        location: SourceLocation,
    },
    /// A pronoun appeared before any variable had been named.
    PronounWithoutReferent {
        /// The pronoun as written, lowercase.
        pronoun:  String,
        /// Span of the pronoun.
        location: SourceLocation,
    },
}

impl ParseError {
    /// Location of the offending token.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::UnexpectedToken { location, .. }
            | Self::UnexpectedEndOfInput { location, .. }
            | Self::UnknownFunction { location, .. }
            | Self::PronounWithoutReferent { location, .. } => *location,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected, .. } => {
                write!(f, "Unexpected token {found}, expected {expected}.")
            },
            Self::UnexpectedEndOfInput { expected, .. } => {
                write!(f, "Unexpected end of input, expected {expected}.")
            },
            Self::UnknownFunction { name, .. } => {
                write!(f, "'{name}' is not a known function.")
            },
            Self::PronounWithoutReferent { pronoun, .. } => {
                write!(f, "Pronoun '{pronoun}' used before any variable was named.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
