/// Lexing errors.
///
/// Raised while scanning raw source text: unknown characters, unterminated
/// strings and comments, malformed numbers, incomplete compound keywords and
/// malformed poetic literals.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree from tokens: unexpected or missing
/// tokens, calls to unknown functions and pronouns with nothing to refer to.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation: incompatible operand types, arithmetic failures,
/// unorderable comparisons, arity mismatches and I/O failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::location::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error that aborts a run, tagged with the phase that raised it.
pub enum Error {
    /// Reserved for a source preprocessing phase; no current phase raises it.
    Preprocessor {
        /// Details about the failure.
        message:  String,
        /// Where the failure occurred.
        location: SourceLocation,
    },
    /// The source text could not be tokenized.
    Lexer(LexError),
    /// The tokens do not form a valid program.
    Parser(ParseError),
    /// The program failed while running.
    Runtime(RuntimeError),
}

impl Error {
    /// Location attached to the underlying error.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::Preprocessor { location, .. } => *location,
            Self::Lexer(e) => e.location(),
            Self::Parser(e) => e.location(),
            Self::Runtime(e) => e.location(),
        }
    }

    /// The error message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Preprocessor { message, .. } => message.clone(),
            Self::Lexer(e) => e.to_string(),
            Self::Parser(e) => e.to_string(),
            Self::Runtime(e) => e.to_string(),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lexer(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parser(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}: {}", self.location(), self.message())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Preprocessor { .. } => None,
            Self::Lexer(e) => Some(e),
            Self::Parser(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
