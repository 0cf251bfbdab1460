use crate::location::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into tokens.
pub enum LexError {
    /// A character that starts no token.
    UnknownSymbol {
        /// The offending character.
        symbol:   char,
        /// Where the character appears.
        location: SourceLocation,
    },
    /// A string literal reached the end of its line or of the input without
    /// a closing quote.
    UnclosedString {
        /// Span from the opening quote to where scanning stopped.
        location: SourceLocation,
    },
    /// A comment reached the end of the input without a closing parenthesis.
    UnclosedComment {
        /// Span from the opening parenthesis to the end of the input.
        location: SourceLocation,
    },
    /// Numeric text that is not a valid decimal.
    InvalidNumber {
        /// The consumed text.
        text:     String,
        /// Span of the consumed text.
        location: SourceLocation,
    },
    /// A compound keyword was started but a required word did not follow.
    ExpectedWord {
        /// The word that was required.
        expected: &'static str,
        /// The full phrase being matched.
        phrase:   &'static str,
        /// Where the word was expected.
        location: SourceLocation,
    },
    /// Text after a literal in a poetic assignment.
    TrailingPoeticText {
        /// Span of the unexpected text.
        location: SourceLocation,
    },
    /// Leading whitespace that mixes tabs and spaces.
    MixedIndentation {
        /// Span of the leading whitespace.
        location: SourceLocation,
    },
    /// A poetic number literal contained more than one decimal point.
    RepeatedDecimalPoint {
        /// Where the second point appears.
        location: SourceLocation,
    },
}

impl LexError {
    /// Location of the construct that failed to lex.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::UnknownSymbol { location, .. }
            | Self::UnclosedString { location }
            | Self::UnclosedComment { location }
            | Self::InvalidNumber { location, .. }
            | Self::ExpectedWord { location, .. }
            | Self::TrailingPoeticText { location }
            | Self::MixedIndentation { location }
            | Self::RepeatedDecimalPoint { location } => *location,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, .. } => write!(f, "Unknown symbol '{symbol}'."),
            Self::UnclosedString { .. } => write!(f, "Unclosed string."),
            Self::UnclosedComment { .. } => write!(f, "Unclosed comment."),
            Self::InvalidNumber { text, .. } => write!(f, "{text} is not a valid number."),
            Self::ExpectedWord { expected, phrase, .. } => {
                write!(f, "Expected '{expected}' while matching '{phrase}'.")
            },
            Self::TrailingPoeticText { .. } => {
                write!(f, "Nothing else can follow a poetic literal.")
            },
            Self::MixedIndentation { .. } => {
                write!(f, "Cannot mix spaces and tabs within indentation.")
            },
            Self::RepeatedDecimalPoint { .. } => write!(f,
                                                        "A poetic number can contain only one decimal point."),
        }
    }
}

impl std::error::Error for LexError {}
