use bigdecimal::BigDecimal;

use crate::{location::SourceLocation, util::num::format_decimal};

/// The closed set of token categories.
///
/// Literal payloads live in the kind itself. Word-like kinds carry their
/// normalized text in [`Token::lexeme`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// End of the token stream. Always the last token.
    Eof,
    /// `\n`, the statement separator.
    Newline,
    /// One level deeper indentation than the previous line with tokens.
    Indent,
    /// One level shallower indentation than the previous line with tokens.
    Dedent,
    /// `,`
    Comma,
    /// `&` or `'n'` between call arguments.
    ArgumentSeparator,

    /// `mysterious`
    Mysterious,
    /// `null`, `nothing`, `nowhere`, `nobody`, `gone`, `empty`
    Null,
    /// `true`, `right`, `yes`, `ok`
    True,
    /// `false`, `wrong`, `no`, `lies`
    False,
    /// Numeric literal, either written out or decoded from a poetic literal.
    Number(BigDecimal),
    /// String literal, either quoted or the rest of a `says` line.
    Str(String),

    /// `it`, `he`, `she`, `they` and the rest of the pronoun family.
    Pronoun,
    /// `a`, `an`, `the`, `my`, `your`
    Article,
    /// Any word that is not a keyword.
    Word {
        /// Whether the word began with an uppercase letter in the source.
        capitalized: bool,
    },

    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `until`
    Until,

    /// `takes`, opening a parameter list.
    Takes,
    /// `and`, logical conjunction or parameter separator.
    And,
    /// `taking`, opening an argument list.
    Taking,

    /// `build`
    Build,
    /// `up`
    Up,
    /// `knock`
    Knock,
    /// `down`
    Down,
    /// `break` or `break it down`
    Break,
    /// `continue` or `take it to the top`
    Continue,

    /// `put`
    Put,
    /// `into`
    Into,
    /// `listen`
    Listen,
    /// `listen to`
    ListenTo,
    /// `say`, `shout`, `whisper`, `scream`
    Say,
    /// `give back`
    Return,

    /// `says`, followed by a string literal.
    Says,
    /// `is`, `are`, `was`, `were` or `'s` opening a poetic assignment.
    Assignment,
    /// `thinks`, assigning an expression.
    Thinks,

    /// `is`, `are`, `was`, `were` or `'s` used as equality.
    Is,
    /// `as`
    As,
    /// `than`
    Than,
    /// `or`
    Or,
    /// `nor`
    Nor,
    /// `higher`, `greater`, `bigger`, `stronger`
    Greater,
    /// `lower`, `less`, `smaller`, `weaker`
    Less,
    /// `high`, `great`, `big`, `strong`
    Great,
    /// `low`, `little`, `small`, `weak`
    Little,
    /// `aint` or `ain't`
    NotEqual,
    /// `not`
    Not,
    /// `plus`, `with`
    Plus,
    /// `minus`, `without`
    Minus,
    /// `times`, `of`
    Times,
    /// `over`
    Over,
}

impl TokenKind {
    /// Tests whether this kind can be part of a variable name.
    ///
    /// Name parts never mark a line as containing a keyword, so `My heart is
    /// 5` still starts a poetic assignment.
    #[must_use]
    pub const fn is_name_part(&self) -> bool {
        matches!(self, Self::Word { .. } | Self::Article | Self::Pronoun)
    }
}

/// A lexical token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category and literal payload.
    pub kind:     TokenKind,
    /// Lowercase normalized source text for words and keywords, empty for
    /// punctuation, newlines and end of input.
    pub lexeme:   String,
    /// Where the token appears.
    pub location: SourceLocation,
}

impl Token {
    /// Human readable description used in parser error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Indent => "indentation".to_string(),
            TokenKind::Dedent => "end of indentation".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Number(n) => format!("number {}", format_decimal(n)),
            TokenKind::Str(s) => format!("string \"{s}\""),
            _ => format!("'{}'", self.lexeme),
        }
    }
}
