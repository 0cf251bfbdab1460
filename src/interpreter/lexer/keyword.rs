use logos::Logos;

use crate::interpreter::lexer::token::TokenKind;

/// The keyword table.
///
/// Every alphabetic run in the source is matched against this table as a
/// whole, ignoring ASCII case. Variants that open a compound phrase (`take`,
/// `give`, `listen`, `break`, `ain`) or a poetic assignment (`is`, `says`)
/// are resolved by the lexer; the rest map straight to a [`TokenKind`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    #[token("mysterious", ignore(ascii_case))]
    Mysterious,
    #[token("null", ignore(ascii_case))]
    #[token("nothing", ignore(ascii_case))]
    #[token("nowhere", ignore(ascii_case))]
    #[token("nobody", ignore(ascii_case))]
    #[token("gone", ignore(ascii_case))]
    #[token("empty", ignore(ascii_case))]
    Null,
    #[token("true", ignore(ascii_case))]
    #[token("right", ignore(ascii_case))]
    #[token("yes", ignore(ascii_case))]
    #[token("ok", ignore(ascii_case))]
    True,
    #[token("false", ignore(ascii_case))]
    #[token("wrong", ignore(ascii_case))]
    #[token("no", ignore(ascii_case))]
    #[token("lies", ignore(ascii_case))]
    False,
    #[token("it", ignore(ascii_case))]
    #[token("he", ignore(ascii_case))]
    #[token("she", ignore(ascii_case))]
    #[token("him", ignore(ascii_case))]
    #[token("her", ignore(ascii_case))]
    #[token("they", ignore(ascii_case))]
    #[token("them", ignore(ascii_case))]
    #[token("ze", ignore(ascii_case))]
    #[token("hir", ignore(ascii_case))]
    #[token("zie", ignore(ascii_case))]
    #[token("zir", ignore(ascii_case))]
    #[token("xe", ignore(ascii_case))]
    #[token("xem", ignore(ascii_case))]
    #[token("ve", ignore(ascii_case))]
    #[token("ver", ignore(ascii_case))]
    Pronoun,
    #[token("a", ignore(ascii_case))]
    #[token("an", ignore(ascii_case))]
    #[token("the", ignore(ascii_case))]
    #[token("my", ignore(ascii_case))]
    #[token("your", ignore(ascii_case))]
    Article,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("else", ignore(ascii_case))]
    Else,
    #[token("while", ignore(ascii_case))]
    While,
    #[token("until", ignore(ascii_case))]
    Until,
    #[token("takes", ignore(ascii_case))]
    Takes,
    #[token("and", ignore(ascii_case))]
    And,
    #[token("taking", ignore(ascii_case))]
    Taking,
    #[token("build", ignore(ascii_case))]
    Build,
    #[token("up", ignore(ascii_case))]
    Up,
    #[token("knock", ignore(ascii_case))]
    Knock,
    #[token("down", ignore(ascii_case))]
    Down,
    #[token("break", ignore(ascii_case))]
    Break,
    #[token("continue", ignore(ascii_case))]
    Continue,
    #[token("take", ignore(ascii_case))]
    Take,
    #[token("put", ignore(ascii_case))]
    Put,
    #[token("into", ignore(ascii_case))]
    Into,
    #[token("listen", ignore(ascii_case))]
    Listen,
    #[token("say", ignore(ascii_case))]
    #[token("shout", ignore(ascii_case))]
    #[token("whisper", ignore(ascii_case))]
    #[token("scream", ignore(ascii_case))]
    Say,
    #[token("give", ignore(ascii_case))]
    Give,
    #[token("says", ignore(ascii_case))]
    Says,
    #[token("is", ignore(ascii_case))]
    #[token("are", ignore(ascii_case))]
    #[token("was", ignore(ascii_case))]
    #[token("were", ignore(ascii_case))]
    Is,
    #[token("thinks", ignore(ascii_case))]
    Thinks,
    #[token("as", ignore(ascii_case))]
    As,
    #[token("than", ignore(ascii_case))]
    Than,
    #[token("or", ignore(ascii_case))]
    Or,
    #[token("nor", ignore(ascii_case))]
    Nor,
    #[token("higher", ignore(ascii_case))]
    #[token("greater", ignore(ascii_case))]
    #[token("bigger", ignore(ascii_case))]
    #[token("stronger", ignore(ascii_case))]
    Greater,
    #[token("lower", ignore(ascii_case))]
    #[token("less", ignore(ascii_case))]
    #[token("smaller", ignore(ascii_case))]
    #[token("weaker", ignore(ascii_case))]
    Less,
    #[token("high", ignore(ascii_case))]
    #[token("great", ignore(ascii_case))]
    #[token("big", ignore(ascii_case))]
    #[token("strong", ignore(ascii_case))]
    Great,
    #[token("low", ignore(ascii_case))]
    #[token("little", ignore(ascii_case))]
    #[token("small", ignore(ascii_case))]
    #[token("weak", ignore(ascii_case))]
    Little,
    #[token("aint", ignore(ascii_case))]
    Aint,
    #[token("ain", ignore(ascii_case))]
    Ain,
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("plus", ignore(ascii_case))]
    #[token("with", ignore(ascii_case))]
    Plus,
    #[token("minus", ignore(ascii_case))]
    #[token("without", ignore(ascii_case))]
    Minus,
    #[token("times", ignore(ascii_case))]
    #[token("of", ignore(ascii_case))]
    Times,
    #[token("over", ignore(ascii_case))]
    Over,
}

/// Looks up a whole word in the keyword table.
///
/// Returns `None` when the word is not a keyword, including words that only
/// start with one (`itself`, `android`).
///
/// # Example
/// ```
/// use rockstar::interpreter::lexer::keyword::{Keyword, classify};
///
/// assert_eq!(classify("Nothing"), Some(Keyword::Null));
/// assert_eq!(classify("WHISPER"), Some(Keyword::Say));
/// assert_eq!(classify("itself"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Keyword> {
    let mut lexer = Keyword::lexer(word);
    match lexer.next() {
        Some(Ok(keyword)) if lexer.span().end == word.len() => Some(keyword),
        _ => None,
    }
}

impl Keyword {
    /// The token kind for keywords that need no further scanning.
    ///
    /// Returns `None` for keywords the lexer must resolve with lookahead or
    /// poetic-literal handling.
    #[must_use]
    pub fn simple_kind(self) -> Option<TokenKind> {
        Some(match self {
            Self::Mysterious => TokenKind::Mysterious,
            Self::Null => TokenKind::Null,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::Pronoun => TokenKind::Pronoun,
            Self::Article => TokenKind::Article,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::While => TokenKind::While,
            Self::Until => TokenKind::Until,
            Self::Takes => TokenKind::Takes,
            Self::And => TokenKind::And,
            Self::Taking => TokenKind::Taking,
            Self::Build => TokenKind::Build,
            Self::Up => TokenKind::Up,
            Self::Knock => TokenKind::Knock,
            Self::Down => TokenKind::Down,
            Self::Continue => TokenKind::Continue,
            Self::Put => TokenKind::Put,
            Self::Into => TokenKind::Into,
            Self::Say => TokenKind::Say,
            Self::Thinks => TokenKind::Thinks,
            Self::As => TokenKind::As,
            Self::Than => TokenKind::Than,
            Self::Or => TokenKind::Or,
            Self::Nor => TokenKind::Nor,
            Self::Greater => TokenKind::Greater,
            Self::Less => TokenKind::Less,
            Self::Great => TokenKind::Great,
            Self::Little => TokenKind::Little,
            Self::Aint => TokenKind::NotEqual,
            Self::Not => TokenKind::Not,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Times => TokenKind::Times,
            Self::Over => TokenKind::Over,
            Self::Break | Self::Take | Self::Listen | Self::Give | Self::Says | Self::Is | Self::Ain => {
                return None;
            },
        })
    }

    /// Tests whether this keyword is a constant a poetic assignment may hold
    /// on its own.
    #[must_use]
    pub const fn is_poetic_constant(self) -> bool {
        matches!(self, Self::Mysterious | Self::Null | Self::True | Self::False)
    }
}
