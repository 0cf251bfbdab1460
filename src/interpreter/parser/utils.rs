use std::{iter::Peekable, slice::Iter};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
    location::SourceLocation,
};

/// A variable or function name as written in the source.
#[derive(Debug, Clone)]
pub(in crate::interpreter::parser) struct Name {
    /// Canonical lowercase form.
    pub canonical: String,
    /// Span of every token in the name.
    pub location:  SourceLocation,
    /// Number of tokens the name occupies.
    pub length:    usize,
    /// Whether the name was a pronoun.
    pub pronoun:   bool,
}

/// Reads one name from `tokens` without any side effects on the parser.
///
/// Three forms collapse to a canonical lowercase name:
/// - common variable: an article plus one word (`my heart`),
/// - proper variable: a run of capitalized words (`Doctor Feelgood` becomes
///   `doctor feelgood`),
/// - bare word (`heart`).
///
/// A pronoun resolves to `last_name`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the name.
/// - `last_name`: Current content of the pronoun register.
///
/// # Returns
/// `Ok(None)` when the next token cannot start a name.
///
/// # Errors
/// - `UnexpectedToken` if an article is not followed by a word.
/// - `PronounWithoutReferent` if a pronoun appears before any variable.
pub(in crate::interpreter::parser) fn read_name(tokens: &mut Peekable<Iter<'_, Token>>,
                                                last_name: Option<&str>)
                                                -> ParseResult<Option<Name>> {
    let Some(first) = tokens.next_if(|t| t.kind.is_name_part()) else {
        return Ok(None);
    };

    let name = match first.kind {
        TokenKind::Pronoun => {
            let canonical =
                last_name.ok_or_else(|| ParseError::PronounWithoutReferent { pronoun:  first.lexeme.clone(),
                                                                             location: first.location, })?;
            Name { canonical: canonical.to_string(),
                   location:  first.location,
                   length:    1,
                   pronoun:   true, }
        },
        TokenKind::Article => match tokens.next_if(|t| matches!(t.kind, TokenKind::Word { .. })) {
            Some(word) => Name { canonical: format!("{} {}", first.lexeme, word.lexeme),
                                 location:  first.location.combine(&word.location),
                                 length:    2,
                                 pronoun:   false, },
            None => {
                let found = tokens.peek().map_or_else(|| "end of input".to_string(), |t| t.describe());
                let location = tokens.peek().map_or(first.location, |t| t.location);
                return Err(ParseError::UnexpectedToken { found,
                                                         expected: format!("a word after '{}'",
                                                                           first.lexeme),
                                                         location });
            },
        },
        TokenKind::Word { capitalized: true } => {
            let mut canonical = first.lexeme.clone();
            let mut location = first.location;
            let mut length = 1;
            while let Some(word) =
                tokens.next_if(|t| matches!(t.kind, TokenKind::Word { capitalized: true }))
            {
                canonical.push(' ');
                canonical.push_str(&word.lexeme);
                location = location.combine(&word.location);
                length += 1;
            }
            Name { canonical,
                   location,
                   length,
                   pronoun: false }
        },
        _ => Name { canonical: first.lexeme.clone(),
                    location:  first.location,
                    length:    1,
                    pronoun:   false, },
    };

    Ok(Some(name))
}

impl Parser<'_> {
    /// Looks at the name starting at the next token without consuming it.
    ///
    /// # Returns
    /// The name and the kind of the token following it, or `None` when no
    /// name starts here.
    pub(in crate::interpreter::parser) fn peek_name(&self) -> ParseResult<Option<(Name, TokenKind)>> {
        let mut lookahead = self.tokens.clone();
        let Some(name) = read_name(&mut lookahead, self.last_name.as_deref())? else {
            return Ok(None);
        };
        let following = lookahead.peek().map_or(TokenKind::Eof, |t| t.kind.clone());
        Ok(Some((name, following)))
    }

    /// Consumes a variable name and records it in the pronoun register.
    ///
    /// # Errors
    /// `UnexpectedToken` if no name starts here, plus the errors of
    /// [`read_name`].
    pub(in crate::interpreter::parser) fn parse_variable(&mut self) -> ParseResult<Name> {
        let name = self.consume_name("a variable name")?;
        if !name.pronoun {
            self.last_name = Some(name.canonical.clone());
        }
        Ok(name)
    }

    /// Consumes a function name. Function names never touch the pronoun
    /// register.
    pub(in crate::interpreter::parser) fn parse_function_name(&mut self) -> ParseResult<Name> {
        self.consume_name("a function name")
    }

    fn consume_name(&mut self, expected: &str) -> ParseResult<Name> {
        let Some((name, _)) = self.peek_name()? else {
            return Err(self.unexpected(expected));
        };
        for _ in 0..name.length {
            self.advance();
        }
        Ok(name)
    }
}
