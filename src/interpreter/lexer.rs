/// Keyword table.
///
/// A `logos` generated, case-insensitive lookup from whole words to keyword
/// categories.
pub mod keyword;
/// Compound keyword recognizers.
///
/// Small dedicated scanners for the multi-word phrases `take it to the top`,
/// `break it down`, `listen to`, `give back` and `ain't`.
pub mod phrase;
/// Poetic literal scanning.
///
/// Decodes the value written after a poetic assignment marker: a number,
/// string or constant literal, or the word-length digits of a poetic number.
pub mod poetic;
/// Token types.
pub mod token;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::lexer::{
        keyword::{Keyword, classify},
        token::{Token, TokenKind},
    },
    location::SourceLocation,
    util::num::parse_decimal,
};

/// Converts source text into a flat token sequence ending in
/// [`TokenKind::Eof`].
///
/// Lexing is deterministic: the same source always produces the same tokens.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use rockstar::interpreter::lexer::{lex, token::TokenKind};
///
/// let tokens = lex("Whisper my heart").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Say,
///                 TokenKind::Article,
///                 TokenKind::Word { capitalized: false },
///                 TokenKind::Eof]);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

/// The context-free building blocks of the source text.
///
/// Words are classified afterwards, since `is`, `says` and the phrase
/// openers depend on what came before them on the line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
pub(crate) enum RawToken {
    /// `12`, `-3`, `12.25`, `.5`, `-.5`
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    #[regex(r"-?\.[0-9]+")]
    Number,
    /// A point with no digits after it, such as `5.`.
    #[regex(r"-?[0-9]+\.")]
    MalformedNumber,
    /// A double-quoted string. Strings never span lines.
    #[regex(r#""[^"\n]*""#)]
    Str,
    /// An opening quote with no closing quote on its line.
    #[regex(r#""[^"\n]*"#)]
    UnclosedStr,
    /// `(` up to the first `)`, across lines.
    #[regex(r"\([^)]*\)", track_comment)]
    Comment,
    /// `(` with no closing `)` before the end of input.
    #[regex(r"\([^)]*", track_comment)]
    UnclosedComment,
    /// `\n`, optionally preceded by `\r`.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        lex.extras.keyword_on_line = false;
    })]
    Newline,
    /// Horizontal whitespace. At the start of a line it is the indentation.
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    /// `,`
    #[token(",")]
    Comma,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `'n'`
    #[token("'n'", ignore(ascii_case))]
    ApostropheN,
    /// `'s`, the contracted assignment marker.
    #[regex("'[sS]")]
    ApostropheS,
    /// A run of letters.
    #[regex(r"\p{L}+")]
    Word,
}

/// Position tracking carried by the `logos` lexer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LexerExtras {
    /// The current 1-based line.
    pub(crate) line:            usize,
    /// Byte offset of the first character of the current line.
    pub(crate) line_start:      usize,
    /// Set once a token other than a name part appears on the current line.
    pub(crate) keyword_on_line: bool,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:            1,
               line_start:      0,
               keyword_on_line: false, }
    }
}

impl LexerExtras {
    /// Accounts for the newlines in `text`, which starts at byte `start`.
    pub(crate) fn track_newlines(&mut self, start: usize, text: &str) {
        for (offset, _) in text.match_indices('\n') {
            self.line += 1;
            self.line_start = start + offset + 1;
        }
    }
}

fn track_comment(lex: &mut logos::Lexer<RawToken>) {
    let start = lex.span().start;
    let text = lex.slice();
    lex.extras.track_newlines(start, text);
}

/// A position in the source, remembered at the start of a token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pub(crate) pos:    usize,
    pub(crate) line:   usize,
    pub(crate) column: usize,
}

/// Turns [`RawToken`]s into [`Token`]s.
///
/// Poetic literals and compound phrases read ahead in the raw lexer's
/// remainder and skip what they consume with `bump`.
pub(crate) struct Lexer<'s> {
    pub(crate) source: &'s str,
    pub(crate) raw:    logos::Lexer<'s, RawToken>,
    tokens:            Vec<Token>,
    /// Indentation level of the last line that produced tokens.
    level:             usize,
    /// Indentation level of the current line.
    line_indent:       usize,
    /// Leading whitespace of the current line that mixes tabs and spaces.
    mixed_indent:      Option<SourceLocation>,
    line_has_tokens:   bool,
    line_has_comment:  bool,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self { source,
               raw: RawToken::lexer(source),
               tokens: Vec::new(),
               level: 0,
               line_indent: 0,
               mixed_indent: None,
               line_has_tokens: false,
               line_has_comment: false }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some((raw, mark)) = self.next_raw() {
            self.lex_raw(raw, mark)?;
        }

        let end = self.mark();
        self.tokens.push(Token { kind:     TokenKind::Eof,
                                 lexeme:   String::new(),
                                 location: self.span(end), });
        Ok(self.tokens)
    }

    /// The next raw token together with the position it starts at.
    pub(crate) fn next_raw(&mut self) -> Option<(Result<RawToken, ()>, Mark)> {
        let mark = self.mark();
        self.raw.next().map(|raw| (raw, mark))
    }

    /// Converts one raw token, which starts at `mark`.
    pub(crate) fn lex_raw(&mut self, raw: Result<RawToken, ()>, mark: Mark) -> Result<(), LexError> {
        let Ok(raw) = raw else {
            let symbol = self.raw.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnknownSymbol { symbol,
                                                 location: self.span(mark) });
        };

        if !matches!(raw, RawToken::Whitespace | RawToken::Newline | RawToken::Comment)
           && let Some(location) = self.mixed_indent.take()
        {
            return Err(LexError::MixedIndentation { location });
        }

        match raw {
            RawToken::Newline => self.lex_newline(mark),
            RawToken::Whitespace => {
                if mark.column == 0 {
                    match measure_indentation(self.raw.slice()) {
                        Some(level) => self.line_indent = level,
                        None => self.mixed_indent = Some(self.span(mark)),
                    }
                }
            },
            RawToken::Comment => self.line_has_comment = true,
            RawToken::UnclosedComment => {
                return Err(LexError::UnclosedComment { location: self.span(mark) });
            },
            RawToken::Str => {
                let slice = self.raw.slice();
                let contents = slice[1..slice.len() - 1].to_string();
                let location = self.span(mark);
                self.push(Token { kind: TokenKind::Str(contents),
                                  lexeme: String::new(),
                                  location });
            },
            RawToken::UnclosedStr => {
                return Err(LexError::UnclosedString { location: self.span(mark) });
            },
            RawToken::Number | RawToken::MalformedNumber => {
                let text = self.raw.slice();
                let location = self.span(mark);
                let Some(number) = parse_decimal(text) else {
                    return Err(LexError::InvalidNumber { text: text.to_string(),
                                                         location });
                };
                self.push(Token { kind: TokenKind::Number(number),
                                  lexeme: String::new(),
                                  location });
            },
            RawToken::Comma => self.push_punctuation(TokenKind::Comma, "", mark),
            RawToken::Ampersand => self.push_punctuation(TokenKind::ArgumentSeparator, "&", mark),
            RawToken::ApostropheN => {
                self.push_punctuation(TokenKind::ArgumentSeparator, "'n'", mark);
            },
            RawToken::ApostropheS => return self.lex_apostrophe_s(mark),
            RawToken::Word => return self.lex_word(mark),
        }
        Ok(())
    }

    /// Position just past the last consumed byte.
    pub(crate) fn mark(&self) -> Mark {
        let pos = self.raw.span().end;
        let extras = &self.raw.extras;
        Mark { pos,
               line: extras.line,
               column: self.source[extras.line_start..pos].chars().count() }
    }

    /// Span from `mark` to the current position.
    pub(crate) fn span(&self, mark: Mark) -> SourceLocation {
        let end = self.mark();
        SourceLocation::new(mark.line, mark.column, end.line, end.column)
    }

    /// Skips spaces and tabs, stopping at a newline.
    pub(crate) fn skip_horizontal_whitespace(&mut self) {
        let rest = self.raw.remainder();
        let len = rest.find(|c: char| c == '\n' || !c.is_whitespace())
                      .unwrap_or(rest.len());
        self.raw.bump(len);
    }

    /// Skips a comment starting at the current position, across lines.
    pub(crate) fn skip_comment(&mut self) -> Result<(), LexError> {
        let mark = self.mark();
        let rest = self.raw.remainder();
        let (len, closed) = match rest.find(')') {
            Some(close) => (close + 1, true),
            None => (rest.len(), false),
        };

        self.raw.extras.track_newlines(mark.pos, &rest[..len]);
        self.raw.bump(len);
        self.line_has_comment = true;

        if closed {
            Ok(())
        } else {
            Err(LexError::UnclosedComment { location: self.span(mark) })
        }
    }

    /// Appends a token, opening the line's indentation first if needed.
    pub(crate) fn push(&mut self, token: Token) {
        if !self.line_has_tokens {
            self.push_indentation(token.location);
        }
        if !token.kind.is_name_part() {
            self.raw.extras.keyword_on_line = true;
        }
        self.line_has_tokens = true;
        self.tokens.push(token);
    }

    /// Emits one `Indent` or `Dedent` per level changed since the last line
    /// with tokens.
    fn push_indentation(&mut self, first: SourceLocation) {
        let location = SourceLocation::new(first.start_line, 0, first.start_line, first.start_column);
        let (kind, count) = if self.line_indent >= self.level {
            (TokenKind::Indent, self.line_indent - self.level)
        } else {
            (TokenKind::Dedent, self.level - self.line_indent)
        };

        for _ in 0..count {
            self.tokens.push(Token { kind: kind.clone(),
                                     lexeme: String::new(),
                                     location });
        }
        self.level = self.line_indent;
    }

    /// Whether a poetic literal may follow an assignment marker found now.
    pub(crate) const fn in_poetic_position(&self) -> bool {
        !self.raw.extras.keyword_on_line
    }

    fn lex_newline(&mut self, mark: Mark) {
        // A line holding nothing but comments is not a blank line.
        if self.line_has_tokens || !self.line_has_comment {
            self.tokens.push(Token { kind:     TokenKind::Newline,
                                     lexeme:   String::new(),
                                     location: self.span(mark), });
        }

        self.line_indent = 0;
        self.mixed_indent = None;
        self.line_has_tokens = false;
        self.line_has_comment = false;
    }

    fn push_punctuation(&mut self, kind: TokenKind, lexeme: &str, mark: Mark) {
        let location = self.span(mark);
        self.push(Token { kind,
                          lexeme: lexeme.to_string(),
                          location });
    }

    /// `'s` directly after a word and not followed by a letter.
    fn lex_apostrophe_s(&mut self, mark: Mark) -> Result<(), LexError> {
        let follows_word = self.source[..mark.pos].chars()
                                                  .next_back()
                                                  .is_some_and(char::is_alphabetic);
        let precedes_word = self.raw.remainder().chars().next().is_some_and(char::is_alphabetic);

        if follows_word && !precedes_word {
            return self.lex_assignment_marker(mark, "'s".to_string());
        }
        Err(LexError::UnknownSymbol { symbol:   '\'',
                                      location: self.span(mark), })
    }

    /// Classifies a word.
    fn lex_word(&mut self, mark: Mark) -> Result<(), LexError> {
        let word = self.raw.slice();
        let lexeme = word.to_lowercase();
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);

        let Some(keyword) = classify(word) else {
            let location = self.span(mark);
            self.push(Token { kind: TokenKind::Word { capitalized },
                              lexeme,
                              location });
            return Ok(());
        };

        if let Some(kind) = keyword.simple_kind() {
            let location = self.span(mark);
            self.push(Token { kind,
                              lexeme,
                              location });
            return Ok(());
        }

        match keyword {
            Keyword::Is => self.lex_assignment_marker(mark, lexeme),
            Keyword::Says => self.lex_says(mark, lexeme),
            Keyword::Take => self.lex_take_it_to_the_top(mark),
            Keyword::Break => self.lex_break(mark),
            Keyword::Listen => {
                self.lex_listen(mark);
                Ok(())
            },
            Keyword::Give => self.lex_give_back(mark),
            Keyword::Ain => {
                self.lex_ain(mark, capitalized);
                Ok(())
            },
            _ => unreachable!("keyword {keyword:?} has a simple token kind"),
        }
    }

    /// Emits `is`/`was`/`were`/`are`/`'s` either as the start of a poetic
    /// assignment or, after another keyword on the same line, as equality.
    fn lex_assignment_marker(&mut self, mark: Mark, lexeme: String) -> Result<(), LexError> {
        let location = self.span(mark);

        if self.in_poetic_position() {
            self.push(Token { kind: TokenKind::Assignment,
                              lexeme,
                              location });
            self.lex_poetic_literal()
        } else {
            self.push(Token { kind: TokenKind::Is,
                              lexeme,
                              location });
            Ok(())
        }
    }

    fn lex_says(&mut self, mark: Mark, lexeme: String) -> Result<(), LexError> {
        let poetic = self.in_poetic_position();
        let location = self.span(mark);
        self.push(Token { kind: TokenKind::Says,
                          lexeme,
                          location });

        if poetic {
            self.lex_poetic_string();
        }
        Ok(())
    }
}

/// Indentation level of leading whitespace: one per tab or per four spaces.
///
/// Returns `None` when tabs and spaces are mixed.
fn measure_indentation(whitespace: &str) -> Option<usize> {
    let tabs = whitespace.chars().filter(|&c| c == '\t').count();
    let spaces = whitespace.chars().filter(|&c| c == ' ').count();

    match (tabs, spaces) {
        (0, spaces) => Some(spaces / 4),
        (tabs, 0) => Some(tabs),
        _ => None,
    }
}
