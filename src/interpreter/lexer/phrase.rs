use crate::{
    error::LexError,
    interpreter::lexer::{
        Lexer, Mark,
        token::{Token, TokenKind},
    },
};

const TAKE_IT_TO_THE_TOP: &str = "take it to the top";
const BREAK_IT_DOWN: &str = "break it down";
const GIVE_BACK: &str = "give back";

impl Lexer<'_> {
    /// Finds the next word on the current line without consuming anything.
    ///
    /// Returns the word and the number of bytes up to its end, counting any
    /// horizontal whitespace before it.
    fn peek_word(&self) -> Option<(&str, usize)> {
        let rest = self.raw.remainder();
        let start = rest.find(|c: char| c == '\n' || !c.is_whitespace())
                        .unwrap_or(rest.len());
        let len = rest[start..].find(|c: char| !c.is_alphabetic())
                               .unwrap_or(rest.len() - start);

        (len > 0).then(|| (&rest[start..start + len], start + len))
    }

    /// Tests whether the next word on the line equals `expected`, ignoring
    /// case.
    fn next_word_is(&self, expected: &str) -> bool {
        self.peek_word()
            .is_some_and(|(word, _)| word.eq_ignore_ascii_case(expected))
    }

    /// Consumes the next word, which must be `expected`.
    ///
    /// # Errors
    /// [`LexError::ExpectedWord`] spanning whatever was found instead.
    fn expect_word(&mut self, expected: &'static str, phrase: &'static str) -> Result<(), LexError> {
        if self.next_word_is(expected) {
            if let Some(end) = self.peek_word().map(|(_, end)| end) {
                self.raw.bump(end);
            }
            return Ok(());
        }

        self.skip_horizontal_whitespace();
        let mark = self.mark();
        if let Some(end) = self.peek_word().map(|(_, end)| end) {
            self.raw.bump(end);
        }
        Err(LexError::ExpectedWord { expected,
                                     phrase,
                                     location: self.span(mark) })
    }

    fn push_phrase(&mut self, kind: TokenKind, lexeme: &str, mark: Mark) {
        let location = self.span(mark);
        self.push(Token { kind,
                          lexeme: lexeme.to_string(),
                          location });
    }

    /// `take it to the top`, every word mandatory.
    pub(super) fn lex_take_it_to_the_top(&mut self, mark: Mark) -> Result<(), LexError> {
        for word in ["it", "to", "the", "top"] {
            self.expect_word(word, TAKE_IT_TO_THE_TOP)?;
        }
        self.push_phrase(TokenKind::Continue, TAKE_IT_TO_THE_TOP, mark);
        Ok(())
    }

    /// `break`, or `break it down`.
    pub(super) fn lex_break(&mut self, mark: Mark) -> Result<(), LexError> {
        if self.next_word_is("it") {
            self.expect_word("it", BREAK_IT_DOWN)?;
            self.expect_word("down", BREAK_IT_DOWN)?;
            self.push_phrase(TokenKind::Break, BREAK_IT_DOWN, mark);
        } else {
            self.push_phrase(TokenKind::Break, "break", mark);
        }
        Ok(())
    }

    /// `listen to` reads into a variable; a bare `listen` discards the line.
    pub(super) fn lex_listen(&mut self, mark: Mark) {
        if self.next_word_is("to") {
            if let Some(end) = self.peek_word().map(|(_, end)| end) {
                self.raw.bump(end);
            }
            self.push_phrase(TokenKind::ListenTo, "listen to", mark);
        } else {
            self.push_phrase(TokenKind::Listen, "listen", mark);
        }
    }

    /// `give back`, the second word mandatory.
    pub(super) fn lex_give_back(&mut self, mark: Mark) -> Result<(), LexError> {
        self.expect_word("back", GIVE_BACK)?;
        self.push_phrase(TokenKind::Return, GIVE_BACK, mark);
        Ok(())
    }

    /// `ain't` is inequality; `ain` on its own is an ordinary word.
    pub(super) fn lex_ain(&mut self, mark: Mark, capitalized: bool) {
        let rest = self.raw.remainder();
        let contracted = (rest.starts_with("'t") || rest.starts_with("'T"))
                         && !rest[2..].chars().next().is_some_and(char::is_alphabetic);

        if contracted {
            self.raw.bump(2);
            self.push_phrase(TokenKind::NotEqual, "ain't", mark);
        } else {
            self.push_phrase(TokenKind::Word { capitalized }, "ain", mark);
        }
    }
}
