use crate::{
    error::LexError,
    interpreter::lexer::{
        Lexer,
        keyword::classify,
        token::{Token, TokenKind},
    },
    location::SourceLocation,
    util::num::parse_decimal,
};

impl Lexer<'_> {
    /// Scans the value of a poetic assignment, after `is`/`was`/`were`/`'s`.
    ///
    /// Tried in order: a number literal, a string literal, then a single
    /// constant keyword (`nothing`, `right`, `mysterious`, ...). Each must be
    /// the last thing on the line. Anything else is a poetic number.
    /// Comments may appear anywhere in the value.
    pub(super) fn lex_poetic_literal(&mut self) -> Result<(), LexError> {
        self.skip_poetic_padding()?;
        let rest = self.raw.remainder();

        if starts_number(rest) || rest.starts_with('"') {
            if let Some((raw, mark)) = self.next_raw() {
                self.lex_raw(raw, mark)?;
            }
            return self.expect_poetic_end();
        }

        if let Some(token) = self.poetic_constant() {
            self.push(token);
            return self.expect_poetic_end();
        }

        self.lex_poetic_number()
    }

    /// Skips whitespace and comments on the current line.
    fn skip_poetic_padding(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_horizontal_whitespace();
            if !self.raw.remainder().starts_with('(') {
                return Ok(());
            }
            self.skip_comment()?;
        }
    }

    /// Consumes a lone constant keyword, if one starts here.
    fn poetic_constant(&mut self) -> Option<Token> {
        let mark = self.mark();
        let rest = self.raw.remainder();
        let end = rest.find(|c: char| !c.is_alphabetic()).unwrap_or(rest.len());

        // `empty-handed` is a poetic number word, not the constant `empty`.
        if end == 0 || rest[end..].chars().next().is_some_and(|c| !c.is_whitespace() && c != '(') {
            return None;
        }

        let word = &rest[..end];
        let keyword = classify(word).filter(|k| k.is_poetic_constant())?;
        let kind = keyword.simple_kind()?;

        self.raw.bump(end);
        Some(Token { kind,
                     lexeme: word.to_lowercase(),
                     location: self.span(mark) })
    }

    /// Only whitespace or comments may follow a poetic literal.
    fn expect_poetic_end(&mut self) -> Result<(), LexError> {
        self.skip_poetic_padding()?;

        let rest = self.raw.remainder();
        if rest.is_empty() || rest.starts_with('\n') {
            return Ok(());
        }

        let mark = self.mark();
        self.raw.bump(rest.find('\n').unwrap_or(rest.len()));
        Err(LexError::TrailingPoeticText { location: self.span(mark) })
    }

    /// The rest of a `says` line, verbatim.
    pub(super) fn lex_poetic_string(&mut self) {
        if self.raw.remainder().starts_with(' ') {
            self.raw.bump(1);
        }

        let mark = self.mark();
        let rest = self.raw.remainder();
        let len = rest.find('\n').unwrap_or(rest.len());
        self.raw.bump(len);

        let contents = rest[..len].strip_suffix('\r').unwrap_or(&rest[..len]);
        let location = self.span(mark);
        self.push(Token { kind: TokenKind::Str(contents.to_string()),
                          lexeme: String::new(),
                          location });
    }

    /// Decodes word lengths into digits.
    ///
    /// Each word contributes its letter count modulo 10 (hyphens count as
    /// letters, other characters are ignored). A standalone `.` places the
    /// decimal point and may appear once. No words at all gives zero.
    fn lex_poetic_number(&mut self) -> Result<(), LexError> {
        let mark = self.mark();
        let mut end = mark;
        let mut digits = String::new();
        let mut seen_point = false;

        while let Some(c) = self.raw.remainder().chars().next() {
            match c {
                '\n' => break,
                '(' => self.skip_comment()?,
                '.' => {
                    if seen_point {
                        let point = self.mark();
                        self.raw.bump(1);
                        return Err(LexError::RepeatedDecimalPoint { location:
                                                                        self.span(point) });
                    }
                    seen_point = true;
                    digits.push('.');
                    self.raw.bump(1);
                    end = self.mark();
                },
                c if c.is_whitespace() => self.raw.bump(c.len_utf8()),
                _ => {
                    let rest = self.raw.remainder();
                    let len = rest.find(|c: char| c.is_whitespace() || c == '.' || c == '(')
                                  .unwrap_or(rest.len());
                    let letters = rest[..len].chars()
                                             .filter(|&c| c.is_alphabetic() || c == '-')
                                             .count();
                    self.raw.bump(len);

                    if letters > 0
                       && let Some(digit) = u32::try_from(letters % 10).ok()
                                                                       .and_then(|d| char::from_digit(d, 10))
                    {
                        digits.push(digit);
                    }
                    end = self.mark();
                },
            }
        }

        let location = SourceLocation::new(mark.line, mark.column, end.line, end.column);
        let number = parse_decimal(&poetic_digits_to_decimal(&digits)).ok_or_else(|| {
                         LexError::InvalidNumber { text: digits.clone(),
                                                   location }
                     })?;

        self.push(Token { kind: TokenKind::Number(number),
                          lexeme: String::new(),
                          location });
        Ok(())
    }
}

/// A digit, or `-`/`.`/`-.` directly followed by a digit.
fn starts_number(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let unpointed = unsigned.strip_prefix('.').unwrap_or(unsigned);
    unpointed.starts_with(|c: char| c.is_ascii_digit())
}

/// Turns a digit string with an optional point into well-formed decimal text.
///
/// `""` and `"."` become `"0"`, a leading point gains a zero and a trailing
/// point is dropped.
fn poetic_digits_to_decimal(digits: &str) -> String {
    let trimmed = digits.strip_suffix('.').unwrap_or(digits);
    if trimmed.is_empty() {
        return "0".to_string();
    }
    if trimmed.starts_with('.') {
        return format!("0{trimmed}");
    }
    trimmed.to_string()
}
