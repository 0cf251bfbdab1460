use std::str::FromStr;

use bigdecimal::BigDecimal;
use rockstar::{
    error::LexError,
    interpreter::lexer::{
        lex,
        token::{Token, TokenKind},
    },
    location::SourceLocation,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    match lex(src) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(e) => panic!("Lexing failed for {src:?}: {e}"),
    }
}

fn tokens(src: &str) -> Vec<Token> {
    lex(src).unwrap_or_else(|e| panic!("Lexing failed for {src:?}: {e}"))
}

fn lex_error(src: &str) -> LexError {
    match lex(src) {
        Ok(tokens) => panic!("Lexing succeeded but was expected to fail: {tokens:?}"),
        Err(e) => e,
    }
}

fn number(text: &str) -> TokenKind {
    TokenKind::Number(BigDecimal::from_str(text).unwrap())
}

const fn word() -> TokenKind {
    TokenKind::Word { capitalized: false }
}

const fn proper() -> TokenKind {
    TokenKind::Word { capitalized: true }
}

#[test]
fn simple_statement_kinds() {
    assert_eq!(kinds("Put 5 into my heart"),
               vec![TokenKind::Put,
                    number("5"),
                    TokenKind::Into,
                    TokenKind::Article,
                    word(),
                    TokenKind::Eof]);
    assert_eq!(kinds("SHOUT \"hey\""),
               vec![TokenKind::Say, TokenKind::Str("hey".to_string()), TokenKind::Eof]);
}

#[test]
fn token_locations_are_line_and_column_spans() {
    let toks = tokens("Whisper my heart\nSay it");

    assert_eq!(toks[0].location, SourceLocation::new(1, 0, 1, 7));
    assert_eq!(toks[1].location, SourceLocation::new(1, 8, 1, 10));
    assert_eq!(toks[2].location, SourceLocation::new(1, 11, 1, 16));
    assert_eq!(toks[3].kind, TokenKind::Newline);
    assert_eq!(toks[4].location, SourceLocation::new(2, 0, 2, 3));
    assert_eq!(toks[5].location, SourceLocation::new(2, 4, 2, 6));
}

#[test]
fn lexemes_are_lowercase() {
    let toks = tokens("Doctor Feelgood");
    assert_eq!(toks[0].lexeme, "doctor");
    assert_eq!(toks[1].lexeme, "feelgood");
    assert_eq!(toks[0].kind, proper());
}

#[test]
fn compound_phrases() {
    assert_eq!(kinds("Take it to the top"), vec![TokenKind::Continue, TokenKind::Eof]);
    assert_eq!(tokens("Take it to the top")[0].lexeme, "take it to the top");
    assert_eq!(kinds("Break it down"), vec![TokenKind::Break, TokenKind::Eof]);
    assert_eq!(kinds("Break"), vec![TokenKind::Break, TokenKind::Eof]);
    assert_eq!(kinds("Listen to my heart"),
               vec![TokenKind::ListenTo, TokenKind::Article, word(), TokenKind::Eof]);
    assert_eq!(kinds("Listen"), vec![TokenKind::Listen, TokenKind::Eof]);
    assert_eq!(kinds("Give back 5"), vec![TokenKind::Return, number("5"), TokenKind::Eof]);
}

#[test]
fn ain_t_and_aint_are_inequality() {
    assert_eq!(kinds("Say 5 ain't 4"),
               vec![TokenKind::Say, number("5"), TokenKind::NotEqual, number("4"), TokenKind::Eof]);
    assert_eq!(kinds("Say 5 aint 4"),
               vec![TokenKind::Say, number("5"), TokenKind::NotEqual, number("4"), TokenKind::Eof]);
}

#[test]
fn incomplete_phrases_name_the_missing_word() {
    match lex_error("Take it to the bottom") {
        LexError::ExpectedWord { expected, phrase, .. } => {
            assert_eq!(expected, "top");
            assert_eq!(phrase, "take it to the top");
        },
        e => panic!("Unexpected error {e:?}"),
    }

    assert!(matches!(lex_error("Give 5"),
                     LexError::ExpectedWord { expected: "back", .. }));
    assert!(matches!(lex_error("Break it up"),
                     LexError::ExpectedWord { expected: "down", .. }));
}

#[test]
fn poetic_number_literal() {
    assert_eq!(kinds("Tommy was a lovestruck lumberjack"),
               vec![proper(), TokenKind::Assignment, number("100"), TokenKind::Eof]);
}

#[test]
fn poetic_number_with_decimal_point() {
    assert_eq!(kinds("My pi is ice. cold"),
               vec![TokenKind::Article,
                    word(),
                    TokenKind::Assignment,
                    number("3.4"),
                    TokenKind::Eof]);
}

#[test]
fn poetic_number_counts_hyphens() {
    // Eleven letters and a hyphen.
    assert_eq!(kinds("My hands are empty-handed")[3], number("2"));
}

#[test]
fn possessive_s_is_an_assignment_marker() {
    assert_eq!(kinds("Janie's got a gun"),
               vec![proper(), TokenKind::Assignment, number("313"), TokenKind::Eof]);
}

#[test]
fn poetic_constants_and_literals() {
    assert_eq!(kinds("My heart is nothing"),
               vec![TokenKind::Article,
                    word(),
                    TokenKind::Assignment,
                    TokenKind::Null,
                    TokenKind::Eof]);
    assert_eq!(kinds("My heart is 5"),
               vec![TokenKind::Article,
                    word(),
                    TokenKind::Assignment,
                    number("5"),
                    TokenKind::Eof]);
    assert_eq!(kinds("My heart is \"gold\" (comment)")[3], TokenKind::Str("gold".to_string()));
}

#[test]
fn poetic_string_literal() {
    assert_eq!(kinds("Rockstar says Hello San Francisco!"),
               vec![proper(),
                    TokenKind::Says,
                    TokenKind::Str("Hello San Francisco!".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn is_after_a_keyword_is_equality() {
    assert_eq!(kinds("If my heart is 5"),
               vec![TokenKind::If,
                    TokenKind::Article,
                    word(),
                    TokenKind::Is,
                    number("5"),
                    TokenKind::Eof]);
}

#[test]
fn poetic_literal_errors() {
    assert!(matches!(lex_error("My heart is 5 apples"),
                     LexError::TrailingPoeticText { .. }));
    assert!(matches!(lex_error("My heart is ice. cold. fire"),
                     LexError::RepeatedDecimalPoint { .. }));
}

#[test]
fn comments_produce_no_tokens() {
    assert_eq!(kinds("(this spans\nmultiple lines)\nSay 1"),
               vec![TokenKind::Say, number("1"), TokenKind::Eof]);

    let toks = tokens("(this spans\nmultiple lines)\nSay 1");
    assert_eq!(toks[0].location.start_line, 3);
}

#[test]
fn comment_only_line_is_not_blank() {
    assert_eq!(kinds("Say 5 (a comment)\n(only a comment)\nSay 6"),
               vec![TokenKind::Say,
                    number("5"),
                    TokenKind::Newline,
                    TokenKind::Say,
                    number("6"),
                    TokenKind::Eof]);
    assert_eq!(kinds("Say 1\n\nSay 2"),
               vec![TokenKind::Say,
                    number("1"),
                    TokenKind::Newline,
                    TokenKind::Newline,
                    TokenKind::Say,
                    number("2"),
                    TokenKind::Eof]);
}

#[test]
fn number_literals() {
    assert_eq!(kinds("Say -.5")[1], number("-0.5"));
    assert_eq!(kinds("Say 12.25")[1], number("12.25"));
    assert!(matches!(lex_error("Say 5."), LexError::InvalidNumber { .. }));
}

#[test]
fn unclosed_string_starts_at_the_quote() {
    let err = lex_error("\"unterminated");
    assert!(matches!(err, LexError::UnclosedString { .. }));
    assert_eq!((err.location().start_line, err.location().start_column), (1, 0));

    let err = lex_error("Say \"unterminated\nSay 5");
    assert_eq!(err.location(), SourceLocation::new(1, 4, 1, 17));
}

#[test]
fn other_lexing_errors() {
    assert!(matches!(lex_error("(never closed"), LexError::UnclosedComment { .. }));
    assert!(matches!(lex_error("Say 5 % 2"),
                     LexError::UnknownSymbol { symbol: '%', .. }));
}

#[test]
fn poetic_numbers_skip_comments() {
    let expected = vec![TokenKind::Article,
                        word(),
                        TokenKind::Assignment,
                        number("64"),
                        TokenKind::Eof];

    assert_eq!(kinds("My heart is lovely (a comment) days"), expected);
    assert_eq!(kinds("My heart is (a comment) lovely days"), expected);
    assert_eq!(kinds("My heart is 5 (five) (really)")[3], number("5"));
}

#[test]
fn indentation_changes_produce_tokens() {
    assert_eq!(kinds("If x\n    Say 1\nSay 2"),
               vec![TokenKind::If,
                    word(),
                    TokenKind::Newline,
                    TokenKind::Indent,
                    TokenKind::Say,
                    number("1"),
                    TokenKind::Newline,
                    TokenKind::Dedent,
                    TokenKind::Say,
                    number("2"),
                    TokenKind::Eof]);

    // One tab per level.
    assert_eq!(kinds("While x\n\t\tSay 1")[3..5], [TokenKind::Indent, TokenKind::Indent]);
}

#[test]
fn blank_and_comment_lines_keep_the_indentation_level() {
    assert_eq!(kinds("If x\n    Say 1\n\n        (deep comment)\n    Say 2"),
               vec![TokenKind::If,
                    word(),
                    TokenKind::Newline,
                    TokenKind::Indent,
                    TokenKind::Say,
                    number("1"),
                    TokenKind::Newline,
                    TokenKind::Newline,
                    TokenKind::Say,
                    number("2"),
                    TokenKind::Eof]);
}

#[test]
fn mixed_indentation_is_rejected() {
    let err = lex_error("If x\n  \tSay 1");
    assert!(matches!(err, LexError::MixedIndentation { .. }));
    assert_eq!(err.location(), SourceLocation::new(2, 0, 2, 3));
    assert_eq!(err.to_string(), "Cannot mix spaces and tabs within indentation.");
}

#[test]
fn lexing_is_deterministic() {
    let src = "Midnight takes your heart and your soul\nGive back your heart\n\nSay Midnight \
               taking 5, 2";
    assert_eq!(lex(src), lex(src));
}
