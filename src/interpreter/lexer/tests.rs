use super::{Lexer, Token};
use crate::error::LexerError;

fn id(name: &str) -> Token {
    Token::Id(name.to_owned())
}

fn string(value: &str) -> Token {
    Token::String(value.to_owned())
}

fn ch(c: char) -> Token {
    Token::Char(c as u8)
}

/// Drains the whole stream through the cursor, `Eof` included.
fn tokens_of(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).unwrap();
    let mut tokens = vec![lexer.current().clone()];
    while *lexer.current() != Token::Eof {
        tokens.push(lexer.advance().clone());
    }
    tokens
}

#[test]
fn lex_plain_assignment() {
    let expected = vec![id("x"), ch('='), Token::Number(57), Token::Newline, Token::Eof];
    assert_eq!(tokens_of("x = 57"), expected);
    // A trailing newline produces the identical stream.
    assert_eq!(tokens_of("x = 57\n"), expected);
}

#[test]
fn lex_empty_and_blank_sources() {
    assert_eq!(tokens_of(""), vec![Token::Eof]);
    assert_eq!(tokens_of("   \n\t\n\n"), vec![Token::Eof]);
    assert_eq!(tokens_of("# only a comment\n"), vec![Token::Eof]);
}

#[test]
fn lex_keywords_and_identifiers() {
    let source = "class return if else def print and or not None True False value";
    let expected = vec![Token::Class,
                        Token::Return,
                        Token::If,
                        Token::Else,
                        Token::Def,
                        Token::Print,
                        Token::And,
                        Token::Or,
                        Token::Not,
                        Token::None,
                        Token::True,
                        Token::False,
                        id("value"),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens_of(source), expected);
}

#[test]
fn keyword_spelling_ends_an_identifier_run() {
    // As soon as the accumulated characters spell a keyword the run stops,
    // so a keyword can never be the prefix of an identifier.
    assert_eq!(tokens_of("printer"),
               vec![Token::Print, id("er"), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("Nonempty"),
               vec![Token::None, id("mpty"), Token::Newline, Token::Eof]);
    // `self` is not a keyword and lexes whole.
    assert_eq!(tokens_of("selfish"),
               vec![id("selfish"), Token::Newline, Token::Eof]);
}

#[test]
fn lex_two_character_operators() {
    let expected = vec![id("a"),
                        Token::Eq,
                        id("b"),
                        Token::NotEq,
                        id("c"),
                        Token::LessOrEq,
                        id("d"),
                        Token::GreaterOrEq,
                        id("e"),
                        ch('<'),
                        id("f"),
                        ch('>'),
                        id("g"),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens_of("a == b != c <= d >= e < f > g"), expected);
}

#[test]
fn lex_punctuation_characters() {
    let expected = vec![id("a"),
                        ch('.'),
                        id("b"),
                        ch('('),
                        ch(')'),
                        ch(','),
                        ch('+'),
                        ch('-'),
                        ch('*'),
                        ch('/'),
                        ch(':'),
                        Token::Newline,
                        Token::Eof];
    assert_eq!(tokens_of("a.b(),+-*/:"), expected);
}

#[test]
fn indentation_produces_matched_pairs() {
    let source = "class A:\n  def f(self):\n    return 1\nx = 1\n";
    let tokens = tokens_of(source);

    let indents = tokens.iter().filter(|t| **t == Token::Indent).count();
    let dedents = tokens.iter().filter(|t| **t == Token::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
    assert_eq!(tokens.last(), Some(&Token::Eof));
}

#[test]
fn open_indentation_is_drained_at_end_of_input() {
    // The block is still open when the input ends: a final newline, two
    // dedents, one end of file.
    let source = "if x:\n  if y:\n    print z";
    let tokens = tokens_of(source);
    let tail = &tokens[tokens.len() - 4..];
    assert_eq!(tail,
               &[Token::Newline, Token::Dedent, Token::Dedent, Token::Eof]);
}

#[test]
fn blank_and_comment_lines_keep_the_indentation_level() {
    let source = "if x:\n  a = 1\n\n# note at column zero\n  b = 2\n";
    let tokens = tokens_of(source);

    // One indent before `a`, no dedent until the stream drains at the end.
    let expected = vec![Token::If,
                        id("x"),
                        ch(':'),
                        Token::Newline,
                        Token::Indent,
                        id("a"),
                        ch('='),
                        Token::Number(1),
                        Token::Newline,
                        id("b"),
                        ch('='),
                        Token::Number(2),
                        Token::Newline,
                        Token::Dedent,
                        Token::Eof];
    assert_eq!(tokens, expected);
}

#[test]
fn comment_after_content_still_ends_the_line() {
    let expected = vec![id("x"), ch('='), Token::Number(1), Token::Newline, Token::Eof];
    assert_eq!(tokens_of("x = 1  # trailing comment\n"), expected);
}

#[test]
fn odd_indentation_truncates_to_whole_levels() {
    // Three spaces are one level; the dedent back matches it.
    let source = "if x:\n   a = 1\nb = 2\n";
    let tokens = tokens_of(source);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Indent).count(), 1);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Dedent).count(), 1);
    // A single space is no level at all.
    let tokens = tokens_of("if x:\n a = 1\n");
    assert_eq!(tokens.iter().filter(|t| **t == Token::Indent).count(), 0);
}

#[test]
fn tab_counts_as_two_spaces() {
    let source = "if x:\n\ta = 1\nb = 2\n";
    let tokens = tokens_of(source);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Indent).count(), 1);
    assert_eq!(tokens.iter().filter(|t| **t == Token::Dedent).count(), 1);
}

#[test]
fn lex_string_literals() {
    assert_eq!(tokens_of("'hello'"),
               vec![string("hello"), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("\"hello\""),
               vec![string("hello"), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of(r"'a\nb\tc'"),
               vec![string("a\nb\tc"), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of(r#"'it\'s' "a \"quote\"""#),
               vec![string("it's"), string("a \"quote\""), Token::Newline, Token::Eof]);
    // The other quote kind needs no escaping.
    assert_eq!(tokens_of(r#""don't""#),
               vec![string("don't"), Token::Newline, Token::Eof]);
}

#[test]
fn string_errors_are_fatal() {
    assert!(matches!(Lexer::new("'no end"),
                     Err(LexerError::UnterminatedString { line: 1 })));
    assert!(matches!(Lexer::new(r"'ab\q'"),
                     Err(LexerError::UnknownEscape { escape: 'q', line: 1 })));
    assert!(matches!(Lexer::new("'line\nbreak'"),
                     Err(LexerError::LineBreakInString { line: 1 })));
    assert!(matches!(Lexer::new("x = 1\ny = 'oops"),
                     Err(LexerError::UnterminatedString { line: 2 })));
}

#[test]
fn lex_numbers() {
    assert_eq!(tokens_of("0"), vec![Token::Number(0), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("57"), vec![Token::Number(57), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("2e3"),
               vec![Token::Number(2000), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("12E+2"),
               vec![Token::Number(1200), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("100e-2"),
               vec![Token::Number(1), Token::Newline, Token::Eof]);
    assert_eq!(tokens_of("0e5"), vec![Token::Number(0), Token::Newline, Token::Eof]);
}

#[test]
fn a_leading_zero_is_the_whole_integer_part() {
    assert_eq!(tokens_of("057"),
               vec![Token::Number(0), Token::Number(57), Token::Newline, Token::Eof]);
}

#[test]
fn number_errors_are_fatal() {
    assert!(matches!(Lexer::new("3000000000"),
                     Err(LexerError::NumberOverflow { .. })));
    assert!(matches!(Lexer::new("2e10"), Err(LexerError::NumberOverflow { .. })));
    assert!(matches!(Lexer::new("5e-1"),
                     Err(LexerError::MalformedNumber { .. })));
    assert!(matches!(Lexer::new("5e"), Err(LexerError::DigitExpected { .. })));
}

#[test]
fn minus_is_never_part_of_a_number() {
    assert_eq!(tokens_of("-5"),
               vec![ch('-'), Token::Number(5), Token::Newline, Token::Eof]);
}

#[test]
fn cursor_clamps_at_end_of_file() {
    let mut lexer = Lexer::new("x").unwrap();
    assert_eq!(*lexer.current(), id("x"));
    assert_eq!(*lexer.advance(), Token::Newline);
    assert_eq!(*lexer.advance(), Token::Eof);
    assert_eq!(*lexer.advance(), Token::Eof);
    assert_eq!(*lexer.current(), Token::Eof);
}

#[test]
fn expect_checks_the_kind_only() {
    let lexer = Lexer::new("x = 1").unwrap();
    assert_eq!(*lexer.expect(&id("anything")).unwrap(), id("x"));
    assert!(matches!(lexer.expect(&Token::Number(0)),
                     Err(LexerError::UnexpectedToken { .. })));
}

#[test]
fn expect_exact_checks_the_payload_too() {
    let mut lexer = Lexer::new("x = 1").unwrap();
    assert!(lexer.expect_exact(&id("x")).is_ok());
    assert!(lexer.expect_exact(&id("y")).is_err());

    assert!(lexer.expect_next_exact(&ch('=')).is_ok());
    assert_eq!(*lexer.expect_next(&Token::Number(0)).unwrap(), Token::Number(1));
}

#[test]
fn expect_reports_line_numbers() {
    let mut lexer = Lexer::new("x = 1\ny = 2").unwrap();
    for _ in 0..4 {
        lexer.advance();
    }
    assert_eq!(*lexer.current(), id("y"));
    assert_eq!(lexer.line(), 2);
    match lexer.expect(&Token::Number(0)) {
        Err(LexerError::UnexpectedToken { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn tokens_print_their_kind_and_payload() {
    assert_eq!(Token::Number(57).to_string(), "Number{57}");
    assert_eq!(id("x").to_string(), "Id{x}");
    assert_eq!(string("hi").to_string(), "String{hi}");
    assert_eq!(ch('+').to_string(), "Char{+}");
    assert_eq!(Token::Class.to_string(), "Class");
    assert_eq!(Token::Eof.to_string(), "Eof");
}
