use crate::error::LexerError;

#[cfg(test)]
mod tests;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Besides the tokens spelled out in the source, the stream contains three
/// synthetic kinds: [`Token::Indent`] and [`Token::Dedent`], which mark a
/// change of indentation depth by one level (two spaces), and exactly one
/// trailing [`Token::Eof`].
///
/// Equality is structural. The printed form is the kind name, with the
/// payload wrapped in braces for the valued kinds: `Number{57}`, `Id{x}`,
/// `String{hi}`, `Char{+}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, such as `57` or `2e3`.
    Number(i32),
    /// An identifier, such as a variable, class, or method name.
    Id(String),
    /// A string literal with its escape sequences already resolved.
    String(String),
    /// A single punctuation character, such as `+` or `(`.
    Char(u8),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// End of a logical line.
    Newline,
    /// `print`
    Print,
    /// Indentation increased by one level.
    Indent,
    /// Indentation decreased by one level.
    Dedent,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// End of the token stream.
    Eof,
}

impl Token {
    /// Returns the name of the token kind, ignoring any payload.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Id(_) => "Id",
            Self::String(_) => "String",
            Self::Char(_) => "Char",
            Self::Class => "Class",
            Self::Return => "Return",
            Self::If => "If",
            Self::Else => "Else",
            Self::Def => "Def",
            Self::Newline => "Newline",
            Self::Print => "Print",
            Self::Indent => "Indent",
            Self::Dedent => "Dedent",
            Self::And => "And",
            Self::Or => "Or",
            Self::Not => "Not",
            Self::Eq => "Eq",
            Self::NotEq => "NotEq",
            Self::LessOrEq => "LessOrEq",
            Self::GreaterOrEq => "GreaterOrEq",
            Self::None => "None",
            Self::True => "True",
            Self::False => "False",
            Self::Eof => "Eof",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number{{{value}}}"),
            Self::Id(value) => write!(f, "Id{{{value}}}"),
            Self::String(value) => write!(f, "String{{{value}}}"),
            Self::Char(value) => write!(f, "Char{{{}}}", char::from(*value)),
            other => f.write_str(other.kind_name()),
        }
    }
}

/// Keywords that end an identifier run as soon as it spells one of them.
const KEYWORDS: [&str; 12] = ["class", "return", "if", "else", "def", "print", "and", "or", "not",
                              "None", "True", "False"];

/// Punctuation characters that terminate identifiers and form `Char` tokens.
const fn is_special(c: char) -> bool {
    matches!(c,
             '=' | '.' | ',' | '(' | ')' | '+' | '>' | '<' | '-' | '*' | '/' | ':' | '!')
}

/// Splits source text into the complete token stream.
///
/// Works one character at a time over the input, keeping just enough state
/// to translate leading whitespace into `Indent`/`Dedent` tokens: the
/// indentation of the previous logical line and the current line number.
struct Tokenizer {
    input:    Vec<char>,
    position: usize,
    line:     usize,
}

impl Tokenizer {
    fn new(source: &str) -> Self {
        Self { input:    source.chars().collect(),
               position: 0,
               line:     1, }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        self.position += 1;
        c
    }

    /// Runs the tokenizer over the whole input.
    ///
    /// Returns `(token, line)` pairs. The stream is normalized on the way
    /// out: an unterminated final line receives a `Newline`, open
    /// indentation levels are drained with `Dedent` tokens, and a single
    /// `Eof` closes the stream.
    fn tokenize(mut self) -> Result<Vec<(Token, usize)>, LexerError> {
        let mut tokens = Vec::new();
        let mut previous_indent = 0;

        loop {
            let indent = self.leading_indent();
            match self.peek() {
                Option::None => break,
                // Lines without content do not affect indentation.
                Some('\n') => {
                    self.bump();
                    self.line += 1;
                },
                Some('#') => self.skip_comment(),
                Some(_) => {
                    emit_indent_shift(&mut tokens, previous_indent, indent, self.line);
                    previous_indent = indent;
                    self.line_content(&mut tokens)?;
                },
            }
        }

        if tokens.last().is_some_and(|(token, _)| *token != Token::Newline) {
            tokens.push((Token::Newline, self.line));
        }
        for _ in 0..previous_indent / 2 {
            tokens.push((Token::Dedent, self.line));
        }
        tokens.push((Token::Eof, self.line));

        Ok(tokens)
    }

    /// Consumes leading whitespace and returns its width. A tab counts as
    /// two spaces.
    fn leading_indent(&mut self) -> usize {
        let mut width = 0;
        while let Some(c) = self.peek() {
            match c {
                ' ' => width += 1,
                '\t' => width += 2,
                _ => break,
            }
            self.bump();
        }
        width
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Lexes the rest of a logical line that is known to hold content.
    ///
    /// Ends after emitting the terminating `Newline`, or silently at end of
    /// input (the caller then normalizes the stream).
    fn line_content(&mut self, tokens: &mut Vec<(Token, usize)>) -> Result<(), LexerError> {
        loop {
            let Some(c) = self.peek() else { return Ok(()) };
            match c {
                '\n' => {
                    self.bump();
                    tokens.push((Token::Newline, self.line));
                    self.line += 1;
                    return Ok(());
                },
                ' ' | '\t' => {
                    self.bump();
                },
                '#' => self.skip_comment(),
                quote @ ('"' | '\'') => {
                    self.bump();
                    let line = self.line;
                    let value = self.string_literal(quote)?;
                    tokens.push((Token::String(value), line));
                },
                c if c.is_ascii_digit() => {
                    let line = self.line;
                    let value = self.number()?;
                    tokens.push((Token::Number(value), line));
                },
                c if is_special(c) => {
                    self.bump();
                    let token = self.operator(c);
                    tokens.push((token, self.line));
                },
                _ => {
                    let line = self.line;
                    let token = self.word();
                    tokens.push((token, line));
                },
            }
        }
    }

    /// Lexes a string literal. The opening quote is already consumed.
    fn string_literal(&mut self, quote: char) -> Result<String, LexerError> {
        let line = self.line;
        let mut value = String::new();
        loop {
            match self.bump() {
                Option::None => return Err(LexerError::UnterminatedString { line }),
                Some(c) if c == quote => return Ok(value),
                Some('\\') => match self.bump() {
                    Option::None => return Err(LexerError::UnterminatedString { line }),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\'') => value.push('\''),
                    Some('"') => value.push('"'),
                    Some(escape) => return Err(LexerError::UnknownEscape { escape, line }),
                },
                Some('\n' | '\r') => return Err(LexerError::LineBreakInString { line }),
                Some(c) => value.push(c),
            }
        }
    }

    /// Lexes an integer literal: digits with an optional decimal exponent.
    ///
    /// A leading `0` is accepted only as the sole integer digit. The
    /// mathematical value of the literal must fit into an `i32`; an exponent
    /// that leaves a fractional value makes the literal malformed.
    fn number(&mut self) -> Result<i32, LexerError> {
        let line = self.line;
        let mut literal = String::new();

        if self.peek() == Some('0') {
            literal.push('0');
            self.bump();
        } else {
            self.digits(&mut literal)?;
        }

        if let Some(marker @ ('e' | 'E')) = self.peek() {
            literal.push(marker);
            self.bump();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                literal.push(sign);
                self.bump();
            }
            self.digits(&mut literal)?;
        }

        evaluate_number(&literal, line)
    }

    /// Appends one or more decimal digits to `literal`.
    fn digits(&mut self, literal: &mut String) -> Result<(), LexerError> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(LexerError::DigitExpected { line: self.line });
        }
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.bump();
        }
        Ok(())
    }

    /// Turns a punctuation character into a token, joining it with a
    /// following `=` when the pair spells a comparison operator. The first
    /// character is already consumed.
    fn operator(&mut self, first: char) -> Token {
        if self.peek() == Some('=') {
            let combined = match first {
                '=' => Some(Token::Eq),
                '!' => Some(Token::NotEq),
                '<' => Some(Token::LessOrEq),
                '>' => Some(Token::GreaterOrEq),
                _ => Option::None,
            };
            if let Some(token) = combined {
                self.bump();
                return token;
            }
        }
        Token::Char(first as u8)
    }

    /// Lexes an identifier or keyword.
    ///
    /// The run ends at whitespace, punctuation, a comment marker, or as soon
    /// as the accumulated characters spell a keyword.
    fn word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\n' || c == '#' || is_special(c) {
                break;
            }
            word.push(c);
            self.bump();
            if KEYWORDS.contains(&word.as_str()) {
                break;
            }
        }
        keyword_token(word)
    }
}

fn keyword_token(word: String) -> Token {
    match word.as_str() {
        "class" => Token::Class,
        "return" => Token::Return,
        "if" => Token::If,
        "else" => Token::Else,
        "def" => Token::Def,
        "print" => Token::Print,
        "and" => Token::And,
        "or" => Token::Or,
        "not" => Token::Not,
        "None" => Token::None,
        "True" => Token::True,
        "False" => Token::False,
        _ => Token::Id(word),
    }
}

/// Emits the `Indent`/`Dedent` tokens for a change of indentation width.
/// Widths that are not a multiple of two are truncated to whole levels.
fn emit_indent_shift(tokens: &mut Vec<(Token, usize)>,
                     previous: usize,
                     current: usize,
                     line: usize) {
    if current >= previous {
        for _ in 0..(current - previous) / 2 {
            tokens.push((Token::Indent, line));
        }
    } else {
        for _ in 0..(previous - current) / 2 {
            tokens.push((Token::Dedent, line));
        }
    }
}

/// Computes the integer value of a number literal, applying its exponent.
fn evaluate_number(literal: &str, line: usize) -> Result<i32, LexerError> {
    let overflow = || LexerError::NumberOverflow { literal: literal.to_owned(),
                                                   line };

    let (mantissa, exponent) = literal.split_once(['e', 'E'])
                                      .unwrap_or((literal, ""));
    let mut value: i64 = mantissa.parse().map_err(|_| overflow())?;

    if !exponent.is_empty() {
        let exponent: i32 = exponent.parse().map_err(|_| overflow())?;
        if exponent >= 0 {
            for _ in 0..exponent {
                if value == 0 {
                    break;
                }
                value = value.checked_mul(10).ok_or_else(overflow)?;
            }
        } else {
            for _ in 0..exponent.unsigned_abs() {
                if value == 0 {
                    break;
                }
                if value % 10 != 0 {
                    return Err(LexerError::MalformedNumber { literal: literal.to_owned(),
                                                             line });
                }
                value /= 10;
            }
        }
    }

    i32::try_from(value).map_err(|_| overflow())
}

/// Holds a fully tokenized source text and a cursor over it.
///
/// The stream always ends with exactly one [`Token::Eof`]; both
/// [`Lexer::current`] and [`Lexer::advance`] clamp there, so walking past
/// the end keeps yielding `Eof`.
///
/// # Example
/// ```
/// use mython::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 57").unwrap();
///
/// assert_eq!(*lexer.current(), Token::Id("x".to_owned()));
/// assert_eq!(*lexer.advance(), Token::Char(b'='));
/// assert_eq!(*lexer.advance(), Token::Number(57));
/// assert_eq!(*lexer.advance(), Token::Newline);
/// assert_eq!(*lexer.advance(), Token::Eof);
/// assert_eq!(*lexer.advance(), Token::Eof);
/// ```
pub struct Lexer {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
}

impl Lexer {
    /// Tokenizes `source` in full.
    ///
    /// # Errors
    /// Returns a [`LexerError`] for malformed literals: unterminated
    /// strings, unknown escape sequences, and numbers that are fractional or
    /// do not fit into 32 bits. No tokens are retained in that case.
    pub fn new(source: &str) -> Result<Self, LexerError> {
        let tokens = Tokenizer::new(source).tokenize()?;
        Ok(Self { tokens, cursor: 0 })
    }

    /// Returns the token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor].0
    }

    /// Returns the source line of the token under the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens[self.cursor].1
    }

    /// Moves the cursor forward and returns the new current token, stopping
    /// at `Eof`.
    pub fn advance(&mut self) -> &Token {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Returns the current token if it has the same kind as `expected`,
    /// ignoring any payload.
    ///
    /// # Errors
    /// Returns [`LexerError::UnexpectedToken`] on a kind mismatch.
    pub fn expect(&self, expected: &Token) -> Result<&Token, LexerError> {
        if std::mem::discriminant(self.current()) == std::mem::discriminant(expected) {
            Ok(self.current())
        } else {
            Err(self.mismatch(expected.kind_name().to_owned()))
        }
    }

    /// Returns the current token if it equals `expected`, payload included.
    ///
    /// # Errors
    /// Returns [`LexerError::UnexpectedToken`] when the tokens differ.
    pub fn expect_exact(&self, expected: &Token) -> Result<&Token, LexerError> {
        if self.current() == expected {
            Ok(self.current())
        } else {
            Err(self.mismatch(expected.to_string()))
        }
    }

    /// Advances the cursor, then behaves like [`Lexer::expect`].
    ///
    /// # Errors
    /// Returns [`LexerError::UnexpectedToken`] on a kind mismatch.
    pub fn expect_next(&mut self, expected: &Token) -> Result<&Token, LexerError> {
        self.advance();
        self.expect(expected)
    }

    /// Advances the cursor, then behaves like [`Lexer::expect_exact`].
    ///
    /// # Errors
    /// Returns [`LexerError::UnexpectedToken`] when the tokens differ.
    pub fn expect_next_exact(&mut self, expected: &Token) -> Result<&Token, LexerError> {
        self.advance();
        self.expect_exact(expected)
    }

    fn mismatch(&self, expected: String) -> LexerError {
        LexerError::UnexpectedToken { expected,
                                      found: self.current().to_string(),
                                      line: self.line() }
    }
}
