#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source code.
pub enum LexerError {
    /// A string literal was not closed before the end of the input.
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A string literal contains a raw line break.
    LineBreakInString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A string literal uses an escape sequence that is not recognized.
    UnknownEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the escape occurred.
        line:   usize,
    },
    /// A number literal does not denote an integer.
    MalformedNumber {
        /// The offending literal as written.
        literal: String,
        /// The source line where the literal starts.
        line:    usize,
    },
    /// A number literal does not fit into a 32 bit signed integer.
    NumberOverflow {
        /// The offending literal as written.
        literal: String,
        /// The source line where the literal starts.
        line:    usize,
    },
    /// A digit was required (for example after an exponent marker) but the
    /// next character is not one.
    DigitExpected {
        /// The source line where the digit was expected.
        line: usize,
    },
    /// A token of one kind was required but another one was found.
    ///
    /// Raised by the cursor expectation helpers.
    UnexpectedToken {
        /// Printed form of the expected token.
        expected: String,
        /// Printed form of the token actually found.
        found:    String,
        /// The source line of the found token.
        line:     usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::LineBreakInString { line } => {
                write!(f, "Error on line {line}: Line break inside a string literal.")
            },
            Self::UnknownEscape { escape, line } => {
                write!(f, "Error on line {line}: Unrecognized escape sequence '\\{escape}'.")
            },
            Self::MalformedNumber { literal, line } => {
                write!(f, "Error on line {line}: '{literal}' is not an integer number.")
            },
            Self::NumberOverflow { literal, line } => {
                write!(f, "Error on line {line}: Number '{literal}' does not fit into 32 bits.")
            },
            Self::DigitExpected { line } => {
                write!(f, "Error on line {line}: A digit is expected.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
