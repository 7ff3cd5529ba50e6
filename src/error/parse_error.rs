use crate::error::LexerError;

#[derive(Debug)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found a token that does not start or continue any construct.
    UnexpectedToken {
        /// Printed form of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A class name was used before any class of that name was defined.
    UnknownClass {
        /// The name as written in the source.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an `=` is not a variable or a field path.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A field was read from something that is not a plain variable path.
    InvalidFieldAccess {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The first parameter of a method is not spelled `self`.
    ExpectedSelfParameter {
        /// The name of the method being defined.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A token expectation raised through the lexer cursor failed.
    Lexer(LexerError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token {token}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: Unknown class '{name}'.")
            },
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Only variables and fields can be assigned to.")
            },
            Self::InvalidFieldAccess { line } => {
                write!(f, "Error on line {line}: Fields can only be read from named objects.")
            },
            Self::ExpectedSelfParameter { method, line } => {
                write!(f,
                       "Error on line {line}: The first parameter of method '{method}' must be 'self'.")
            },
            Self::Lexer(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(error: LexerError) -> Self {
        Self::Lexer(error)
    }
}
