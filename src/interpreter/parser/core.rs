use std::rc::Rc;

use fxhash::FxHashMap;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        runtime::Class,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the syntax tree from a token stream.
///
/// The parser owns the lexer cursor and a table of the classes defined so
/// far; class names in instantiations and parent positions resolve against
/// that table while parsing, so every `NewInstance` node holds its class
/// directly.
///
/// # Example
/// ```
/// use mython::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let lexer = Lexer::new("x = 2 + 3\nprint x").unwrap();
/// let program = Parser::new(lexer).parse_program().unwrap();
///
/// // The program is a compound statement ready for execution.
/// let mut output = Vec::new();
/// let mut closure = mython::interpreter::runtime::Closure::default();
/// let mut context = mython::interpreter::evaluator::core::Context::new(&mut output);
/// context.execute(&program, &mut closure).unwrap();
/// assert_eq!(output, b"5\n");
/// ```
pub struct Parser {
    pub(crate) lexer:   Lexer,
    pub(crate) classes: FxHashMap<String, Rc<Class>>,
}

impl Parser {
    /// Creates a parser over a tokenized source.
    #[must_use]
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer,
               classes: FxHashMap::default() }
    }

    /// Parses the whole program into one compound statement.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first construct that does not
    /// parse.
    pub fn parse_program(mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();
        while *self.lexer.current() != Token::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(Statement::Compound { statements })
    }

    /// Consumes the current token when it equals `token` exactly.
    pub(crate) fn consume(&mut self, token: &Token) -> ParseResult<()> {
        self.lexer.expect_exact(token)?;
        self.lexer.advance();
        Ok(())
    }

    /// Consumes the current token when it is the punctuation character `c`.
    pub(crate) fn consume_char(&mut self, c: u8) -> ParseResult<()> {
        self.consume(&Token::Char(c))
    }

    /// Consumes and returns the current identifier.
    pub(crate) fn identifier(&mut self) -> ParseResult<String> {
        let name = match self.lexer.current() {
            Token::Id(name) => name.clone(),
            other => {
                return Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                         line:  self.lexer.line(), });
            },
        };
        self.lexer.advance();
        Ok(name)
    }
}
