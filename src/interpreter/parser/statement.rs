use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        runtime::{class::SELF_NAME, Class, Method},
    },
};

impl Parser {
    /// Parses one statement, including its terminating `Newline` or, for
    /// block statements, its closing `Dedent`.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::Class => self.parse_class_definition(),
            Token::If => self.parse_if_else(),
            Token::Print => self.parse_print(),
            Token::Return => self.parse_return(),
            Token::Eof => Err(ParseError::UnexpectedEndOfInput { line: self.lexer.line() }),
            _ => self.parse_simple(),
        }
    }

    /// Parses an assignment, a field assignment, or a bare expression.
    ///
    /// The statement starts as an expression; a following `=` reinterprets
    /// it as an assignment target, which must be a plain variable path.
    fn parse_simple(&mut self) -> ParseResult<Statement> {
        let line = self.lexer.line();
        let expr = self.parse_expression()?;

        let statement = if *self.lexer.current() == Token::Char(b'=') {
            self.lexer.advance();
            let value = self.parse_expression()?;
            match expr {
                Expr::Variable { mut path } => {
                    if let Some(field) = (path.len() > 1).then(|| path.pop()).flatten() {
                        Statement::FieldAssignment { object: path,
                                                     field,
                                                     value }
                    } else if let Some(var) = path.pop() {
                        Statement::Assignment { var, value }
                    } else {
                        return Err(ParseError::InvalidAssignmentTarget { line });
                    }
                },
                _ => return Err(ParseError::InvalidAssignmentTarget { line }),
            }
        } else {
            Statement::Expression { expr }
        };

        self.consume(&Token::Newline)?;
        Ok(statement)
    }

    fn parse_print(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let mut args = Vec::new();
        if *self.lexer.current() != Token::Newline {
            args.push(self.parse_expression()?);
            while *self.lexer.current() == Token::Char(b',') {
                self.lexer.advance();
                args.push(self.parse_expression()?);
            }
        }
        self.consume(&Token::Newline)?;
        Ok(Statement::Print { args })
    }

    /// Parses a `return` statement. A bare `return` yields `None`.
    fn parse_return(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let value = if *self.lexer.current() == Token::Newline {
            Expr::NoneConst
        } else {
            self.parse_expression()?
        };
        self.consume(&Token::Newline)?;
        Ok(Statement::Return { value })
    }

    fn parse_if_else(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let condition = self.parse_expression()?;
        self.consume_char(b':')?;
        let if_body = Box::new(self.parse_suite()?);

        let else_body = if *self.lexer.current() == Token::Else {
            self.lexer.advance();
            self.consume_char(b':')?;
            Some(Box::new(self.parse_suite()?))
        } else {
            None
        };

        Ok(Statement::IfElse { condition,
                               if_body,
                               else_body })
    }

    /// Parses an indented block: `Newline Indent statement+ Dedent`.
    fn parse_suite(&mut self) -> ParseResult<Statement> {
        self.consume(&Token::Newline)?;
        self.consume(&Token::Indent)?;

        let mut statements = Vec::new();
        while *self.lexer.current() != Token::Dedent {
            if *self.lexer.current() == Token::Eof {
                return Err(ParseError::UnexpectedEndOfInput { line: self.lexer.line() });
            }
            statements.push(self.parse_statement()?);
        }
        self.lexer.advance();

        Ok(Statement::Compound { statements })
    }

    /// Parses `class Name:` or `class Name(Parent):` with its method block,
    /// and records the class for the statements that follow.
    fn parse_class_definition(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let name = self.identifier()?;

        let parent = if *self.lexer.current() == Token::Char(b'(') {
            self.lexer.advance();
            let parent_line = self.lexer.line();
            let parent_name = self.identifier()?;
            self.consume_char(b')')?;
            match self.classes.get(&parent_name) {
                Some(class) => Some(Rc::clone(class)),
                None => {
                    return Err(ParseError::UnknownClass { name: parent_name,
                                                          line: parent_line, });
                },
            }
        } else {
            None
        };

        self.consume_char(b':')?;
        self.consume(&Token::Newline)?;
        self.consume(&Token::Indent)?;

        let mut methods = Vec::new();
        while *self.lexer.current() == Token::Def {
            methods.push(self.parse_method()?);
        }
        self.consume(&Token::Dedent)?;

        let class = Rc::new(Class::new(name.clone(), methods, parent));
        self.classes.insert(name, Rc::clone(&class));
        Ok(Statement::ClassDefinition { class })
    }

    /// Parses `def name(self, ...):` with its body suite.
    ///
    /// The leading `self` parameter is required and not recorded among the
    /// formal parameters; the body is wrapped in a `MethodBody` node so a
    /// `return` anywhere inside stops at this method.
    fn parse_method(&mut self) -> ParseResult<Method> {
        self.lexer.advance();
        let line = self.lexer.line();
        let name = self.identifier()?;

        self.consume_char(b'(')?;
        let receiver = self.identifier()?;
        if receiver != SELF_NAME {
            return Err(ParseError::ExpectedSelfParameter { method: name, line });
        }
        let mut formal_params = Vec::new();
        while *self.lexer.current() == Token::Char(b',') {
            self.lexer.advance();
            formal_params.push(self.identifier()?);
        }
        self.consume_char(b')')?;
        self.consume_char(b':')?;

        let suite = self.parse_suite()?;
        Ok(Method { name,
                    formal_params,
                    body: Rc::new(Statement::MethodBody { body: Box::new(suite) }) })
    }
}
