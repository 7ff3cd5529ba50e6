use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Comparator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a full expression.
    ///
    /// Entry point of the precedence chain:
    /// `or → and → not → comparison → additive → multiplicative → unary →
    /// postfix → primary`.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;
        while *self.lexer.current() == Token::Or {
            self.lexer.advance();
            let right = self.parse_and()?;
            left = Expr::Or { left:  Box::new(left),
                              right: Box::new(right), };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_not()?;
        while *self.lexer.current() == Token::And {
            self.lexer.advance();
            let right = self.parse_not()?;
            left = Expr::And { left:  Box::new(left),
                               right: Box::new(right), };
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> ParseResult<Expr> {
        if *self.lexer.current() == Token::Not {
            self.lexer.advance();
            let value = self.parse_not()?;
            return Ok(Expr::Not { value: Box::new(value) });
        }
        self.parse_comparison()
    }

    /// Parses at most one comparison; chains like `a < b < c` are not part
    /// of the language.
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_additive()?;
        let op = match self.lexer.current() {
            Token::Eq => Comparator::Equal,
            Token::NotEq => Comparator::NotEqual,
            Token::LessOrEq => Comparator::LessOrEqual,
            Token::GreaterOrEq => Comparator::GreaterOrEqual,
            Token::Char(b'<') => Comparator::Less,
            Token::Char(b'>') => Comparator::Greater,
            _ => return Ok(left),
        };
        self.lexer.advance();
        let right = self.parse_additive()?;
        Ok(Expr::Comparison { op,
                              left: Box::new(left),
                              right: Box::new(right) })
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.lexer.current() {
                Token::Char(b'+') => BinaryOperator::Add,
                Token::Char(b'-') => BinaryOperator::Sub,
                _ => return Ok(left),
            };
            self.lexer.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
        }
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.lexer.current() {
                Token::Char(b'*') => BinaryOperator::Mul,
                Token::Char(b'/') => BinaryOperator::Div,
                _ => return Ok(left),
            };
            self.lexer.advance();
            let right = self.parse_unary()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
        }
    }

    /// Parses unary minus. A negated number literal folds into the literal;
    /// any other operand becomes a subtraction from zero.
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if *self.lexer.current() == Token::Char(b'-') {
            self.lexer.advance();
            let operand = self.parse_unary()?;
            return Ok(match operand {
                Expr::NumericConst(value) => Expr::NumericConst(-value),
                operand => Expr::BinaryOp { op:    BinaryOperator::Sub,
                                            left:  Box::new(Expr::NumericConst(0)),
                                            right: Box::new(operand), },
            });
        }
        self.parse_postfix()
    }

    /// Parses the `.field` and `.method(...)` chain after a primary.
    ///
    /// A field read extends a variable path; on any other receiver only
    /// method calls are possible.
    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        while *self.lexer.current() == Token::Char(b'.') {
            let line = self.lexer.line();
            self.lexer.advance();
            let name = self.identifier()?;
            if *self.lexer.current() == Token::Char(b'(') {
                let args = self.parse_arguments()?;
                expr = Expr::MethodCall { object: Box::new(expr),
                                          method: name,
                                          args };
            } else if let Expr::Variable { path } = &mut expr {
                path.push(name);
            } else {
                return Err(ParseError::InvalidFieldAccess { line });
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let line = self.lexer.line();
        match self.lexer.current().clone() {
            Token::Number(value) => {
                self.lexer.advance();
                Ok(Expr::NumericConst(value))
            },
            Token::String(value) => {
                self.lexer.advance();
                Ok(Expr::StringConst(value))
            },
            Token::True => {
                self.lexer.advance();
                Ok(Expr::BoolConst(true))
            },
            Token::False => {
                self.lexer.advance();
                Ok(Expr::BoolConst(false))
            },
            Token::None => {
                self.lexer.advance();
                Ok(Expr::NoneConst)
            },
            Token::Char(b'(') => {
                self.lexer.advance();
                let inner = self.parse_expression()?;
                self.consume_char(b')')?;
                Ok(inner)
            },
            Token::Id(name) => {
                self.lexer.advance();
                if *self.lexer.current() == Token::Char(b'(') {
                    if name == "str" {
                        self.lexer.advance();
                        let value = self.parse_expression()?;
                        self.consume_char(b')')?;
                        return Ok(Expr::Stringify { value: Box::new(value) });
                    }
                    let Some(class) = self.classes.get(&name).map(Rc::clone) else {
                        return Err(ParseError::UnknownClass { name, line });
                    };
                    let args = self.parse_arguments()?;
                    return Ok(Expr::NewInstance { class, args });
                }
                Ok(Expr::Variable { path: vec![name] })
            },
            other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                       line }),
        }
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.consume_char(b'(')?;
        let mut args = Vec::new();
        if *self.lexer.current() != Token::Char(b')') {
            args.push(self.parse_expression()?);
            while *self.lexer.current() == Token::Char(b',') {
                self.lexer.advance();
                args.push(self.parse_expression()?);
            }
        }
        self.consume_char(b')')?;
        Ok(args)
    }
}
