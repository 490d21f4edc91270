use crate::ast::{BinaryOp, Expr, Statement};
use crate::error::{GolaError, LexError};
use crate::lexer::Lexer;
use crate::token::Token;

/// Recursive-descent parser for a single line.
///
/// The lookahead keeps lexer failures instead of raising them immediately: a
/// bad character where the grammar expects more input is a lex error, while
/// the same character after a complete statement is trailing input.
pub struct Parser {
    lexer: Lexer,
    current: Result<Token, LexError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn current(&self) -> Result<&Token, GolaError> {
        self.current.as_ref().map_err(|err| err.clone().into())
    }

    fn trailing(&self) -> Option<String> {
        match &self.current {
            Ok(Token::End) => None,
            Ok(token) => Some(format!("unexpected {}", token)),
            Err(err) => Some(format!("unexpected input: {}", err)),
        }
    }

    pub fn statement(&mut self) -> Result<Statement, GolaError> {
        let statement = match self.current()? {
            Token::Variable(target) => {
                let target = target.clone();
                self.advance();
                self.assignment(target)?
            }
            Token::Print => {
                self.advance();
                Statement::Print { expr: self.expr()? }
            }
            Token::Read => {
                self.advance();
                Statement::Read {
                    target: self.read_target()?,
                }
            }
            Token::End => return Err(GolaError::StatementSyntax("empty statement".to_string())),
            token => {
                return Err(GolaError::StatementSyntax(format!(
                    "expected a variable, `print` or `read`, found {}",
                    token
                )));
            }
        };

        if let Some(message) = self.trailing() {
            return Err(GolaError::StatementSyntax(format!(
                "{} after `{}`",
                message, statement
            )));
        }
        log::debug!("parsed statement: {}", statement);
        Ok(statement)
    }

    /// Parses a line holding nothing but an expression.
    pub fn expression(&mut self) -> Result<Expr, GolaError> {
        let expr = self.expr()?;
        match self.trailing() {
            Some(message) => Err(GolaError::ExpressionSyntax(format!(
                "{} after `{}`",
                message, expr
            ))),
            None => Ok(expr),
        }
    }

    fn assignment(&mut self, target: String) -> Result<Statement, GolaError> {
        match self.current()? {
            Token::Assign => self.advance(),
            token => {
                return Err(GolaError::StatementSyntax(format!(
                    "expected `=` after `{}`, found {}",
                    target, token
                )));
            }
        }
        let expr = self.expr()?;
        Ok(Statement::Assign { target, expr })
    }

    fn read_target(&mut self) -> Result<String, GolaError> {
        match self.current()? {
            Token::Variable(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            token => Err(GolaError::StatementSyntax(format!(
                "expected a variable after `read`, found {}",
                token
            ))),
        }
    }

    fn additive_op(&self) -> Option<BinaryOp> {
        match self.current {
            Ok(Token::Plus) => Some(BinaryOp::Add),
            Ok(Token::Minus) => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current {
            Ok(Token::Star) => Some(BinaryOp::Mul),
            Ok(Token::Slash) => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<Expr, GolaError> {
        let mut node = self.product()?;

        while let Some(op) = self.additive_op() {
            self.advance();
            node = Expr::binary(node, op, self.product()?);
        }

        Ok(node)
    }

    fn product(&mut self) -> Result<Expr, GolaError> {
        let mut node = self.term()?;

        while let Some(op) = self.multiplicative_op() {
            self.advance();
            node = Expr::binary(node, op, self.term()?);
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Expr, GolaError> {
        match self.current()? {
            Token::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::literal(value))
            }
            Token::Variable(name) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::reference(name))
            }
            token => Err(GolaError::ExpressionSyntax(format!(
                "expected a number or variable, found {}",
                token
            ))),
        }
    }
}

pub fn parse_statement(line: &str) -> Result<Statement, GolaError> {
    Parser::new(Lexer::new(line)).statement()
}

pub fn parse_expression(text: &str) -> Result<Expr, GolaError> {
    Parser::new(Lexer::new(text)).expression()
}
