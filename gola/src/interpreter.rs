use crate::ast::Statement;
use crate::error::GolaError;
use crate::eval::evaluate;
use crate::io::{InputSource, OutputSink};
use crate::lexer::Lexer;
use crate::parser::parse_statement;
use crate::symtab::SymbolTable;
use crate::token::Token;

/// What an executed statement did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Assigned { name: String, value: i64 },
    Printed(i64),
    Read { name: String, value: i64 },
}

/// One interpreter session. Owns the symbol table for its whole lifetime.
///
/// Every statement either completes or leaves the table exactly as it was:
/// values are computed first and written last.
pub struct Interpreter {
    symbols: SymbolTable,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
        }
    }

    pub fn execute_line(
        &mut self,
        line: &str,
        input: &mut dyn InputSource,
        output: &mut dyn OutputSink,
    ) -> Result<Outcome, GolaError> {
        let statement = parse_statement(line)?;
        self.execute(&statement, input, output)
    }

    pub fn execute(
        &mut self,
        statement: &Statement,
        input: &mut dyn InputSource,
        output: &mut dyn OutputSink,
    ) -> Result<Outcome, GolaError> {
        let outcome = match statement {
            Statement::Assign { target, expr } => {
                let value = evaluate(expr, &self.symbols)?;
                self.symbols.assign(target, value);
                Outcome::Assigned {
                    name: target.clone(),
                    value,
                }
            }
            Statement::Print { expr } => {
                let value = evaluate(expr, &self.symbols)?;
                output.emit(value)?;
                Outcome::Printed(value)
            }
            Statement::Read { target } => {
                let line = input.read_line()?.ok_or(GolaError::InputUnavailable)?;
                let value = parse_input(&line)?;
                self.symbols.assign(target, value);
                Outcome::Read {
                    name: target.clone(),
                    value,
                }
            }
        };

        log::debug!("symbol table: {}", self.symbols);
        Ok(outcome)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Forgets every binding.
    pub fn reset(&mut self) {
        self.symbols.clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a line answering a `read` with the same rules as a number literal.
pub fn parse_input(line: &str) -> Result<i64, GolaError> {
    match Lexer::new(line).tokenize().as_deref() {
        Ok([Token::Number(value), Token::End]) => Ok(*value),
        _ => Err(GolaError::InputFormat(line.to_string())),
    }
}
