mod ast;
mod config;
mod driver;
mod error;
mod eval;
mod interpreter;
mod io;
mod lexer;
mod parser;
mod symtab;
mod token;

pub mod logging;

pub use ast::{BinaryOp, Expr, Statement, Term};
pub use config::Config;
pub use driver::{Driver, ErrorPolicy, SessionStats};
pub use error::{GolaError, LexError, LexErrorKind, LineError};
pub use eval::evaluate;
pub use interpreter::{Interpreter, Outcome, parse_input};
pub use io::{InputSource, LineReader, OutputSink, StdinSource, StdoutSink};
pub use lexer::Lexer;
pub use parser::{Parser, parse_expression, parse_statement};
pub use symtab::SymbolTable;
pub use token::Token;

use std::collections::{HashMap, VecDeque};

/// Result of [`run`]: everything printed and the final bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub output: Vec<i64>,
    pub variables: HashMap<String, i64>,
}

/// Executes a whole program, stopping at the first failing statement.
/// `input` answers `read` statements in order.
pub fn run(program: &str, input: &[&str]) -> Result<Run, LineError> {
    let mut driver = Driver::new(ErrorPolicy::FailFast);
    let mut source = LineReader::new(program.as_bytes());
    let mut answers: VecDeque<String> = input.iter().map(|line| line.to_string()).collect();
    let mut output: Vec<i64> = Vec::new();
    driver.run(&mut source, &mut answers, &mut output, &mut |_: &LineError| {})?;
    Ok(Run {
        output,
        variables: driver.interpreter().symbols().to_map(),
    })
}
