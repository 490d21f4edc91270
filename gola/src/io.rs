use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

/// Where statements and `read` values come from, one line per call.
pub trait InputSource {
    /// Blocks until a line is available. `Ok(None)` means end of input.
    /// The returned line has its terminator removed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Receives the value of every executed `print`.
pub trait OutputSink {
    fn emit(&mut self, value: i64) -> io::Result<()>;
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader { reader }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(line)))
    }
}

/// Reads from the process stdin without holding its lock between calls, so
/// the driver and `read` statements can both pull from it.
#[derive(Debug, Default)]
pub struct StdinSource {
    prompt: Option<&'static str>,
}

impl StdinSource {
    pub fn new() -> Self {
        StdinSource { prompt: None }
    }

    /// Shows `prompt` before each line when stdin is a terminal.
    pub fn with_prompt(prompt: &'static str) -> Self {
        StdinSource {
            prompt: io::stdin().is_terminal().then_some(prompt),
        }
    }
}

impl InputSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(prompt) = self.prompt {
            let mut stdout = io::stdout();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(line)))
    }
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: i64) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", value)?;
        stdout.flush()
    }
}

impl InputSource for VecDeque<String> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

impl OutputSink for Vec<i64> {
    fn emit(&mut self, value: i64) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}
