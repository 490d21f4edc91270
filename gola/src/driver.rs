use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GolaError, LineError};
use crate::interpreter::Interpreter;
use crate::io::{InputSource, OutputSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Report the failure and move on to the next line.
    #[default]
    Continue,
    /// Stop the session at the first failing statement.
    FailFast,
}

/// Counters shared with the Ctrl-C handler.
#[derive(Debug, Default)]
pub struct SessionStats {
    pub lines_read: AtomicU64,
    pub statements_executed: AtomicU64,
    pub statements_failed: AtomicU64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executed(&self) -> u64 {
        self.statements_executed.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.statements_failed.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} lines read, {} statements executed, {} failed",
            self.lines_read.load(Ordering::Relaxed),
            self.executed(),
            self.failed()
        )
    }
}

/// Feeds lines to an interpreter session and decides what a failure means.
pub struct Driver {
    interpreter: Interpreter,
    policy: ErrorPolicy,
    stats: Arc<SessionStats>,
}

impl Driver {
    pub fn new(policy: ErrorPolicy) -> Self {
        Driver {
            interpreter: Interpreter::new(),
            policy,
            stats: Arc::new(SessionStats::new()),
        }
    }

    pub fn stats(&self) -> Arc<SessionStats> {
        Arc::clone(&self.stats)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Runs until `source` is exhausted.
    ///
    /// Every failing statement is passed to `report`. With
    /// [`ErrorPolicy::FailFast`] the first one is also returned. A failure to
    /// read from `source` itself always ends the session.
    pub fn run(
        &mut self,
        source: &mut dyn InputSource,
        input: &mut dyn InputSource,
        output: &mut dyn OutputSink,
        report: &mut dyn FnMut(&LineError),
    ) -> Result<(), LineError> {
        let mut line_no = 0;
        loop {
            line_no += 1;
            let line = match source.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    let failure = LineError {
                        line: line_no,
                        error: GolaError::Io(err),
                    };
                    report(&failure);
                    return Err(failure);
                }
            };
            self.stats.lines_read.fetch_add(1, Ordering::Relaxed);

            if line.trim().is_empty() {
                continue;
            }

            log::debug!("line {}: {}", line_no, line);
            match self.interpreter.execute_line(&line, input, output) {
                Ok(outcome) => {
                    self.stats.statements_executed.fetch_add(1, Ordering::Relaxed);
                    log::trace!("line {}: {:?}", line_no, outcome);
                }
                Err(error) => {
                    self.stats.statements_failed.fetch_add(1, Ordering::Relaxed);
                    let failure = LineError {
                        line: line_no,
                        error,
                    };
                    report(&failure);
                    if self.policy == ErrorPolicy::FailFast {
                        return Err(failure);
                    }
                    log::debug!("{}, continuing", failure);
                }
            }
        }

        log::info!("session finished: {}", self.stats.summary());
        Ok(())
    }
}
