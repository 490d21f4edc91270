use std::path::PathBuf;

use clap::Parser as ClapParser;
use log::LevelFilter;

use crate::driver::ErrorPolicy;

/// Interpreter for a tiny integer language: `x = 1 + 2`, `print x`, `read y`.
#[derive(ClapParser, Debug, Clone)]
#[command(name = "gola", version, about, long_about = None)]
pub struct Config {
    /// Script with one statement per line. Statements are read from stdin when omitted.
    pub script: Option<PathBuf>,

    /// File answering `read` statements, one value per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Stop at the first statement that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Append log records to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn policy(&self) -> ErrorPolicy {
        if self.fail_fast {
            ErrorPolicy::FailFast
        } else {
            ErrorPolicy::Continue
        }
    }

    /// A log file records everything down to `debug`; the console only
    /// shows warnings unless asked for more.
    pub fn log_level(&self) -> LevelFilter {
        let floor = if self.log_file.is_some() {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        let requested = match self.verbose {
            0 => LevelFilter::Off,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        floor.max(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("gola").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.script, None);
        assert_eq!(config.policy(), ErrorPolicy::Continue);
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn script_and_flags() {
        let config = parse(&["prog.gola", "--fail-fast", "--input", "answers.txt"]);
        assert_eq!(config.script, Some(PathBuf::from("prog.gola")));
        assert_eq!(config.input, Some(PathBuf::from("answers.txt")));
        assert_eq!(config.policy(), ErrorPolicy::FailFast);
    }

    #[test]
    fn log_file_defaults_to_debug() {
        let config = parse(&["--log-file", "gola.log"]);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["--log-file", "x.log", "-vvv"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Config::try_parse_from(["gola", "--nope"]).is_err());
    }
}
