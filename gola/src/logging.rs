use std::fs::OpenOptions;
use std::io::{self, Write};

use chrono::Local;
use env_logger::{Builder, Env, Logger, Target};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::Config;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// `<timestamp> - gola - <LEVEL> - <message>`
pub fn format_record(buf: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} - gola - {} - {}",
        Local::now().format(TIMESTAMP_FORMAT),
        record.level(),
        record.args()
    )
}

fn builder(level: LevelFilter, target: Target) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::default())
        .format(|buf, record| format_record(buf, record))
        .target(target);
    builder
}

/// Sends every record to the log file and warnings and above to stderr.
struct Tee {
    file: Logger,
    console: Logger,
}

impl Log for Tee {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.file.enabled(metadata) || self.console.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.file.log(record);
        self.console.log(record);
    }

    fn flush(&self) {
        self.file.flush();
        self.console.flush();
    }
}

const CONSOLE_LEVEL: LevelFilter = LevelFilter::Warn;

/// The logger for `config` and the most verbose level it lets through.
fn logger(config: &Config) -> io::Result<(Box<dyn Log>, LevelFilter)> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = builder(config.log_level(), Target::Pipe(Box::new(file))).build();
            let console = Builder::new()
                .filter_level(CONSOLE_LEVEL)
                .format(|buf, record| format_record(buf, record))
                .target(Target::Stderr)
                .build();
            let max_level = file.filter().max(console.filter());
            Ok((Box::new(Tee { file, console }), max_level))
        }
        None => {
            let console = builder(config.log_level(), Target::Stderr).build();
            let max_level = console.filter();
            Ok((Box::new(console), max_level))
        }
    }
}

/// Installs the global logger. `RUST_LOG` overrides the level from `config`
/// for the main destination; with a log file, stderr keeps showing warnings.
pub fn init(config: &Config) -> io::Result<()> {
    let (logger, max_level) = logger(config)?;
    log::set_boxed_logger(logger).map_err(io::Error::other)?;
    log::set_max_level(max_level);
    Ok(())
}
