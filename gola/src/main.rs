use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use gola::{Config, Driver, InputSource, LineError, LineReader, StdinSource, StdoutSink, logging};

const PROMPT: &str = "gola> ";

fn open_lines(path: &Path) -> LineReader<BufReader<File>> {
    let file = File::open(path).unwrap_or_else(|err| {
        eprintln!("Error: cannot open '{}': {}", path.display(), err);
        process::exit(1);
    });
    LineReader::new(BufReader::new(file))
}

fn main() {
    let config = Config::parse();

    if let Err(err) = logging::init(&config) {
        eprintln!("Error: cannot set up logging: {}", err);
        process::exit(1);
    }

    let mut driver = Driver::new(config.policy());
    let stats = driver.stats();

    ctrlc::set_handler(move || {
        log::info!("interrupted: {}", stats.summary());
        eprintln!("\nInterrupted: {}", stats.summary());
        let _ = io::stdout().flush();
        process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    let mut source: Box<dyn InputSource> = match &config.script {
        Some(path) => Box::new(open_lines(path)),
        None => Box::new(StdinSource::with_prompt(PROMPT)),
    };
    let mut input: Box<dyn InputSource> = match &config.input {
        Some(path) => Box::new(open_lines(path)),
        None => Box::new(StdinSource::new()),
    };

    match &config.script {
        Some(path) => log::info!("running {} ({:?})", path.display(), config.policy()),
        None => log::info!("reading statements from stdin ({:?})", config.policy()),
    }

    let result = driver.run(
        source.as_mut(),
        input.as_mut(),
        &mut StdoutSink,
        &mut |err: &LineError| eprintln!("Error: {}", err),
    );

    if let Err(err) = result {
        log::error!("session aborted: {}", err);
        process::exit(1);
    }
}
