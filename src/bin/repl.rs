use cabbage_roll::Evaluator;
use log::{LevelFilter, Log, Metadata, Record};
use std::io::{self, BufRead, Write};

/// Writes records to stderr so they stay out of the rolled replies.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `CABBAGE_LOG` (`off`, `error`, ..., `trace`), `warn` otherwise.
fn init_logging() -> Result<(), log::SetLoggerError> {
    let level = std::env::var("CABBAGE_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging().map_err(|e| e.to_string())?;

    let mut evaluator = Evaluator::default();
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            println!("{}", evaluator.roll(&line));
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
