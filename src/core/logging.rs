//! Logging initialization.
//!
//! Log lines go to stderr and, when the configured log file can be opened,
//! are appended to it as well. A file that cannot be opened degrades to
//! stderr-only logging instead of aborting the monitor.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use env_logger::{Builder, Target};

use crate::core::config::LoggingConfig;

/// Writer that duplicates every log line to stderr and the log file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = &mut self.file {
            // A full disk must not take console logging down with it
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut self.file {
            let _ = file.flush();
        }
        Ok(())
    }
}

/// Initialize the global logger from the `logging` config section.
pub fn init(config: &LoggingConfig) {
    let file = match OpenOptions::new().create(true).append(true).open(&config.file) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {} (logging to stderr only)",
                config.file, e
            );
            None
        }
    };

    Builder::new()
        .filter_level(config.level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .init();
}
