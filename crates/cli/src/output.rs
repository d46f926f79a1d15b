//! Access log formatting.
//!
//! Renders the configuration records and cache events either in the fixed
//! column text layout or as one JSON object per line.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use e20_core::config::{CacheConfig, CacheLevelId};
use e20_core::core::units::cache::{AccessEvent, AccessLog};

/// Output format of the access log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Column-aligned text, one line per record.
    #[default]
    Text,
    /// JSON lines.
    Json,
}

/// One line of JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "record", rename_all = "lowercase")]
enum Record<'a> {
    Config {
        level: CacheLevelId,
        size: usize,
        assoc: usize,
        block_size: usize,
        rows: usize,
    },
    Access(&'a AccessEvent),
}

/// Text form of a configuration record.
pub fn config_line(level: CacheLevelId, config: &CacheConfig) -> String {
    format!(
        "Cache {level} has size {}, associativity {}, blocksize {}, rows {}",
        config.size,
        config.assoc,
        config.block_size,
        config.rows()
    )
}

/// Text form of an access event.
pub fn event_line(event: &AccessEvent) -> String {
    let label = format!("{} {}", event.level, event.outcome);
    format!(
        "{label:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
        event.pc, event.addr, event.row
    )
}

/// Writes records to `out` in the chosen format.
///
/// Event callbacks cannot fail, so the first write error is kept and
/// returned by [`Printer::finish`]; later records are dropped.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    format: Format,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    /// Creates a printer.
    pub const fn new(out: W, format: Format) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Writes the configuration record of one cache level.
    pub fn config(&mut self, level: CacheLevelId, config: &CacheConfig) {
        let line = match self.format {
            Format::Text => Ok(config_line(level, config)),
            Format::Json => serde_json::to_string(&Record::Config {
                level,
                size: config.size,
                assoc: config.assoc,
                block_size: config.block_size,
                rows: config.rows(),
            }),
        };
        self.emit(line);
    }

    /// Flushes output and reports the first write error, if any.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error met while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, line: serde_json::Result<String>) {
        if self.error.is_some() {
            return;
        }
        let result = line
            .map_err(io::Error::from)
            .and_then(|line| writeln!(self.out, "{line}"));
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

impl<W: Write> AccessLog for Printer<W> {
    fn record(&mut self, event: &AccessEvent) {
        let line = match self.format {
            Format::Text => Ok(event_line(event)),
            Format::Json => serde_json::to_string(&Record::Access(event)),
        };
        self.emit(line);
    }
}
