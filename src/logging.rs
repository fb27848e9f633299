//! Diagnostics for the game binaries.
//!
//! Records go to stderr as `[LEVEL target] message` so they never mix with
//! the prompts and grids written to stdout. The level is read once from
//! `GRIDSHOT_LOG` (`error`, `warn`, `info`, `debug`, `trace` or `off`).

#![cfg(feature = "std")]

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Variable holding the maximum level to emit.
pub const LOG_ENV: &str = "GRIDSHOT_LOG";

struct Diagnostics;

impl Log for Diagnostics {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = writeln!(
            out,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static DIAGNOSTICS: Diagnostics = Diagnostics;

/// Parse a `GRIDSHOT_LOG` value; unknown values fall back to `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it more than once is harmless.
pub fn init_logging() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&DIAGNOSTICS).is_ok() {
        log::set_max_level(level);
    }
}
