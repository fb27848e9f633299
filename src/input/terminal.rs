#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;
use std::vec::Vec;

use super::Input;
use crate::common::InputError;

/// Interactive player input over a reader/writer pair (normally stdin/stdout).
///
/// Rows and columns are asked for with separate prompts. Invalid answers are
/// re-prompted, at most `max_attempts` times per question when a limit is set.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W, max_attempts: Option<u32>) -> Self {
        Self {
            reader,
            writer,
            max_attempts,
        }
    }

    /// Give back the writer, e.g. to inspect captured prompts.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(InputError::Closed);
        }
        // undecodable bytes become U+FFFD and fail to parse like any other bad answer
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Ask `prompt` until the answer parses to a number in `[min, max]`.
    fn read_number(
        &mut self,
        prompt: &str,
        label: &str,
        min: usize,
        max: Option<usize>,
    ) -> Result<usize, InputError> {
        let mut failures = 0u32;
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<usize>() {
                Ok(v) if v >= min && max.map_or(true, |m| v <= m) => return Ok(v),
                _ => {
                    log::warn!("rejected {} input {:?}", label, line);
                    match max {
                        Some(m) => {
                            writeln!(self.writer, "{} value must be between {} and {}", label, min, m)?
                        }
                        None => writeln!(self.writer, "{} must be at least {}", label, min)?,
                    }
                }
            }
            failures += 1;
            if let Some(limit) = self.max_attempts {
                if failures >= limit {
                    return Err(InputError::Exhausted { attempts: failures });
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Input for TerminalInput<R, W> {
    fn request_player_count(&mut self) -> Result<usize, InputError> {
        self.read_number("Enter number of players: ", "Number of players", 1, None)
    }

    fn request_coordinate(
        &mut self,
        max_x: usize,
        max_y: usize,
    ) -> Result<(usize, usize), InputError> {
        let x = self.read_number("Select row: ", "Row", 0, Some(max_x))?;
        let y = self.read_number("Select column: ", "Column", 0, Some(max_y))?;
        Ok((x, y))
    }
}
