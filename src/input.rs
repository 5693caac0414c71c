//! Reading 1-based coordinates from a line-oriented input source.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::SIZE;
use tracing::{debug, instrument};

/// Parses a 1-based coordinate ("1" to "3") into a 0-based index.
pub fn parse_coordinate(input: &str) -> Option<usize> {
    let value: usize = input.trim().parse().ok()?;
    (1..=SIZE).contains(&value).then(|| value - 1)
}

/// Prompts until the user enters a valid 1-based coordinate.
///
/// # Errors
///
/// Fails if the input is closed or reading/writing fails.
#[instrument(skip(reader, writer))]
pub fn read_coordinate<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<usize> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("Input closed before a move was entered");
        }

        match parse_coordinate(&line) {
            Some(index) => return Ok(index),
            None => {
                debug!(input = line.trim(), "Invalid coordinate");
                writeln!(writer, "Invalid input, please try again.")?;
            }
        }
    }
}
