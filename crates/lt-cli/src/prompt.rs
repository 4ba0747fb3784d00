use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};

pub const INPUT_PROMPT: &str = "Enter input CSV file path: ";
pub const OUTPUT_PROMPT: &str = "Enter output CSV file path: ";

/// Ask for the input and output paths, one line each.
///
/// # Errors
///
/// Fails if the streams cannot be used, input ends early, or an answer is
/// blank.
pub fn ask_paths<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let input = ask(reader, writer, INPUT_PROMPT).context("reading input path")?;
    let output = ask(reader, writer, OUTPUT_PROMPT).context("reading output path")?;
    Ok((input, output))
}

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> anyhow::Result<PathBuf> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("no answer before end of input");
    }
    let answer = line.trim();
    if answer.is_empty() {
        bail!("path must not be empty");
    }
    Ok(PathBuf::from(answer))
}
