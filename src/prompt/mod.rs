use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::error::ScanError;

pub const PROMPT: &str = "Enter the name of the text file: ";

/// First whitespace-delimited token of `input`, if any.
pub fn first_token(input: &str) -> Option<&str> {
    input.split_whitespace().next()
}

/// Asks for a file name on `output` and reads it from `input`.
///
/// Blocks until a line containing a token arrives; empty lines are passed
/// over. Only the first token is used, so names with spaces are not
/// supported.
pub fn prompt_path<R, W>(mut input: R, mut output: W) -> Result<PathBuf, ScanError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        let size = input.read_line(&mut line).map_err(ScanError::Prompt)?;
        if size == 0 {
            return Err(ScanError::MissingPath);
        }
        if let Some(token) = first_token(&line) {
            return Ok(PathBuf::from(token));
        }
    }
}
