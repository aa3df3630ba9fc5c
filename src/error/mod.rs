use std::{fmt, io, path::PathBuf};

use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Fatal conditions. Any of these ends the run without a report.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error opening file: open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading file: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("Error reading file: line {line} is longer than {limit} bytes")]
    LineTooLong { line: usize, limit: usize },
    #[error("Error opening file: no file name entered")]
    MissingPath,
    #[error("Error reading file name: {0}")]
    Prompt(#[source] io::Error),
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Why a line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Malformed {
    #[strum(to_string = "blank line")]
    Blank,
    #[strum(to_string = "single token")]
    SingleToken,
}

/// A skipped line. Recoverable; parsing carries on with the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub content: String,
    pub kind: Malformed,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping malformed line: {}", self.content)
    }
}
