use std::{
    io::{BufRead, Read, Write},
    iter::FusedIterator,
};

use crate::{
    error::{Malformed, MalformedLine, ScanError},
    record::{NameRecord, ResultSet},
};

/// Longest line accepted, in bytes, not counting the terminator.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Outcome for one input line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Line {
    Record(NameRecord),
    Malformed(MalformedLine),
}

/// Splits a line into a first name and the rest of the line.
///
/// Only the first whitespace run separates the fields, so `"Mary Jane Smith"`
/// gives `Mary` / `Jane Smith`. Both fields are truncated to `max_len`
/// characters after splitting.
pub fn parse_line(line: &str, max_len: usize) -> Result<NameRecord, Malformed> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Malformed::Blank);
    }

    let (first, rest) = line
        .split_once(char::is_whitespace)
        .ok_or(Malformed::SingleToken)?;

    // `line` is trimmed, so the remainder still holds a non-whitespace char
    Ok(NameRecord::new(first, rest.trim_start(), max_len))
}

/// Lazily turns a line-oriented stream into [`Line`]s.
///
/// Yields at most one error, after which the iterator is exhausted.
pub struct Parser<R> {
    reader: R,
    max_len: usize,
    line: usize,
    buf: Vec<u8>,
    end: bool,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            line: 0,
            buf: Vec::new(),
            end: false,
        }
    }

    /// Number of lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn read_line(&mut self) -> Result<Option<String>, ScanError> {
        self.buf.clear();

        // room for the longest accepted line plus "\r\n"
        let limit = (MAX_LINE_LEN + 2) as u64;
        let size = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| ScanError::Read {
                line: self.line + 1,
                source,
            })?;

        if size == 0 {
            return Ok(None);
        }
        self.line += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        if self.buf.len() > MAX_LINE_LEN {
            return Err(ScanError::LineTooLong {
                line: self.line,
                limit: MAX_LINE_LEN,
            });
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn classify(&self, raw: &str) -> Line {
        match parse_line(raw, self.max_len) {
            Ok(record) => {
                log::debug!("line {}: {:?}", self.line, record);
                Line::Record(record)
            }
            Err(kind) => {
                log::warn!("line {}: skipped, {}", self.line, kind);
                Line::Malformed(MalformedLine {
                    line: self.line,
                    content: raw.trim().to_string(),
                    kind,
                })
            }
        }
    }
}

impl<R: BufRead> Iterator for Parser<R> {
    type Item = Result<Line, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end {
            return None;
        }

        match self.read_line() {
            Ok(Some(raw)) => Some(Ok(self.classify(&raw))),
            Ok(None) => {
                self.end = true;
                None
            }
            Err(err) => {
                self.end = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Parser<R> {}

/// Drains `parser`, writing a notice to `notices` for every skipped line.
///
/// The first fatal error aborts the scan and nothing parsed so far is
/// returned.
pub fn collect<R, W>(parser: Parser<R>, notices: &mut W) -> Result<ResultSet, ScanError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut records = ResultSet::new();
    for line in parser {
        match line? {
            Line::Record(record) => records.push(record),
            Line::Malformed(skipped) => writeln!(notices, "{}", skipped)?,
        }
    }
    Ok(records)
}
