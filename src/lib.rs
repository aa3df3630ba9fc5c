//! Reads "first last" name pairs from a text file and prints them as an
//! aligned report.
//!
//! The pipeline is [`acquire::open`] → [`parser::Parser`] → [`report::render`].

pub mod acquire;
pub mod error;
pub mod options;
pub mod parser;
pub mod prompt;
pub mod record;
pub mod report;

pub use crate::error::{Malformed, MalformedLine, ScanError};
pub use crate::options::{NoticeTarget, Options};
pub use crate::record::{NameRecord, ResultSet};
