use clap::ValueEnum;

use crate::record::MAX_FIELD_LEN;

/// Where malformed-line notices are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NoticeTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Knobs for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Characters kept from each name.
    pub max_len: usize,
    /// Minimum report column width.
    pub width: usize,
    pub notices: NoticeTarget,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_len: MAX_FIELD_LEN,
            width: MAX_FIELD_LEN,
            notices: NoticeTarget::default(),
        }
    }
}
