//! Load report for catalog decoding.

use std::fmt;

use crate::codec::FIELD_COUNT;

/// Why a catalog line was left out of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The line did not split into exactly six fields.
    FieldCount(usize),
    /// `id` or `year` is not a base-10 integer.
    InvalidNumber { field: &'static str, value: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::FieldCount(count) => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, count)
            }
            DropReason::InvalidNumber { field, value } => {
                write!(f, "{} is not an integer: {:?}", field, value)
            }
        }
    }
}

/// A catalog line that was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based line number in the catalog file (the header is line 1).
    pub line: usize,
    pub reason: DropReason,
}

/// What happened while decoding a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub dropped: Vec<DroppedLine>,
}

impl LoadReport {
    /// Lines dropped because a numeric field did not parse.
    pub fn invalid_numbers(&self) -> impl Iterator<Item = &DroppedLine> {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, DropReason::InvalidNumber { .. }))
    }
}
