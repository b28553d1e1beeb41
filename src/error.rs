// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by index construction and parsing.
//!
//! Nothing here is retried or recovered internally. Every operation is a pure
//! function of an immutable text, so the caller gets the error back as-is.

use crate::verify::InvariantError;
use std::fmt;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text has no symbols, so no suffix array exists.
    EmptyInput,
    /// A query range does not fit the text.
    Range(RangeError),
    /// A built structure broke one of its invariants.
    InternalConsistency(InvariantError),
}

/// Why a query range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    NegativeStart(i64),
    NegativeLength(i64),
    /// `start` does not name a position of the text.
    StartOutOfBounds { start: usize, text_len: usize },
    /// `start + len` runs past the end of the text (or overflows).
    EndOutOfBounds {
        start: usize,
        len: usize,
        text_len: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NegativeStart(start) => write!(f, "start {} is negative", start),
            RangeError::NegativeLength(len) => write!(f, "length {} is negative", len),
            RangeError::StartOutOfBounds { start, text_len } => {
                write!(f, "start {} >= text length {}", start, text_len)
            }
            RangeError::EndOutOfBounds {
                start,
                len,
                text_len,
            } => write!(
                f,
                "range {}+{} exceeds text length {}",
                start, len, text_len
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "input text is empty"),
            Error::Range(e) => write!(f, "invalid query range: {}", e),
            Error::InternalConsistency(e) => write!(f, "internal consistency violation: {}", e),
        }
    }
}

impl std::error::Error for RangeError {}

// Display already carries the inner message, so no `source()`.
impl std::error::Error for Error {}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Range(e)
    }
}

impl From<InvariantError> for Error {
    fn from(e: InvariantError) -> Self {
        Error::InternalConsistency(e)
    }
}
