// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rightmost LZ77 parsing of arbitrary substrings via right closed repeats.
//!
//! Index a fixed text once, then parse any range `[i, i + ℓ)` of it into
//! literals and `(distance, length)` copies. Among equally long earlier
//! occurrences, the copy always points at the closest one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌───────────────────┐
//! │ suffix_index │────▶│      repeats      │────▶│      parser       │
//! │ (SA, rank,   │     │ (LCP-interval     │     │ (greedy, rightmost│
//! │  LCP)        │     │  tree, predecessor│     │  source, clipping)│
//! └──────────────┘     └───────────────────┘     └───────────────────┘
//!   ▲         ▲                                            │
//!   │         │                                            ▼
//! ┌──────┐ ┌──────────┐                            ┌───────────────────┐
//! │ sais │ │ doubling │                            │      decode       │
//! └──────┘ └──────────┘                            └───────────────────┘
//!
//! ┌────────────────────────────────────────────────────────────────────┐
//! │ verify: validate_* on finished structures, debug-only contracts    │
//! │ on each value as it is produced                                    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every structure is immutable once built. A [`RightmostParser`] borrows the
//! indices and can be shared across threads.
//!
//! # Usage
//!
//! ```
//! use rightmost_lz::{ClosedRepeatIndex, Phrase, RightmostParser, SuffixIndex};
//!
//! let text = b"abracadabra";
//! let suffixes = SuffixIndex::build(text)?;
//! let repeats = ClosedRepeatIndex::build(&suffixes);
//! let parser = RightmostParser::new(&repeats, text)?;
//!
//! let parse = parser.parse(7, 4)?;
//! assert_eq!(parse.phrases(), &[Phrase::Copy { distance: 7, length: 4 }]);
//! # Ok::<(), rightmost_lz::Error>(())
//! ```
//!
//! For a one-off query, [`rightmost_lz77`] builds everything and parses once.

// Module declarations
mod alphabet;
pub mod config;
pub mod decode;
mod doubling;
mod error;
mod parser;
pub mod repeats;
mod sais;
mod suffix_index;
pub mod testing;
mod types;
pub mod util;
pub mod verify;

// Re-exports for public API
pub use config::{IndexConfig, SuffixAlgorithm};
pub use decode::{decode, decode_in};
pub use error::{Error, RangeError};
pub use parser::{parse_with_config, rightmost_lz77, RightmostParser};
pub use repeats::{ClosedRepeatIndex, RepeatMatch, RightClosedRepeat};
pub use suffix_index::SuffixIndex;
pub use types::{Parse, Phrase, QueryRange, SourceScope};
pub use verify::InvariantError;
