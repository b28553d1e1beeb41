// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rlz command-line interface.
//!
//! Three subcommands: `parse` to print the rightmost LZ77 parse of a range,
//! `inspect` to dump the suffix array, LCP array and right closed repeats, and
//! `prompt` for the interactive question-and-answer flow with 1-based `i`.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rightmost_lz::{SourceScope, SuffixAlgorithm};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rlz",
    about = "Rightmost LZ77 parsing of substrings via right closed repeats",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a range of the text into literals and copies
    Parse(ParseArgs),

    /// Print the suffix array, LCP array and right closed repeats
    Inspect(InspectArgs),

    /// Ask for the text, i (1-based) and ell on stdin
    Prompt,
}

/// Where the text comes from. With neither flag, stdin is read.
#[derive(Args)]
pub struct InputArgs {
    /// Text to index, taken literally
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file; one trailing newline is dropped
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Index construction options shared by `parse` and `inspect`.
#[derive(Args)]
pub struct IndexArgs {
    /// JSON config file (algorithm, checkContracts, scope); flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suffix array construction algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Start of the range (0-based unless --one-based)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub start: i64,

    /// Length of the range; defaults to the rest of the text
    #[arg(short, long, allow_negative_numbers = true)]
    pub len: Option<i64>,

    /// Interpret --start as 1-based
    #[arg(long)]
    pub one_based: bool,

    /// Where copies may take their source from
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Print the parse as JSON
    #[arg(long)]
    pub json: bool,

    /// Print index and parse statistics
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Re-check every array and repeat against the text by brute force
    #[arg(long)]
    pub verify: bool,

    /// Maximum number of rows and repeats to print
    #[arg(long, default_value = "64")]
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Any earlier position of the whole text
    Text,
    /// Only earlier positions inside the range
    Substring,
}

impl From<ScopeArg> for SourceScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Text => SourceScope::Text,
            ScopeArg::Substring => SourceScope::Substring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// SA-IS induced sorting, linear time
    Sais,
    /// Prefix doubling, O(n log² n)
    Doubling,
}

impl From<AlgorithmArg> for SuffixAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sais => SuffixAlgorithm::InducedSorting,
            AlgorithmArg::Doubling => SuffixAlgorithm::PrefixDoubling,
        }
    }
}
