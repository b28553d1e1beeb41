// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::time::Instant;

use rightmost_lz::verify;
use rightmost_lz::{
    ClosedRepeatIndex, Error, IndexConfig, Parse, QueryRange, RangeError, RightmostParser,
    SuffixIndex,
};

mod cli;
use cli::display::{self, themed, BOLD};
use cli::{Cli, Commands, IndexArgs, InputArgs, InspectArgs, ParseArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse(args) => run_parse(&args),
        Commands::Inspect(args) => run_inspect(&args),
        Commands::Prompt => run_prompt(),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Text as Unicode scalar values. Files and stdin lose one trailing newline.
fn read_text(input: &InputArgs) -> Result<Vec<char>> {
    if let Some(text) = &input.text {
        return Ok(text.chars().collect());
    }

    let raw = match &input.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };
    Ok(strip_newline(&raw).chars().collect())
}

fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw)
}

/// Config file first, then explicit flags on top.
fn load_config(args: &IndexArgs) -> Result<IndexConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => IndexConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm.into();
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<IndexConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    IndexConfig::from_json_str(&json)
        .with_context(|| format!("Invalid config {}", path.display()))
}

fn build_index(text: &[char], config: &IndexConfig) -> Result<SuffixIndex> {
    if text.is_empty() {
        return Err(Error::EmptyInput.into());
    }
    Ok(SuffixIndex::build_with(text, config)?)
}

// ═══════════════════════════════════════════════════════════════════════════
// PARSE
// ═══════════════════════════════════════════════════════════════════════════

fn run_parse(args: &ParseArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let mut config = load_config(&args.index)?;
    if let Some(scope) = args.scope {
        config.scope = scope.into();
    }

    // Validate the range before building anything.
    let query = requested_range(args.start, args.len, args.one_based, text.len())?;
    if text.is_empty() {
        return Err(Error::EmptyInput.into());
    }
    query.resolve(text.len())?;

    let build_started = Instant::now();
    let suffixes = build_index(&text, &config)?;
    let repeats = ClosedRepeatIndex::build(&suffixes);
    if config.check_contracts {
        verify::validate_repeats(&text, &repeats)?;
    }
    let build_time = build_started.elapsed();

    let parse_started = Instant::now();
    let parser = RightmostParser::new(&repeats, &text)?.with_scope(config.scope);
    let parse = parser.parse(query.start, query.len)?;
    let parse_time = parse_started.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parse)?);
    } else {
        print_parse(&parse);
    }

    if args.stats {
        display::section_top("INDEX");
        display::stat_row("text length", &text.len().to_string());
        display::stat_row("right closed repeats", &repeats.repeat_count().to_string());
        display::stat_row("algorithm", &format!("{:?}", config.algorithm));
        display::stat_row("build time", &display::timing(build_time));
        display::section_mid("PARSE");
        display::stat_row("range", &format!("[{}, {})", parse.start(), parse.end()));
        display::stat_row("scope", &format!("{:?}", parse.scope()));
        display::stat_row("phrases", &parse.len().to_string());
        display::stat_row("literals", &parse.literal_count().to_string());
        display::stat_row("copies", &parse.copy_count().to_string());
        display::stat_row("parse time", &display::timing(parse_time));
        display::section_bot();
    }

    Ok(())
}

/// Range from signed user input. A missing `len` runs to the end of the text.
fn requested_range(
    start: i64,
    len: Option<i64>,
    one_based: bool,
    text_len: usize,
) -> Result<QueryRange, Error> {
    let start = if one_based {
        start
            .checked_sub(1)
            .ok_or(RangeError::NegativeStart(start))?
    } else {
        start
    };
    let len = len.unwrap_or_else(|| (text_len as i64).saturating_sub(start).max(0));
    QueryRange::from_signed(start, len)
}

fn print_parse(parse: &Parse<char>) {
    println!("{}", themed(display::CYAN, &[BOLD], "Rightmost LZ77 parsing:"));
    for phrase in parse {
        println!("{}", display::phrase_line(phrase));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(args: &InspectArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let config = load_config(&args.index)?;
    let suffixes = build_index(&text, &config)?;
    let repeats = ClosedRepeatIndex::build(&suffixes);

    display::section_top("SUFFIX ARRAY");
    display::row(&format!(
        " {} {} {}  suffix",
        display::pad_left("row", 8),
        display::pad_left("sa", 8),
        display::pad_left("lcp", 6)
    ));
    for row in 0..suffixes.len().min(args.limit) {
        display::row(&format!(
            " {} {} {}  {}",
            display::pad_left(&row.to_string(), 8),
            display::pad_left(&suffixes.position_at(row).to_string(), 8),
            display::pad_left(&suffixes.lcp()[row].to_string(), 6),
            display::preview(suffixes.suffix(&text, row), 48)
        ));
    }
    if suffixes.len() > args.limit {
        display::row(&format!(" … {} more rows", suffixes.len() - args.limit));
    }

    display::section_mid(&format!("RIGHT CLOSED REPEATS ({})", repeats.repeat_count()));
    let mut all: Vec<_> = repeats.repeats().collect();
    all.sort_by(|a, b| b.length().cmp(&a.length()).then(a.rows().start.cmp(&b.rows().start)));
    for repeat in all.iter().take(args.limit) {
        let positions = repeat.sorted_positions(&suffixes);
        let first = positions.first().copied().unwrap_or(0);
        let shown: Vec<String> = positions.iter().take(8).map(|p| p.to_string()).collect();
        let more = if positions.len() > 8 { ", …" } else { "" };
        display::row(&format!(
            " L={} ×{}  '{}'  at {}{}",
            repeat.length(),
            repeat.occurrences(),
            display::preview(&text[first..first + repeat.length()], 24),
            shown.join(", "),
            more
        ));
    }
    if all.len() > args.limit {
        display::row(&format!(" … {} more repeats", all.len() - args.limit));
    }

    if args.verify {
        display::section_mid("VERIFY");
        let arrays = verify::validate_suffix_index(&text, &suffixes);
        let closed = verify::validate_repeats(&text, &repeats);
        display::row(&format!(" {} suffix array, rank, lcp", display::check(arrays.is_ok())));
        display::row(&format!(" {} right closed repeats", display::check(closed.is_ok())));
        display::section_bot();
        arrays?;
        closed?;
    } else {
        display::section_bot();
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PROMPT
// ═══════════════════════════════════════════════════════════════════════════

fn run_prompt() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ask = |prompt: &str| -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let line = lines.next().context("Unexpected end of input")??;
        Ok(strip_newline(&line).to_string())
    };

    let text: Vec<char> = ask("Enter the string: ")?.chars().collect();
    println!("Enter the query substring indices (i and length ell):");
    let i: i64 = ask("i = ")?.trim().parse().context("i must be an integer")?;
    let ell: i64 = ask("ell = ")?.trim().parse().context("ell must be an integer")?;

    let query = requested_range(i, Some(ell), true, text.len()).context("Invalid indices")?;
    if text.is_empty() {
        return Err(Error::EmptyInput.into());
    }
    query.resolve(text.len()).context("Invalid indices")?;

    let config = IndexConfig::default();
    let suffixes = build_index(&text, &config)?;
    let repeats = ClosedRepeatIndex::build(&suffixes);
    let parser = RightmostParser::new(&repeats, &text)?.with_scope(config.scope);
    print_parse(&parser.parse(query.start, query.len)?);
    Ok(())
}
