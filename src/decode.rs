// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase sequences back to symbols.
//!
//! Copies are expanded one symbol at a time, so a copy may read symbols it has
//! just written (`distance < length` repeats a period of `distance`).

use crate::error::Error;
use crate::types::Phrase;
use crate::verify::InvariantError;

/// Decode a self-contained phrase sequence, such as a
/// [`SourceScope::Substring`](crate::SourceScope::Substring) parse.
pub fn decode<T: Copy>(phrases: &[Phrase<T>]) -> Result<Vec<T>, Error> {
    let mut out = Vec::with_capacity(phrases.iter().map(Phrase::len).sum());
    expand(&mut out, phrases)?;
    Ok(out)
}

/// Decode phrases that start at `text[start]` and may copy from anywhere in
/// `text[..start]`, as [`SourceScope::Text`](crate::SourceScope::Text) parses do.
///
/// Returns only the decoded range, not the prefix.
pub fn decode_in<T: Copy>(text: &[T], start: usize, phrases: &[Phrase<T>]) -> Result<Vec<T>, Error> {
    let history = &text[..start.min(text.len())];
    let mut out = Vec::with_capacity(history.len() + phrases.iter().map(Phrase::len).sum::<usize>());
    out.extend_from_slice(history);
    expand(&mut out, phrases)?;
    Ok(out.split_off(history.len()))
}

/// Append decoded phrases to `out`. Error positions are indices into `out`.
fn expand<T: Copy>(out: &mut Vec<T>, phrases: &[Phrase<T>]) -> Result<(), Error> {
    for phrase in phrases {
        match *phrase {
            Phrase::Literal(symbol) => out.push(symbol),
            Phrase::Copy { distance, length } => {
                let position = out.len();
                if length == 0 {
                    return Err(InvariantError::ZeroLengthCopy { position }.into());
                }
                let source = match position.checked_sub(distance) {
                    Some(source) if distance > 0 => source,
                    _ => return Err(InvariantError::DanglingCopy { position, distance }.into()),
                };
                for k in 0..length {
                    out.push(out[source + k]);
                }
            }
        }
    }
    Ok(())
}
