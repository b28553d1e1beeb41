// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: full invariant checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Invariant checks** (`validate_*`) that return an [`InvariantError`].
//!    Index construction runs them when contract checking is configured on and
//!    turns a failure into `Error::InternalConsistency`, so a broken index never
//!    produces a parse.
//!
//! 2. **Runtime contracts** that panic in debug builds when a single step
//!    produces something malformed. Zero-cost in release, but catch bugs where
//!    they happen while tests run.

mod invariants;
pub mod contracts;

pub use invariants::*;
