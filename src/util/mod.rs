// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Supporting data structures that don't belong to any one stage.

pub mod range_pred;
