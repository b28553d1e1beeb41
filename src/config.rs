// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build and query configuration.
//!
//! Everything has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! { "algorithm": "prefixDoubling", "checkContracts": true, "scope": "substring" }
//! ```

use crate::types::SourceScope;
use serde::{Deserialize, Serialize};

/// Suffix array construction algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuffixAlgorithm {
    /// SA-IS, linear time.
    #[default]
    InducedSorting,
    /// Rank doubling with a comparison sort, O(n log² n).
    PrefixDoubling,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    pub algorithm: SuffixAlgorithm,
    /// Validate every built array, repeat and parse against the text.
    ///
    /// Brute force, quadratic on repetitive text. Off by default in every
    /// build; the `inspect --verify` command and the tests turn it on.
    pub check_contracts: bool,
    /// Default source scope for [`crate::RightmostParser::parse`].
    pub scope: SourceScope,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            algorithm: SuffixAlgorithm::default(),
            check_contracts: false,
            scope: SourceScope::default(),
        }
    }
}

impl IndexConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_algorithm(mut self, algorithm: SuffixAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_contracts(mut self, check_contracts: bool) -> Self {
        self.check_contracts = check_contracts;
        self
    }

    pub fn with_scope(mut self, scope: SourceScope) -> Self {
        self.scope = scope;
        self
    }
}
