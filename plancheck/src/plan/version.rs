// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Explain schema versions

use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Explain output layout, named after the engine release line that
/// introduced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanVersion {
    /// `id | count | task | operator info`
    V2,
    /// `id | estRows | task | access object | operator info`, joins
    /// annotated with `inner:` in operator info
    V3,
    /// `id | estRows | task | access object | operator info`, join sides
    /// annotated with `(Build)` / `(Probe)` and indexes printed as
    /// `name(columns)`
    V4,
}

impl PlanVersion {
    /// Resolve a declared engine version such as `v3.0.20` or `V4.0.9`.
    ///
    /// Tags that do not start with `v2`, `v3` or `v4` fall back to the newest
    /// layout. The fallback may hide a misconfigured version, so it is
    /// logged; use [`str::parse`] for strict resolution.
    pub fn from_tag(tag: &str) -> Self {
        match Self::from_prefix(tag) {
            Some(version) => version,
            None => {
                log::warn!(
                    "Unrecognized engine version {:?}, assuming the {} explain layout",
                    tag,
                    PlanVersion::V4
                );
                PlanVersion::V4
            }
        }
    }

    fn from_prefix(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        if tag.starts_with("v2") {
            Some(PlanVersion::V2)
        } else if tag.starts_with("v3") {
            Some(PlanVersion::V3)
        } else if tag.starts_with("v4") {
            Some(PlanVersion::V4)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanVersion::V2 => "v2",
            PlanVersion::V3 => "v3",
            PlanVersion::V4 => "v4",
        }
    }

    /// Number of columns every explain row carries in this layout
    pub fn column_count(self) -> usize {
        match self {
            PlanVersion::V2 => 4,
            PlanVersion::V3 | PlanVersion::V4 => 5,
        }
    }
}

impl FromStr for PlanVersion {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_prefix(s).ok_or_else(|| PlanError::UnsupportedVersion(s.to_string()))
    }
}

impl fmt::Display for PlanVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
