// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Check configuration

use crate::error::{PlanError, PlanResult};
use crate::plan::PlanVersion;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a statement's plans cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the statement with both raw plans and continue
    #[default]
    SkipAndLog,
    /// Abort the whole check on the first failure
    Strict,
}

/// Settings applied to every case of a check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Engine version that produced the first plan of every case
    pub base_version: String,

    /// Engine version that produced the second plan of every case
    pub target_version: String,

    /// Treat single-child projections as transparent when comparing
    pub ignore_projection: bool,

    pub error_policy: ErrorPolicy,

    /// Check cases on the rayon thread pool
    pub parallel: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            base_version: PlanVersion::V3.to_string(),
            target_version: PlanVersion::V4.to_string(),
            ignore_projection: true,
            error_policy: ErrorPolicy::SkipAndLog,
            parallel: false,
        }
    }
}

impl CheckConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PlanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: CheckConfig = serde_json::from_str(&content)?;
        log::debug!("Loaded check configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Explain layouts of the base and target plans.
    ///
    /// Under [`ErrorPolicy::Strict`] an unrecognized version tag is an error;
    /// otherwise it falls back to the newest layout.
    pub fn resolve_versions(&self) -> PlanResult<(PlanVersion, PlanVersion)> {
        match self.error_policy {
            ErrorPolicy::Strict => Ok((self.base_version.parse()?, self.target_version.parse()?)),
            ErrorPolicy::SkipAndLog => Ok((
                PlanVersion::from_tag(&self.base_version),
                PlanVersion::from_tag(&self.target_version),
            )),
        }
    }
}
