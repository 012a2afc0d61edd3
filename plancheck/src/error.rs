// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for explain parsing and plan checking

use thiserror::Error;

/// Errors raised while reading, parsing or checking plans
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Malformed explain output: {0}")]
    MalformedExplainOutput(String),

    #[error("Invalid row count '{value}' for operator {id}")]
    InvalidRowCount { id: String, value: String },

    #[error("Unknown operator kind: {0}")]
    UnknownOperatorKind(String),

    #[error("Cannot find inner side of join {0}")]
    MissingInnerJoinAnnotation(String),

    #[error("Unsupported engine version: {0}")]
    UnsupportedVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Create a malformed explain output error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedExplainOutput(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error comes from the explain text itself rather than
    /// from the environment (files, configuration)
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedExplainOutput(_)
                | Self::InvalidRowCount { .. }
                | Self::UnknownOperatorKind(_)
                | Self::MissingInnerJoinAnnotation(_)
        )
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Config(err.to_string())
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
