// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! plancheck - Query plan change detection across database engine versions
//!
//! plancheck parses the textual `EXPLAIN` output produced by two versions of a
//! database engine and compares the resulting operator trees structurally.
//! Cosmetic drift between versions (renamed scan operators, `(Build)` and
//! `(Probe)` annotations, re-ordered join children, extra projection
//! wrappers) is tolerated; changes in plan shape, access paths and indexes
//! are reported.
//!
//! # Usage
//!
//! ```ignore
//! use plancheck::{compare, parse_text};
//!
//! let base = parse_text(sql, old_explain, "v3.0.20")?;
//! let target = parse_text(sql, new_explain, "v4.0.9")?;
//! let (reason, same) = compare(&base, &target, true);
//! if !same {
//!     println!("plan changed: {}", reason);
//! }
//! ```
//!
//! Batches of statements are checked with [`check::check_cases`], which
//! applies a [`check::CheckConfig`] to every case and collects a
//! [`check::CheckReport`].

pub mod check;
pub mod compare;
pub mod error;
pub mod explain;
pub mod parser;
pub mod plan;

pub use check::{
    check_cases, read_check_file, CaseReport, CheckCase, CheckConfig, CheckOutcome, CheckReport,
    ErrorPolicy,
};
pub use compare::compare;
pub use error::{PlanError, PlanResult};
pub use parser::{parse, parse_text};
pub use plan::{JoinType, OpKind, Operator, OperatorDetail, Plan, PlanVersion, TaskType};

/// plancheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// plancheck crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
