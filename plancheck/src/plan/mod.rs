// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Normalized plan tree representation
//!
//! Every explain schema is parsed into the same version-independent tree of
//! [`Operator`]s owned by a [`Plan`]. Operator kinds are a closed enumeration
//! produced by [`op_type::classify`].

pub mod op_type;
pub mod operator;
pub mod version;

pub use op_type::{classify, JoinType, OpKind, TaskType};
pub use operator::{Operator, OperatorDetail, Plan};
pub use version::PlanVersion;
