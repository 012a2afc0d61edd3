// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plancheck", version, about = "Detect query plan changes between engine versions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<log::Level>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the plan pairs of a check file
    Check(CheckArgs),

    /// Parse a single explain table and print the operator tree
    Explain {
        /// File holding one bordered explain table
        path: PathBuf,

        /// Engine version that produced the table
        #[arg(long, default_value = "v4")]
        version: String,

        /// Statement the table was produced for
        #[arg(long, default_value = "")]
        sql: String,

        /// Database the statement was explained in
        #[arg(long, default_value = "")]
        schema: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Check file: SQL lines each followed by the base and target explain tables
    pub path: PathBuf,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Engine version of the first plan of every pair
    #[arg(long)]
    pub base_version: Option<String>,

    /// Engine version of the second plan of every pair
    #[arg(long)]
    pub target_version: Option<String>,

    /// Abort on the first plan that cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Report projections that wrap otherwise identical plans
    #[arg(long)]
    pub no_ignore_projection: bool,

    /// Check pairs in parallel
    #[arg(long)]
    pub parallel: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
