// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! plancheck CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v/--verbose takes precedence over --log-level; RUST_LOG still applies
    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli.command {
        Commands::Version => {
            println!("{} {}", "plancheck".bold().green(), plancheck::VERSION);
            println!("Query plan change detection across engine versions");
            Ok(())
        }

        Commands::Check(args) => {
            let report = cli::handle_check(args)?;
            if report.has_differences() {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Explain {
            path,
            version,
            sql,
            schema,
            format,
        } => cli::handle_explain(path, version, sql, schema, format),
    }
}
