// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Corral.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Corral - classify and rank AI model catalogs
#[derive(Parser, Debug)]
#[command(name = "corral")]
#[command(version, about = "Classify and rank AI model catalogs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the classification HTTP service (default when no command given)
    Serve(ServeArgs),

    /// Classify a model list from a JSON file or stdin and print the result
    Classify(ClassifyArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind host (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides configuration)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Input JSON file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}
