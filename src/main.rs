// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Corral - model catalog classification service
//!
//! Entry point for the Corral CLI application.

use std::io::Read;

use clap::Parser;

use corral::catalog::{available_properties, ClassifyRequest, ClassifyResponse};
use corral::cli::{Cli, ClassifyArgs, Commands, ServeArgs};
use corral::config::Settings;
use corral::engine::Categorizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables service diagnostics without
    // requiring users to know target names up front. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        for directive in ["corral=debug", "tower_http=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => run_serve(args, settings).await,
        Commands::Classify(args) => run_classify(args),
    }
}

/// Run the HTTP service, with CLI flags overriding the settings file
async fn run_serve(args: ServeArgs, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    corral::server::serve(&settings).await?;
    Ok(())
}

/// One-shot classification: JSON in, JSON out
fn run_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let payload = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request: ClassifyRequest = serde_json::from_str(&payload)?;
    let categorizer = Categorizer::new();
    let response = ClassifyResponse {
        classified_groups: Vec::new(),
        available_properties: available_properties(),
        error_message: String::new(),
        hierarchical_groups: categorizer.categorize(&request.models),
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(())
}
