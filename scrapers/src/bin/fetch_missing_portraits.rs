//! Recover portraits the unitedstates mirror is missing from the Bioguide.
//!
//! Usage: `cargo run --bin fetch-missing-portraits -- [--output-dir DIR]`

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tinycongress_scrapers::{
    config::Config,
    congress::{HttpPortraitClient, PortraitSource},
    missing::missing_targets,
    portraits::{run_batch, PortraitStore},
    telemetry::init_tracing,
};

#[derive(Debug, Parser)]
#[command(
    name = "fetch-missing-portraits",
    about = "Download portraits for the embedded list of representatives from the Bioguide"
)]
struct Args {
    /// Alternate config file; must exist (default: optional config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write portraits to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_explicit(path),
        None => Config::load(),
    }
    .and_then(|config| config.with_overrides(None, args.output_dir))
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    init_tracing(&config.logging);

    let targets = missing_targets();
    let source = PortraitSource::bioguide(&config.sources.bioguide_base_url);
    let client = HttpPortraitClient::new(&config.http.user_agent, config.http.timeout())?;
    let store = PortraitStore::open(&config.output.dir)?;

    println!(
        "Attempting to download {} missing portraits from {}...\n",
        targets.len(),
        source.host()
    );

    let report = run_batch(&client, &store, &source, &targets, |target, result| {
        match result {
            Ok(_) => println!("Downloading {}... ✓", target.label),
            Err(err) => println!("Downloading {}... ✗ Failed: {err}", target.label),
        }
    })
    .await;

    println!("\n{}", "=".repeat(60));
    println!("Recovery complete.");
    println!(
        "Successfully downloaded: {}/{}",
        report.succeeded, report.attempted
    );

    if report.all_succeeded() {
        println!("\nAll targeted portraits recovered!");
    } else {
        println!("\nStill missing ({}):", report.failed());
        for failure in &report.failures {
            println!(
                "  - {} ({}): {}",
                failure.name, failure.bioguide_id, failure.error
            );
        }
    }

    let location = store
        .dir()
        .canonicalize()
        .with_context(|| format!("resolving {}", store.dir().display()))?;
    println!("\nImages are located in: {}", location.display());

    Ok(())
}
