//! Download portraits of all current House members listed in the roster.
//!
//! Usage: `cargo run --bin fetch-portraits -- [--roster legislators-current.yaml]`

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::Parser;
use tinycongress_scrapers::{
    config::Config,
    congress::{HttpPortraitClient, PortraitSource},
    portraits::{collect_metadata, run_batch, PortraitStore, PortraitTarget},
    roster::{current_representatives, load_roster},
    telemetry::init_tracing,
};

#[derive(Debug, Parser)]
#[command(
    name = "fetch-portraits",
    about = "Download portraits and metadata for every current representative in the roster"
)]
struct Args {
    /// Alternate config file; must exist (default: optional config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster YAML (default: legislators-current.yaml)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Directory to write portraits and metadata to
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
    .and_then(|config| config.with_overrides(args.roster, args.output_dir))
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    init_tracing(&config.logging);

    // Roster first: a bad roster must not leave an output directory behind
    println!("Loading {}...", config.roster.path.display());
    let legislators = load_roster(&config.roster.path).inspect_err(|err| {
        tracing::error!(error = %err, "cannot continue without a roster");
    })?;

    let reps = current_representatives(&legislators);
    println!("Found {} current Representatives", reps.len());

    let targets: Vec<PortraitTarget> = reps
        .iter()
        .map(|rep| {
            let term = rep.current_term();
            let party = term.and_then(|t| t.party.as_deref()).unwrap_or("?");
            let state = term.and_then(|t| t.state.as_deref()).unwrap_or("?");
            let name = rep.display_name();
            let label = format!("{name} ({party}-{state})");
            PortraitTarget::new(rep.bioguide_id().unwrap_or_default(), name).with_label(label)
        })
        .collect();

    let source = PortraitSource::united_states(&config.sources.unitedstates_base_url);
    let client = HttpPortraitClient::new(&config.http.user_agent, config.http.timeout())?;
    let store = PortraitStore::open(&config.output.dir)?;

    let report = run_batch(&client, &store, &source, &targets, |target, result| {
        match result {
            Ok(_) => println!("Downloading {}... ✓", target.label),
            Err(err) => println!("Downloading {}... ✗ Failed: {err}", target.label),
        }
    })
    .await;

    // Every filtered representative gets a row, downloaded or not
    let metadata = collect_metadata(&reps);

    println!("\n{}", "=".repeat(60));
    println!("Downloaded: {}/{} portraits", report.succeeded, reps.len());

    if !report.all_succeeded() {
        println!("\nFailed ({}):", report.failed());
        for failure in &report.failures {
            println!(
                "  - {} ({}): {}",
                failure.name, failure.bioguide_id, failure.error
            );
        }
    }

    let metadata_path = store.write_metadata(&config.output.metadata_file, &metadata)?;
    tracing::info!(path = %metadata_path.display(), records = metadata.len(), "metadata written");
    println!("\nMetadata saved to {}", metadata_path.display());

    Ok(())
}
