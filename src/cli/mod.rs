// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates the work to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — download, clean and split the corpus
//   2. `clean`   — show what the cleaner does to some text
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use burn::data::dataset::Dataset;
use clap::Parser;
use commands::{CleanArgs, Commands, PrepareArgs};
use std::path::Path;

use crate::data::dataset::NewsDataset;
use crate::domain::example::sort_key;

#[derive(Parser, Debug)]
#[command(
    name = "newsgroups-data",
    version = "0.1.0",
    about = "Download, clean and split the 20 Newsgroups corpus for text classification."
)]
pub struct Cli {
    /// The subcommand to run (prepare or clean)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Clean(args)   => run_clean(args),
        }
    }
}

/// Handles the `prepare` subcommand and prints a per-split summary.
fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing corpus under '{}'", args.root);

    let use_case = PrepareUseCase::new(args.into());
    let splits   = use_case.execute()?;

    print_summary("train", &splits.train);
    print_summary("dev", &splits.dev);
    if let Some(test) = &splits.test {
        print_summary("test", test);
    }
    if let Some(dir) = &use_case.config().export_dir {
        println!("Exported to {dir}");
    }
    Ok(())
}

/// Handles the `clean` subcommand.
fn run_clean(args: CleanArgs) -> Result<()> {
    use crate::application::clean_use_case::CleanUseCase;

    let use_case = CleanUseCase::new(args.decode);

    // clap's ArgGroup guarantees exactly one of the two is set
    let cleaned = match (&args.text, &args.file) {
        (Some(text), _) => use_case.clean_text(text),
        (None, Some(file)) => use_case.clean_file(Path::new(file))?,
        (None, None) => anyhow::bail!("either --text or --file is required"),
    };

    println!("{cleaned}");
    Ok(())
}

fn print_summary(name: &str, dataset: &NewsDataset) {
    let tokens: usize = dataset.examples().iter().map(sort_key).sum();
    let mean          = tokens as f64 / dataset.len().max(1) as f64;
    let longest       = dataset.examples().iter().map(sort_key).max().unwrap_or(0);

    println!(
        "{name}: {} examples, {mean:.1} tokens on average, longest {longest} tokens",
        dataset.len()
    );
    for (category, count) in dataset.label_counts() {
        println!("  {category:<24} {count}");
    }
}
