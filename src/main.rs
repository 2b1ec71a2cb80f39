use aipid::cli::{Cli, Commands};
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging honours the AIPID_LOG environment variable.
    let log_level = std::env::var("AIPID_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<aipid::AipidError>() {
            Some(aipid::AipidError::Validation(_)) => 2,
            Some(aipid::AipidError::Io(_)) => 3,
            Some(aipid::AipidError::Model(_)) | Some(aipid::AipidError::Serialization(_)) => 4,
            Some(aipid::AipidError::Inference(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let num_threads = if cli.threads == 0 {
        num_cpus::get()
    } else {
        cli.threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .expect("Failed to initialize thread pool");

    if cli.verbose > 0 {
        eprintln!("Using {} threads", num_threads);
    }

    match cli.command {
        Commands::Predict(args) => aipid::cli::commands::predict::run(args),
        Commands::Features(args) => aipid::cli::commands::features::run(args),
    }
}
