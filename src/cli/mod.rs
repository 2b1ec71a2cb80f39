pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aipid",
    version,
    about = "Anti-inflammatory peptide identification",
    long_about = "AIPID classifies peptide sequences as anti-inflammatory or not, using a \
                  pre-trained random-forest model over physicochemical and \
                  composition/transition/distribution sequence descriptors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict anti-inflammatory potential for one or more sequences
    Predict(commands::predict::PredictArgs),

    /// Compute and display the descriptor vector for a sequence
    Features(commands::features::FeaturesArgs),
}
