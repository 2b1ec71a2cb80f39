use crate::model::ForestModel;
use crate::{pipeline, AipidError, Prediction};
use clap::Args;
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct PredictArgs {
    /// Peptide sequence (single-letter codes, at least 10 residues)
    #[arg(value_name = "SEQUENCE", required_unless_present = "input")]
    pub sequence: Option<String>,

    /// File with one sequence per line (batch mode)
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequence")]
    pub input: Option<PathBuf>,

    /// Trained model artifact (JSON)
    #[arg(short, long, value_name = "FILE", env = "AIPID_MODEL")]
    pub model: PathBuf,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Serialize)]
struct PredictionRecord {
    sequence: String,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome {
    Ok { label: u8, confidence: f64 },
    Err { error: String },
}

pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    // Load once; the model is shared read-only for the rest of the process.
    let model = ForestModel::from_path(&args.model)?;
    info!(
        trees = model.tree_count(),
        features = model.feature_names().len(),
        "model loaded"
    );

    // Single-sequence mode propagates the error so the exit code reflects
    // the failure class; batch mode isolates per-line failures below.
    if let Some(seq) = &args.sequence {
        let prediction = pipeline::predict_sequence(seq, &model)?;
        let results = vec![(seq.clone(), Ok(prediction))];
        match args.format.as_str() {
            "json" => print_json(&results)?,
            _ => print_text(&results),
        }
        return Ok(());
    }

    let path = args.input.as_ref().expect("clap enforces sequence or --input");
    let sequences: Vec<String> = fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let results = pipeline::predict_batch(&sequences, &model);

    match args.format.as_str() {
        "json" => print_json(&results)?,
        _ => print_text(&results),
    }

    if results.iter().all(|(_, r)| r.is_err()) {
        anyhow::bail!("no sequence could be predicted");
    }
    Ok(())
}

fn print_text(results: &[(String, Result<Prediction, AipidError>)]) {
    for (sequence, result) in results {
        match result {
            Ok(prediction) if prediction.is_aip() => {
                println!(
                    "{}  {}  confidence {:.2}",
                    sequence,
                    "Anti-Inflammatory Peptide".green().bold(),
                    prediction.confidence
                );
            }
            Ok(prediction) => {
                println!(
                    "{}  {}  confidence {:.2}",
                    sequence,
                    "Non-Anti-Inflammatory Peptide".red().bold(),
                    prediction.confidence
                );
            }
            Err(AipidError::Validation(e)) => {
                println!("{}  {} {}", sequence, "invalid input:".yellow(), e);
            }
            Err(e) => {
                println!("{}  {} {}", sequence, "prediction failed:".red(), e);
            }
        }
    }
}

fn print_json(results: &[(String, Result<Prediction, AipidError>)]) -> anyhow::Result<()> {
    let records: Vec<PredictionRecord> = results
        .iter()
        .map(|(sequence, result)| PredictionRecord {
            sequence: sequence.clone(),
            outcome: match result {
                Ok(p) => Outcome::Ok {
                    label: p.label,
                    confidence: p.confidence,
                },
                Err(e) => Outcome::Err {
                    error: e.to_string(),
                },
            },
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
