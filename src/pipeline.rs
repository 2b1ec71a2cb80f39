//! End-to-end prediction pipeline.
//!
//! Validation short-circuits before any descriptor work; the two extractor
//! families are pure and independent, so they run on both sides of a
//! `rayon::join`. Each request is stateless: the only shared state is the
//! read-only model reference.

use crate::bio::{ctd, physchem, Peptide};
use crate::features;
use crate::model::{ForestModel, Prediction};
use crate::Result;
use indexmap::IndexMap;
use tracing::debug;

/// Classify a raw sequence string with a loaded model.
pub fn predict_sequence(raw: &str, model: &ForestModel) -> Result<Prediction> {
    let peptide = Peptide::parse(raw)?;
    debug!(length = peptide.len(), "validated peptide");

    let (global, ctd_features) =
        rayon::join(|| physchem::extract(&peptide), || ctd::extract(&peptide));

    let merged = features::merge(global, ctd_features);
    let row = features::reconcile(&merged, model.feature_names());
    let prediction = model.predict(&row)?;
    debug!(
        label = prediction.label,
        confidence = prediction.confidence,
        "prediction complete"
    );
    Ok(prediction)
}

/// Classify a batch of raw sequences in parallel.
///
/// Results come back paired with their input, in input order. Each line is
/// an independent request: a failing sequence yields an `Err` entry without
/// affecting its neighbours.
pub fn predict_batch(
    sequences: &[String],
    model: &ForestModel,
) -> Vec<(String, Result<Prediction>)> {
    use rayon::prelude::*;

    sequences
        .par_iter()
        .map(|seq| (seq.clone(), predict_sequence(seq, model)))
        .collect()
}

/// Compute the full merged descriptor vector for a raw sequence, without
/// touching a model. Backs descriptor inspection.
pub fn describe_sequence(raw: &str) -> Result<IndexMap<String, f64>> {
    let peptide = Peptide::parse(raw)?;
    let (global, ctd_features) =
        rayon::join(|| physchem::extract(&peptide), || ctd::extract(&peptide));
    Ok(features::merge(global, ctd_features))
}
