//! End-to-end pipeline tests: artifact on disk -> load -> validate ->
//! extract -> reconcile -> predict.

use aipid::{predict_batch, predict_sequence, AipidError, ForestModel, ValidationError};
use pretty_assertions::assert_eq;
use std::io::Write;

/// Model artifact over real descriptor names, including one schema name no
/// extractor produces ("Net Charge") to exercise the zero-padding path.
fn artifact_json() -> String {
    serde_json::json!({
        "feature_names": ["GRAVY", "_ChargeC1", "Molecular Weight", "Net Charge"],
        "trees": [
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [0.0, 0.0, 0.0],
                "value": [[0.0, 0.0], [2.0, 8.0], [8.0, 2.0]]
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [1, -2, -2],
                "threshold": [0.2, 0.0, 0.0],
                "value": [[0.0, 0.0], [6.0, 4.0], [3.0, 7.0]]
            }
        ]
    })
    .to_string()
}

fn load_model() -> ForestModel {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(artifact_json().as_bytes()).unwrap();
    ForestModel::from_path(file.path()).unwrap()
}

#[test]
fn test_valid_sequence_predicts() {
    let model = load_model();
    let prediction = predict_sequence("KKLLDERVAKL", &model).unwrap();
    assert!(prediction.label <= 1);
    assert!(prediction.confidence >= 0.5 && prediction.confidence <= 1.0);
}

#[test]
fn test_minimum_length_boundary() {
    let model = load_model();
    assert!(predict_sequence("KKLLDERVAK", &model).is_ok());

    match predict_sequence("KKLLDERVA", &model) {
        Err(AipidError::Validation(ValidationError::TooShort { length })) => {
            assert_eq!(length, 9);
        }
        other => panic!("expected TooShort, got {:?}", other.map(|p| p.label)),
    }
}

#[test]
fn test_invalid_residue_names_offender() {
    let model = load_model();
    match predict_sequence("KKXLDERVAKL", &model) {
        Err(AipidError::Validation(ValidationError::InvalidResidue { residues })) => {
            assert_eq!(residues, "X");
        }
        other => panic!("expected InvalidResidue, got {:?}", other.map(|p| p.label)),
    }
}

#[test]
fn test_empty_input() {
    let model = load_model();
    assert!(matches!(
        predict_sequence("   ", &model),
        Err(AipidError::Validation(ValidationError::Empty))
    ));
}

#[test]
fn test_prediction_is_deterministic() {
    let model = load_model();
    let a = predict_sequence("KKLLDERVAKL", &model).unwrap();
    let b = predict_sequence("KKLLDERVAKL", &model).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_schema_drift_is_tolerated() {
    // "Net Charge" is in the schema but never produced; it reconciles to 0
    // and prediction still succeeds.
    let model = load_model();
    assert!(predict_sequence("KKLLDERVAKL", &model).is_ok());
}

#[test]
fn test_known_row_routing() {
    // Poly-K: GRAVY = -3.9 (left on tree 0 -> [0.2, 0.8]) and _ChargeC1 = 1.0
    // (right on tree 1 -> [0.3, 0.7]); mean p1 = 0.75.
    let model = load_model();
    let prediction = predict_sequence("KKKKKKKKKK", &model).unwrap();
    assert_eq!(prediction.label, 1);
    assert!((prediction.confidence - 0.75).abs() < 1e-9);
}

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    let model = load_model();
    let sequences: Vec<String> = ["KKLLDERVAKL", "KKXLDERVAKL", "KKKKKKKKKK", "KKLLDERVA"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = predict_batch(&sequences, &model);

    // One result per input, paired back in input order.
    assert_eq!(results.len(), sequences.len());
    for ((seq, _), input) in results.iter().zip(&sequences) {
        assert_eq!(seq, input);
    }

    // The bad lines fail alone; their neighbours still predict.
    assert!(results[0].1.is_ok());
    assert!(matches!(
        results[1].1,
        Err(AipidError::Validation(ValidationError::InvalidResidue { .. }))
    ));
    assert!(results[2].1.is_ok());
    assert!(matches!(
        results[3].1,
        Err(AipidError::Validation(ValidationError::TooShort { .. }))
    ));

    // Batch entries match what single-sequence prediction returns.
    assert_eq!(
        results[2].1.as_ref().unwrap(),
        &predict_sequence("KKKKKKKKKK", &model).unwrap()
    );
}

#[test]
fn test_batch_of_only_failures_yields_all_errors() {
    let model = load_model();
    let sequences: Vec<String> = vec!["SHORT".to_string(), "KK1LDERVAKL".to_string()];
    let results = predict_batch(&sequences, &model);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|(_, r)| r.is_err()));
}

#[test]
fn test_malformed_artifact_rejected_at_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"feature_names": [], "trees": []}"#)
        .unwrap();
    assert!(matches!(
        ForestModel::from_path(file.path()),
        Err(AipidError::Model(_))
    ));
}

#[test]
fn test_unreadable_artifact_is_model_error() {
    assert!(matches!(
        ForestModel::from_path("/nonexistent/aipid_model.json"),
        Err(AipidError::Model(_))
    ));
}
