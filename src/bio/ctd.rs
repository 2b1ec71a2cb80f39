//! Composition/Transition/Distribution (CTD) descriptors.
//!
//! Every residue is mapped to one of three classes per Dubchak attribute
//! (see [`CTD_ATTRIBUTES`](super::scales::CTD_ATTRIBUTES)); composition,
//! transition and distribution statistics are then emitted under the exact
//! key names the trained schema uses. The key set has fixed cardinality
//! (7 attributes x 21 keys = 147) regardless of sequence content: classes
//! that never occur emit 0 for their distribution slots.
//!
//! Values are rounded to 3 decimals, matching the descriptor convention the
//! classifier was fit on.

use super::scales::{CtdAttribute, CTD_ATTRIBUTES};
use super::sequence::Peptide;
use indexmap::IndexMap;

/// Distribution percentile tags, in emission order.
const DISTRIBUTION_TAGS: [(&str, f64); 5] = [
    ("001", 0.0),
    ("025", 0.25),
    ("050", 0.50),
    ("075", 0.75),
    ("100", 1.0),
];

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Extract the full CTD descriptor subset.
pub fn extract(peptide: &Peptide) -> IndexMap<String, f64> {
    let mut features = IndexMap::new();
    for attr in &CTD_ATTRIBUTES {
        let classes = classify(peptide, attr);
        composition(attr, &classes, &mut features);
        transition(attr, &classes, &mut features);
        distribution(attr, &classes, &mut features);
    }
    features
}

/// Map each residue to its class index (0-2) for one attribute.
fn classify(peptide: &Peptide, attr: &CtdAttribute) -> Vec<u8> {
    peptide
        .residues()
        .iter()
        .map(|&aa| {
            attr.classes
                .iter()
                .position(|class| class.contains(&aa))
                .unwrap_or(0) as u8
        })
        .collect()
}

/// Per-class residue fractions: keys `<attr>C1..C3`.
fn composition(attr: &CtdAttribute, classes: &[u8], out: &mut IndexMap<String, f64>) {
    let len = classes.len() as f64;
    for k in 0..3u8 {
        let count = classes.iter().filter(|&&c| c == k).count();
        out.insert(
            format!("{}C{}", attr.name, k + 1),
            round3(count as f64 / len),
        );
    }
}

/// Class-pair transition frequencies: keys `<attr>T12, T13, T23`.
/// Each counts adjacent pairs crossing the class pair in either direction,
/// normalized by the number of adjacent pairs.
fn transition(attr: &CtdAttribute, classes: &[u8], out: &mut IndexMap<String, f64>) {
    let pairs = (classes.len() - 1) as f64;
    for &(a, b) in &[(0u8, 1u8), (0, 2), (1, 2)] {
        let count = classes
            .windows(2)
            .filter(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
            .count();
        out.insert(
            format!("{}T{}{}", attr.name, a + 1, b + 1),
            round3(count as f64 / pairs),
        );
    }
}

/// Positional distribution of each class: keys `<attr>D<k>001..100`.
///
/// For each class the five slots report the relative position (percent of
/// sequence length, 1-based) of the first occurrence, the 25th/50th/75th
/// percentile occurrence, and the last occurrence. A class with no
/// occurrences emits 0 for all five slots.
///
/// Percentile occurrences index `positions[floor(num * f) - 1]`; when that
/// underflows (fewer than four occurrences) it wraps to the last occurrence,
/// reproducing the reference descriptor library the model was trained on.
fn distribution(attr: &CtdAttribute, classes: &[u8], out: &mut IndexMap<String, f64>) {
    let len = classes.len() as f64;
    for k in 0..3u8 {
        let positions: Vec<usize> = classes
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == k)
            .map(|(i, _)| i + 1)
            .collect();
        let num = positions.len();

        for &(tag, frac) in &DISTRIBUTION_TAGS {
            let key = format!("{}D{}{}", attr.name, k + 1, tag);
            if num == 0 {
                out.insert(key, 0.0);
                continue;
            }
            let position = match tag {
                "001" => positions[0],
                "100" => positions[num - 1],
                _ => {
                    let idx = (num as f64 * frac).floor() as isize - 1;
                    if idx < 0 {
                        positions[num - 1]
                    } else {
                        positions[idx as usize]
                    }
                }
            };
            out.insert(key, round3(position as f64 / len * 100.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 2e-3;

    #[test]
    fn test_fixed_cardinality() {
        for seq in ["KKLLDERVAKL", "AAAAAAAAAA", "KKKKKKKKKK"] {
            let features = extract(&Peptide::parse(seq).unwrap());
            assert_eq!(features.len(), 147, "cardinality for {}", seq);
            assert!(features.values().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_composition_sums_to_one_per_attribute() {
        let features = extract(&Peptide::parse("KKLLDERVAKL").unwrap());
        for attr in &CTD_ATTRIBUTES {
            let sum: f64 = (1..=3)
                .map(|k| features[&format!("{}C{}", attr.name, k)])
                .sum();
            assert!((sum - 1.0).abs() < TOL, "{} sums to {}", attr.name, sum);
        }
    }

    #[test]
    fn test_single_class_sequence() {
        // Poly-K is all charge class 1: full composition, no transitions.
        let features = extract(&Peptide::parse("KKKKKKKKKK").unwrap());
        assert!((features["_ChargeC1"] - 1.0).abs() < TOL);
        assert!(features["_ChargeC2"].abs() < TOL);
        assert!(features["_ChargeC3"].abs() < TOL);
        assert!(features["_ChargeT12"].abs() < TOL);
        assert!(features["_ChargeT13"].abs() < TOL);
        assert!(features["_ChargeT23"].abs() < TOL);
    }

    #[test]
    fn test_distribution_of_full_class() {
        // Poly-K, charge class 1 occupies positions 1..10 of length 10.
        let features = extract(&Peptide::parse("KKKKKKKKKK").unwrap());
        assert!((features["_ChargeD1001"] - 10.0).abs() < TOL);
        assert!((features["_ChargeD1025"] - 20.0).abs() < TOL);
        assert!((features["_ChargeD1050"] - 50.0).abs() < TOL);
        assert!((features["_ChargeD1075"] - 70.0).abs() < TOL);
        assert!((features["_ChargeD1100"] - 100.0).abs() < TOL);
    }

    #[test]
    fn test_absent_class_emits_zero_sentinels() {
        // Poly-K has no negative (class 3) residues.
        let features = extract(&Peptide::parse("KKKKKKKKKK").unwrap());
        for tag in ["001", "025", "050", "075", "100"] {
            assert_eq!(features[&format!("_ChargeD3{}", tag)], 0.0);
        }
    }

    #[test]
    fn test_transition_counts_both_directions() {
        // KDKDKDKDKD alternates charge classes 1 and 3: all 9 pairs cross 1-3.
        let features = extract(&Peptide::parse("KDKDKDKDKD").unwrap());
        assert!((features["_ChargeT13"] - 1.0).abs() < TOL);
        assert!(features["_ChargeT12"].abs() < TOL);
    }

    #[test]
    fn test_sparse_class_percentiles_wrap_to_last() {
        // KKKKKKKKKD: charge class 3 occurs once, at position 10.
        // All five distribution slots report that single occurrence.
        let features = extract(&Peptide::parse("KKKKKKKKKD").unwrap());
        for tag in ["001", "025", "050", "075", "100"] {
            assert!(
                (features[&format!("_ChargeD3{}", tag)] - 100.0).abs() < TOL,
                "tag {}",
                tag
            );
        }
    }

    #[test]
    fn test_values_rounded_to_three_decimals() {
        let features = extract(&Peptide::parse("KKLLDERVAKL").unwrap());
        for (key, value) in &features {
            let rounded = (value * 1000.0).round() / 1000.0;
            assert!((value - rounded).abs() < 1e-12, "{} = {}", key, value);
        }
    }
}
