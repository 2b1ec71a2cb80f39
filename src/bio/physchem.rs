//! Global physicochemical descriptors.
//!
//! One extraction pass produces the six named properties plus the 20
//! per-residue counts, under the exact feature names the trained schema
//! uses. All values are finite for any validated peptide.

use super::scales::{
    AVERAGE_MASS, FLEXIBILITY, FLEX_NORM, FLEX_WEIGHTS, FLEX_WINDOW, INSTABILITY, KYTE_DOOLITTLE,
    PKA_C, PKA_CTERM, PKA_D, PKA_E, PKA_H, PKA_K, PKA_NTERM, PKA_R, PKA_Y, WATER_MASS,
};
use super::sequence::{aa_index, Peptide, ALPHABET};
use indexmap::IndexMap;

/// Tolerance (pH units) for the isoelectric-point bisection.
const PI_TOLERANCE: f64 = 1e-3;

/// Extract the global physicochemical descriptor subset.
pub fn extract(peptide: &Peptide) -> IndexMap<String, f64> {
    let counts = peptide.counts();

    let mut features = IndexMap::new();
    features.insert("Molecular Weight".to_string(), molecular_weight(&counts));
    features.insert("Isoelectric Point".to_string(), isoelectric_point(&counts));
    features.insert("Aromaticity".to_string(), aromaticity(peptide, &counts));
    features.insert("GRAVY".to_string(), gravy(peptide));
    features.insert("Instability Index".to_string(), instability_index(peptide));
    features.insert("Flexibility Mean".to_string(), flexibility_mean(peptide));

    // Composition as raw counts, one key per canonical residue. Absent
    // residues emit 0 so the key set never varies with content.
    for (idx, &aa) in ALPHABET.iter().enumerate() {
        features.insert((aa as char).to_string(), counts[idx] as f64);
    }

    features
}

/// Sum of residue masses minus one water per peptide bond.
fn molecular_weight(counts: &[usize; 20]) -> f64 {
    let total: usize = counts.iter().sum();
    let residue_sum: f64 = counts
        .iter()
        .zip(AVERAGE_MASS.iter())
        .map(|(&n, &mass)| n as f64 * mass)
        .sum();
    residue_sum - (total.saturating_sub(1)) as f64 * WATER_MASS
}

/// Net charge at a given pH via Henderson-Hasselbalch summation over the
/// ionizable side chains plus both termini.
fn charge_at_ph(counts: &[usize; 20], ph: f64) -> f64 {
    let count = |aa: u8| counts[aa_index(aa).unwrap_or(0)] as f64;

    let positive = [
        (1.0, PKA_NTERM),
        (count(b'K'), PKA_K),
        (count(b'R'), PKA_R),
        (count(b'H'), PKA_H),
    ];
    let negative = [
        (1.0, PKA_CTERM),
        (count(b'D'), PKA_D),
        (count(b'E'), PKA_E),
        (count(b'C'), PKA_C),
        (count(b'Y'), PKA_Y),
    ];

    let pos: f64 = positive
        .iter()
        .map(|&(n, pka)| n / (1.0 + 10f64.powf(ph - pka)))
        .sum();
    let neg: f64 = negative
        .iter()
        .map(|&(n, pka)| n / (1.0 + 10f64.powf(pka - ph)))
        .sum();

    pos - neg
}

/// pH of zero net charge, found by bisection over [0, 14].
///
/// Net charge is monotonically decreasing in pH, so plain bisection
/// converges; there is no closed form.
fn isoelectric_point(counts: &[usize; 20]) -> f64 {
    let mut lo = 0.0f64;
    let mut hi = 14.0f64;
    while hi - lo > PI_TOLERANCE {
        let mid = (lo + hi) / 2.0;
        if charge_at_ph(counts, mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

/// Fraction of aromatic residues (F, W, Y).
fn aromaticity(peptide: &Peptide, counts: &[usize; 20]) -> f64 {
    let aromatic = counts[aa_index(b'F').unwrap_or(0)]
        + counts[aa_index(b'W').unwrap_or(0)]
        + counts[aa_index(b'Y').unwrap_or(0)];
    aromatic as f64 / peptide.len() as f64
}

/// Grand average of hydropathy: mean Kyte-Doolittle value.
fn gravy(peptide: &Peptide) -> f64 {
    let sum: f64 = peptide
        .residues()
        .iter()
        .filter_map(|&aa| aa_index(aa))
        .map(|idx| KYTE_DOOLITTLE[idx])
        .sum();
    sum / peptide.len() as f64
}

/// Guruprasad instability index: length-normalized sum of dipeptide weights.
fn instability_index(peptide: &Peptide) -> f64 {
    let sum: f64 = peptide
        .residues()
        .windows(2)
        .filter_map(|pair| Some((aa_index(pair[0])?, aa_index(pair[1])?)))
        .map(|(i, j)| INSTABILITY[i][j])
        .sum();
    10.0 / peptide.len() as f64 * sum
}

/// Mean of the Vihinen sliding-window flexibility profile.
///
/// Window scores pair residues symmetrically from the ends inward with
/// [`FLEX_WEIGHTS`], weight the centre residue at 1.0 and normalize by
/// [`FLEX_NORM`]. Windows run over `0..len - FLEX_WINDOW`, matching the
/// profile the training descriptors were computed with. The validator's
/// minimum length guarantees at least one window.
fn flexibility_mean(peptide: &Peptide) -> f64 {
    let residues = peptide.residues();
    let flex = |aa: u8| FLEXIBILITY[aa_index(aa).unwrap_or(0)];

    let mut scores = Vec::with_capacity(residues.len() - FLEX_WINDOW);
    for window in residues.windows(FLEX_WINDOW).take(residues.len() - FLEX_WINDOW) {
        let mut score = 0.0;
        for (j, &weight) in FLEX_WEIGHTS.iter().enumerate() {
            score += (flex(window[j]) + flex(window[FLEX_WINDOW - 1 - j])) * weight;
        }
        score += flex(window[FLEX_WINDOW / 2]);
        scores.push(score / FLEX_NORM);
    }

    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn poly_a() -> Peptide {
        Peptide::parse("AAAAAAAAAA").unwrap()
    }

    #[test]
    fn test_feature_set_is_fixed() {
        let features = extract(&Peptide::parse("KKLLDERVAKL").unwrap());
        assert_eq!(features.len(), 26);
        assert!(features.contains_key("Molecular Weight"));
        assert!(features.contains_key("W"));
        // Absent residues still emit a key.
        assert_eq!(features["W"], 0.0);
        assert!(features.values().all(|v| v.is_finite()));
    }

    #[test]
    fn test_molecular_weight_dipeptide_convention() {
        // n residues lose n-1 waters: AA = 2 * 89.0932 - 18.0153.
        let counts = {
            let mut c = [0usize; 20];
            c[0] = 2;
            c
        };
        assert!((molecular_weight(&counts) - 160.1711).abs() < 1e-4);
    }

    #[test]
    fn test_gravy_poly_a() {
        assert!((gravy(&poly_a()) - 1.8).abs() < TOL);
    }

    #[test]
    fn test_aromaticity() {
        let pep = Peptide::parse("FWYFWYFWYA").unwrap();
        let features = extract(&pep);
        assert!((features["Aromaticity"] - 0.9).abs() < TOL);
        assert!((extract(&poly_a())["Aromaticity"]).abs() < TOL);
    }

    #[test]
    fn test_instability_poly_a() {
        // Nine A-A pairs at weight 1.0, normalized by 10/10.
        assert!((instability_index(&poly_a()) - 9.0).abs() < TOL);
    }

    #[test]
    fn test_flexibility_poly_a() {
        // Single window of identical residues: 0.984 * 5.34 / 5.25.
        let expected = 0.984 * (2.0 * (0.31 + 0.31 + 0.65 + 0.90) + 1.0) / 5.25;
        assert!((flexibility_mean(&poly_a()) - expected).abs() < TOL);
    }

    #[test]
    fn test_isoelectric_point_neutral_peptide() {
        // No ionizable side chains: pI is the midpoint of the terminal pKas.
        let pi = extract(&poly_a())["Isoelectric Point"];
        assert!((pi - (7.5 + 3.55) / 2.0).abs() < 2e-3, "pI = {}", pi);
    }

    #[test]
    fn test_isoelectric_point_shifts_with_charge() {
        let basic = extract(&Peptide::parse("KKKKKKKKKK").unwrap())["Isoelectric Point"];
        let acidic = extract(&Peptide::parse("DDDDDDDDDD").unwrap())["Isoelectric Point"];
        assert!(basic > 9.0, "poly-K pI = {}", basic);
        assert!(acidic < 4.0, "poly-D pI = {}", acidic);
    }

    #[test]
    fn test_composition_counts_sum_to_length() {
        let pep = Peptide::parse("KKLLDERVAKL").unwrap();
        let features = extract(&pep);
        let total: f64 = ALPHABET
            .iter()
            .map(|&aa| features[&(aa as char).to_string()])
            .sum();
        assert!((total - pep.len() as f64).abs() < TOL);
    }
}
