//! Per-residue property tables and CTD class groupings.
//!
//! All tables are versioned constants bundled with the crate, indexed by
//! [`aa_index`](super::sequence::aa_index) order `ACDEFGHIKLMNPQRSTVWY`.
//! Values follow the ProtParam data set the classifier was trained against:
//! average residue masses, Kyte-Doolittle hydropathy (1982), Vihinen
//! flexibility (1994), Guruprasad dipeptide instability weights (1990), and
//! the Dubchak attribute groupings used by the CTD descriptors.

/// Average (isotope-weighted) free amino-acid masses in Da.
pub const AVERAGE_MASS: [f64; 20] = [
    89.0932,  // A
    121.1582, // C
    133.1027, // D
    147.1293, // E
    165.1891, // F
    75.0666,  // G
    155.1546, // H
    131.1729, // I
    146.1882, // K
    131.1729, // L
    149.2124, // M
    132.1184, // N
    115.1305, // P
    146.1451, // Q
    174.2017, // R
    105.0926, // S
    119.1197, // T
    117.1463, // V
    204.2252, // W
    181.1885, // Y
];

/// Mass of one water molecule, released per peptide bond.
pub const WATER_MASS: f64 = 18.0153;

/// Kyte-Doolittle hydropathy values. Positive = hydrophobic.
pub const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

/// Vihinen normalized flexibility values (B-factor derived).
pub const FLEXIBILITY: [f64; 20] = [
    0.984, // A
    0.906, // C
    1.068, // D
    1.094, // E
    0.915, // F
    1.031, // G
    0.950, // H
    0.927, // I
    1.102, // K
    0.935, // L
    0.952, // M
    1.048, // N
    1.049, // P
    1.037, // Q
    1.008, // R
    1.046, // S
    0.997, // T
    0.931, // V
    0.904, // W
    0.929, // Y
];

/// Flexibility sliding-window length.
pub const FLEX_WINDOW: usize = 9;

/// End-weighted pair weights for the four symmetric window positions;
/// the centre residue carries weight 1.0 and the sum normalizer is 5.25.
pub const FLEX_WEIGHTS: [f64; 4] = [0.31, 0.31, 0.65, 0.90];
pub const FLEX_NORM: f64 = 5.25;

// pKa constants for the Henderson-Hasselbalch net-charge sum.
pub const PKA_NTERM: f64 = 7.5;
pub const PKA_K: f64 = 10.0;
pub const PKA_R: f64 = 12.0;
pub const PKA_H: f64 = 5.98;
pub const PKA_CTERM: f64 = 3.55;
pub const PKA_D: f64 = 4.05;
pub const PKA_E: f64 = 4.45;
pub const PKA_C: f64 = 9.0;
pub const PKA_Y: f64 = 10.0;

/// Guruprasad dipeptide instability weights.
/// `INSTABILITY[i][j]` scores the ordered pair (residue i, residue j).
#[rustfmt::skip]
pub const INSTABILITY: [[f64; 20]; 20] = [
    // A
    [1.0, 44.94, -7.49, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // C
    [1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 33.60, 1.0, 1.0, 20.26, 33.60, 1.0, 20.26, -6.54, 1.0, 1.0, 33.60, -6.54, 24.68, 1.0],
    // D
    [1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 20.26, -14.03, 1.0, 1.0, 1.0],
    // E
    [1.0, 44.94, 20.26, 33.60, 1.0, 1.0, -6.54, 20.26, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 20.26, 1.0, 1.0, -14.03, 1.0],
    // F
    [1.0, 1.0, 13.34, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 33.60],
    // G
    [-7.49, 1.0, 1.0, -6.54, 1.0, 13.34, 1.0, -7.49, -7.49, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 13.34, -7.49],
    // H
    [1.0, 1.0, 1.0, 1.0, -9.37, -9.37, 1.0, 44.94, 24.68, 1.0, 1.0, 24.68, -1.88, 1.0, 1.0, 1.0, -6.54, 1.0, -1.88, 44.94],
    // I
    [1.0, 1.0, 1.0, 44.94, 1.0, 1.0, 13.34, 1.0, -7.49, 20.26, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0],
    // K
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, -7.49, 1.0, -7.49, 33.60, 1.0, -6.54, 24.64, 33.60, 1.0, 1.0, -7.49, 1.0, 1.0],
    // L
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 20.26, 33.60, 20.26, 1.0, 1.0, 1.0, 24.68, 1.0],
    // M
    [13.34, 1.0, 1.0, 1.0, 1.0, 1.0, 58.28, 1.0, 1.0, 1.0, -1.88, 1.0, 44.94, -6.54, -6.54, 44.94, -1.88, 1.0, 1.0, 24.68],
    // N
    [1.0, -1.88, 1.0, 1.0, -14.03, -14.03, 1.0, 44.94, 24.68, 1.0, 1.0, 1.0, -1.88, -6.54, 1.0, 1.0, -7.49, 1.0, -9.37, 1.0],
    // P
    [20.26, -6.54, -6.54, 18.38, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 20.26, 20.26, -6.54, 20.26, 1.0, 20.26, -1.88, 1.0],
    // Q
    [1.0, -6.54, 20.26, 20.26, -6.54, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 44.94, 1.0, -6.54, 1.0, -6.54],
    // R
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 20.26, 1.0, 1.0, 1.0, 1.0, 13.34, 20.26, 20.26, 58.28, 44.94, 1.0, 1.0, 58.28, -6.54],
    // S
    [1.0, 33.60, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 44.94, 20.26, 20.26, 20.26, 1.0, 1.0, 1.0, 1.0],
    // T
    [1.0, 1.0, 1.0, 20.26, 13.34, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, -6.54, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0],
    // V
    [1.0, 1.0, -14.03, 1.0, 1.0, -7.49, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, -6.54],
    // W
    [-14.03, 1.0, 1.0, 1.0, 1.0, -9.37, 24.68, 1.0, 1.0, 13.34, 24.68, 13.34, 1.0, 1.0, 1.0, 1.0, -14.03, -7.49, 1.0, 1.0],
    // Y
    [24.68, 1.0, 24.68, -6.54, 1.0, -7.49, 13.34, 1.0, 1.0, 1.0, 44.94, 1.0, 13.34, 1.0, -15.91, 1.0, -7.49, 1.0, -9.37, 13.34],
];

/// One CTD attribute: a name plus the three residue classes partitioning
/// the 20-letter alphabet.
pub struct CtdAttribute {
    pub name: &'static str,
    pub classes: [&'static [u8]; 3],
}

/// The seven Dubchak attributes, with the class partitions and the exact
/// names the trained feature schema uses.
pub const CTD_ATTRIBUTES: [CtdAttribute; 7] = [
    CtdAttribute {
        name: "_Hydrophobicity",
        classes: [b"RKEDQN", b"GASTPHY", b"CLVIMFW"],
    },
    CtdAttribute {
        name: "_NormalizedVDWV",
        classes: [b"GASTPDC", b"NVEQIL", b"MHKFRYW"],
    },
    CtdAttribute {
        name: "_Polarity",
        classes: [b"LIFWCMVY", b"PATGS", b"HQRKNED"],
    },
    CtdAttribute {
        name: "_Charge",
        classes: [b"KR", b"ANCQGHILMFPSTWYV", b"DE"],
    },
    CtdAttribute {
        name: "_SecondaryStr",
        classes: [b"EALMQKRH", b"VIYCWFT", b"GNPSD"],
    },
    CtdAttribute {
        name: "_SolventAccessibility",
        classes: [b"ALFCGIVW", b"RKQEND", b"MSPTHY"],
    },
    CtdAttribute {
        name: "_Polarizability",
        classes: [b"GASDT", b"CPNVEQIL", b"KMHFRYW"],
    },
];
