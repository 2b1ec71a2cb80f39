use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum accepted peptide length. Below this the windowed descriptors
/// (flexibility, CTD distribution) are unreliable.
pub const MIN_LENGTH: usize = 10;

/// The 20 canonical amino acids, in `aa_index` order.
pub const ALPHABET: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Map an uppercase amino-acid byte to its index 0-19.
/// Returns None for everything else, including ambiguity codes (B, J, O, U, X, Z).
pub fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty sequence")]
    Empty,

    #[error("sequence too short: {length} residues (minimum {MIN_LENGTH})")]
    TooShort { length: usize },

    #[error("invalid residue(s): {residues} (use standard one-letter codes only)")]
    InvalidResidue { residues: String },
}

/// A validated peptide sequence: uppercase, canonical residues only, length >= 10.
/// Construction goes through [`Peptide::parse`]; the sequence is immutable
/// afterwards. Serde represents a peptide as its string form and routes
/// deserialization through `parse`, so the invariant holds for decoded
/// values too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Peptide {
    residues: Vec<u8>,
}

impl TryFrom<String> for Peptide {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Peptide::parse(&raw)
    }
}

impl From<Peptide> for String {
    fn from(peptide: Peptide) -> String {
        peptide.to_string()
    }
}

impl Peptide {
    /// Validate raw user input into a `Peptide`.
    ///
    /// Surrounding whitespace is trimmed and the sequence uppercased before
    /// checking. Fails fast on empty input, then length, then residue set.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }

        let upper = trimmed.to_ascii_uppercase();
        // Character count, not byte count: a short input with a multibyte
        // character is still too short, not merely invalid.
        let length = upper.chars().count();
        if length < MIN_LENGTH {
            return Err(ValidationError::TooShort { length });
        }

        // Collect distinct offenders in first-appearance order for the message.
        let mut invalid = String::new();
        for ch in upper.chars() {
            if !ch.is_ascii() || aa_index(ch as u8).is_none() {
                if !invalid.contains(ch) {
                    invalid.push(ch);
                }
            }
        }
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidResidue { residues: invalid });
        }

        Ok(Peptide {
            residues: upper.into_bytes(),
        })
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Per-residue counts in `aa_index` order.
    pub fn counts(&self) -> [usize; 20] {
        let mut counts = [0usize; 20];
        for &aa in &self.residues {
            // Invariant: every residue is canonical after parse.
            if let Some(idx) = aa_index(aa) {
                counts[idx] += 1;
            }
        }
        counts
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.residues))
    }
}
