pub mod ctd;
pub mod physchem;
pub mod scales;
pub mod sequence;

pub use sequence::{Peptide, ValidationError};
