pub mod features;
pub mod predict;
