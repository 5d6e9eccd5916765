//! Benchmark objectives grouped by landscape shape:
//! - `unimodal`: a single basin
//! - `multimodal`: many local minima

pub mod multimodal;
pub mod unimodal;

pub use multimodal::*;
pub use unimodal::*;
