//! Mathematical utilities for the generator

/// Pseudo-normal weight distributions for biased position selection
pub mod weights;
