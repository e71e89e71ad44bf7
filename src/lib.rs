//! Novelty name generator built around the word "amogus"
//!
//! Names are derived from the base word by weighted random cuts, extensions
//! and mirrorings, and each name is rendered as a vertical stack of tiles.

#![forbid(unsafe_code)]

/// Name generation: sampling, strategies, recent-result history and factory
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for weighted selection
pub mod math;

pub use algorithm::factory::{Amogus, AmogusFactory};
pub use algorithm::transform::Action;
pub use io::error::{AmogusError, Result};
