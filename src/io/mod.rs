//! Input/output: command line, configuration, errors, images and progress

/// Command-line parsing and the generation pipeline
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Tile loading, image assembly and export
pub mod image;
/// Progress display for batch runs
pub mod progress;
