//! Input/output operations: puzzle loading, rendering, progress and errors

/// Command-line interface and batch puzzle processing
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of solved or partial grids
pub mod image;
/// Multi-file progress display
pub mod progress;
/// Puzzle text decoding and frame removal
pub mod puzzle;
