//! Grid-indexed stages of the generation pipeline

/// Triangular-number sequence index mapping
pub mod index;
/// Binary orientation pattern generation
pub mod pattern;

pub use index::{IndexMap, max_sequence_index, sequence_index};
pub use pattern::{PatternConfig, TilePattern};
