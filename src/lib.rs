//! Deterministic Truchet tile pattern generation
//!
//! Maps every cell of a square grid to a binary orientation flag through a
//! three-stage pipeline: a triangular-number index mapper, a pluggable integer
//! sequence source, and a parity-based binary selector. The flag array selects
//! one of two diagonal tile orientations per cell and feeds the renderers
//! (instanced line data, PNG, SVG).

#![forbid(unsafe_code)]

/// Index mapping and pattern generation over the tile grid
pub mod grid;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Small numeric helpers shared by the generation stages
pub mod math;
/// Per-instance render data derived from the flag array
pub mod render;
/// Pluggable integer sequence sources
pub mod sequence;

pub use grid::pattern::{PatternConfig, TilePattern};
pub use io::error::{PatternError, Result};
pub use sequence::SequenceKind;
