//! Orientation pattern generation over the tile grid
//!
//! Runs the three pipeline stages to completion in sequence: build the index
//! map, materialize the integer sequence, then reduce each looked-up value to
//! a single orientation bit. Each stage reads the previous stage's finished
//! output; nothing is mutated after generation.

use bitvec::vec::BitVec;

use crate::grid::index::{IndexMap, max_sequence_index};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::parity;
use crate::sequence::SequenceKind;

/// Configuration for a single generation run, fixed before it starts
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    /// Grid side length in tiles
    pub grid_size: usize,
    /// Integer sequence feeding the binary selector
    pub source: SequenceKind,
}

impl PatternConfig {
    /// Configuration with the default sequence source
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            source: SequenceKind::Identity,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid must have at least one tile",
            ));
        }
        if self.grid_size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("grid side must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(())
    }
}

/// A generated N×N orientation pattern
///
/// One bit per cell in row-major order; bit value selects which pair of
/// opposite corners the tile's two line segments bend toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePattern {
    side: usize,
    flags: BitVec,
}

impl TilePattern {
    /// Run the full generation pipeline for the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid size is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], and `Computation` if a sequence lookup falls
    /// outside the generated sequence (a defect in the source, not a user
    /// condition).
    pub fn generate(config: &PatternConfig) -> Result<Self> {
        config.validate()?;

        let side = config.grid_size;
        let index_map = IndexMap::new(side);
        let sequence = config.source.generate(max_sequence_index(side) + 1);

        let mut flags = BitVec::with_capacity(side * side);
        for sequence_index in index_map.iter_row_major() {
            let value = sequence.get(sequence_index).copied().ok_or_else(|| {
                computation_error(
                    "binary selection",
                    &format!(
                        "sequence index {sequence_index} outside generated length {}",
                        sequence.len()
                    ),
                )
            })?;
            flags.push(parity(value) == 1);
        }

        Ok(Self { side, flags })
    }

    /// Grid side length in tiles
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Orientation flag at a cell, if within the grid
    pub fn flag(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.side && col < self.side {
            self.flags.get(row * self.side + col).map(|bit| *bit)
        } else {
            None
        }
    }

    /// Orientation flags in row-major cell order
    pub fn iter_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().by_vals()
    }

    /// Flip every orientation flag in place
    pub fn invert(&mut self) {
        for mut bit in self.flags.iter_mut() {
            *bit = !*bit;
        }
    }
}
