//! Triangular-number addressing of grid cells into the integer sequence
//!
//! Each cell of the N×N grid is assigned a distinct sequence index along
//! anti-diagonal number-triangle paths rather than in row-major order. The
//! assignment is injective over the grid and spans `[0, 2·N·(N−1)]`; which
//! sequence value lands on which cell is what shapes the final pattern, so
//! the arithmetic below is fixed, not just "any bijection".

use ndarray::Array2;

use crate::math::triangular;

/// Sequence index for a single cell
///
/// Computes `row·(row+3)/2 + T(col+row) − T(row)` with `T(k) = k·(k+1)/2`,
/// all in integer arithmetic. Distinct `(row, col)` pairs yield distinct
/// indices for any grid that fits the configured size bound.
pub const fn sequence_index(row: usize, col: usize) -> usize {
    let base = row * (row + 3) / 2;
    base + triangular(col + row) - triangular(row)
}

/// Largest sequence index produced over an N×N grid, `2·N·(N−1)`
pub const fn max_sequence_index(side: usize) -> usize {
    if side == 0 { 0 } else { 2 * side * (side - 1) }
}

/// Write-once map from grid cells to sequence indices
///
/// Built in full at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct IndexMap {
    indices: Array2<usize>,
    side: usize,
}

impl IndexMap {
    /// Build the map for an N×N grid
    pub fn new(side: usize) -> Self {
        let indices = Array2::from_shape_fn((side, side), |(row, col)| sequence_index(row, col));
        Self { indices, side }
    }

    /// Grid side length
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Sequence index at a cell, if within the grid
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.indices.get((row, col)).copied()
    }

    /// Sequence indices in row-major cell order
    pub fn iter_row_major(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexMap, max_sequence_index, sequence_index};

    #[test]
    fn test_known_values_for_three_by_three() {
        let expected = [
            (0, 0, 0),
            (0, 1, 1),
            (0, 2, 3),
            (1, 0, 2),
            (1, 1, 4),
            (1, 2, 7),
            (2, 0, 5),
            (2, 1, 8),
            (2, 2, 12),
        ];
        for (row, col, index) in expected {
            assert_eq!(sequence_index(row, col), index, "cell ({row}, {col})");
        }
    }

    #[test]
    fn test_map_matches_cell_formula() {
        let map = IndexMap::new(5);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(map.get(row, col), Some(sequence_index(row, col)));
            }
        }
        assert_eq!(map.get(5, 0), None);
        assert_eq!(map.get(0, 5), None);
    }

    #[test]
    fn test_maximum_is_reached_at_far_corner() {
        for side in [1usize, 2, 3, 8, 64] {
            let map = IndexMap::new(side);
            let observed_max = map.iter_row_major().max().unwrap_or(0);
            assert_eq!(observed_max, max_sequence_index(side));
            assert_eq!(
                sequence_index(side - 1, side - 1),
                max_sequence_index(side)
            );
        }
    }
}
