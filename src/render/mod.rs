//! Per-instance render data for instanced line drawing
//!
//! The boundary contract with a GPU harness: one 3-component float vector per
//! tile holding the normalized-device x and y of the tile center and the
//! orientation flag cast to a float. Entries are produced in the same
//! row-major cell order as the flag array, bottom row first, matching the
//! coordinate sweep the instance buffer expects.

use crate::grid::pattern::TilePattern;

/// Build the per-instance `[x, y, flag]` vectors for a pattern
///
/// Coordinates sweep `[-1, 1)` in steps of `2/N` with a half-tile offset, so
/// every entry lies strictly inside the unit square.
pub fn instance_data(pattern: &TilePattern) -> Vec<[f32; 3]> {
    let side = pattern.side() as i32;
    let scale = pattern.side() as f32;
    let offset = 1.0 / scale;

    let mut instances = Vec::with_capacity(pattern.cell_count());
    let mut flags = pattern.iter_flags();
    for y in (-side..side).step_by(2) {
        for x in (-side..side).step_by(2) {
            let flag = flags.next().unwrap_or_default();
            instances.push([
                x as f32 / scale + offset,
                y as f32 / scale + offset,
                f32::from(u8::from(flag)),
            ]);
        }
    }
    instances
}

#[cfg(test)]
mod tests {
    use super::instance_data;
    use crate::grid::pattern::{PatternConfig, TilePattern};

    #[test]
    fn test_one_instance_per_cell_in_flag_order() {
        let pattern = TilePattern::generate(&PatternConfig::new(4)).unwrap();
        let instances = instance_data(&pattern);

        assert_eq!(instances.len(), pattern.cell_count());
        for (instance, flag) in instances.iter().zip(pattern.iter_flags()) {
            let [x, y, orientation] = *instance;
            assert!(x > -1.0 && x < 1.0);
            assert!(y > -1.0 && y < 1.0);
            assert!((orientation - f32::from(u8::from(flag))).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_first_instance_sits_in_lower_left_quadrant() {
        let pattern = TilePattern::generate(&PatternConfig::new(2)).unwrap();
        let instances = instance_data(&pattern);
        let [x, y, _] = instances.first().copied().unwrap_or_default();
        assert!((x + 0.5).abs() < f32::EPSILON);
        assert!((y + 0.5).abs() < f32::EPSILON);
    }
}
