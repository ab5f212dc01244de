//! Named constants and configuration defaults

/// Default grid side length in tiles
pub const DEFAULT_GRID_SIZE: usize = 64;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid side length
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible random sequences
pub const DEFAULT_SEED: u64 = 42;

/// Default output path for the PNG rendition
pub const DEFAULT_OUTPUT: &str = "truchet.png";

/// Default stroke width in pixels
pub const DEFAULT_LINE_WIDTH: usize = 1;

/// Maximum allowed stroke width in pixels
pub const MAX_LINE_WIDTH: usize = 32;

// Safety limit to keep rendition dimensions within sane pixel budgets
/// Maximum allowed pixel size per tile
pub const MAX_TILE_PIXELS: usize = 1024;

// Target edge length of the rendered image; per-tile pixel sizes are
// derived from it when not given explicitly.
const TARGET_IMAGE_EDGE: usize = 1024;

/// Default pixel size per tile for a grid side length
///
/// Shrinks as the grid grows so the full rendition stays near a fixed edge
/// length, with a three-pixel margin folded into each tile; never below one
/// pixel.
pub const fn default_tile_pixels(grid_size: usize) -> usize {
    if grid_size == 0 {
        return 1;
    }
    let derived = (TARGET_IMAGE_EDGE / grid_size).saturating_sub(3);
    if derived == 0 { 1 } else { derived }
}
