//! PNG export of generated patterns
//!
//! Each tile is drawn as two line segments joining edge midpoints: the flag
//! decides whether they bend toward the lower-left/upper-right corners or the
//! upper-left/lower-right ones. Adjacent tiles chain these segments into the
//! emergent maze-like curves the tiling is known for.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::grid::pattern::TilePattern;
use crate::io::configuration::{MAX_LINE_WIDTH, MAX_TILE_PIXELS};
use crate::io::error::{PatternError, Result, invalid_parameter};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STROKE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Export a pattern as a PNG image
///
/// The image is a square of `tile_pixels · side` pixels, white background,
/// black strokes of `line_width` pixels.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_pixels` is outside `[1, MAX_TILE_PIXELS]` or the stroke width is
///   outside `[1, MAX_LINE_WIDTH]`
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_pattern_as_png(
    pattern: &TilePattern,
    tile_pixels: usize,
    line_width: usize,
    output_path: &Path,
) -> Result<()> {
    if tile_pixels == 0 || tile_pixels > MAX_TILE_PIXELS {
        return Err(invalid_parameter(
            "tile_pixels",
            &tile_pixels,
            &format!("tiles must be between 1 and {MAX_TILE_PIXELS} pixels wide"),
        ));
    }
    if line_width == 0 || line_width > MAX_LINE_WIDTH {
        return Err(invalid_parameter(
            "line_width",
            &line_width,
            &format!("stroke width must be in [1, {MAX_LINE_WIDTH}]"),
        ));
    }

    let edge = (pattern.side() * tile_pixels) as u32;
    let mut img = ImageBuffer::from_pixel(edge, edge, BACKGROUND);

    let tile = tile_pixels as i64;
    let mid = tile / 2;
    for row in 0..pattern.side() {
        let y_offset = (row * tile_pixels) as i64;
        for col in 0..pattern.side() {
            let x_offset = (col * tile_pixels) as i64;
            let flag = pattern.flag(row, col).unwrap_or_default();

            let left_start = (x_offset, y_offset + mid);
            let right_start = (x_offset + tile, y_offset + mid);
            let (left_end, right_end) = if flag {
                ((x_offset + mid, y_offset), (x_offset + mid, y_offset + tile))
            } else {
                ((x_offset + mid, y_offset + tile), (x_offset + mid, y_offset))
            };

            draw_segment(&mut img, left_start, left_end, line_width);
            draw_segment(&mut img, right_start, right_end, line_width);
        }
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| PatternError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

// Plots an integer line by stepping along the dominant axis; every segment
// drawn here is a 45-degree diagonal, so both axes step in lockstep.
fn draw_segment(
    img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    start: (i64, i64),
    end: (i64, i64),
    line_width: usize,
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let steps = dx.abs().max(dy.abs()).max(1);

    for i in 0..=steps {
        let x = start.0 + dx * i / steps;
        let y = start.1 + dy * i / steps;
        stamp(img, x, y, line_width);
    }
}

// Stamps a line_width square centered on the point, clamped to the image.
fn stamp(img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>, x: i64, y: i64, line_width: usize) {
    let reach_low = (line_width as i64 - 1) / 2;
    let reach_high = line_width as i64 / 2;
    for offset_y in -reach_low..=reach_high {
        for offset_x in -reach_low..=reach_high {
            let px = x + offset_x;
            let py = y + offset_y;
            if px >= 0 && py >= 0 && px < i64::from(img.width()) && py < i64::from(img.height()) {
                img.put_pixel(px as u32, py as u32, STROKE);
            }
        }
    }
}
