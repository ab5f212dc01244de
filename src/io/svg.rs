//! SVG export of generated patterns
//!
//! Emits the same tile geometry as the PNG path, as a white background rect
//! followed by two `<line>` elements per tile. SVG keeps the rendition
//! resolution-independent, which suits the tiling's fine line work.

use std::fmt::Write as _;
use std::path::Path;

use crate::grid::pattern::TilePattern;
use crate::io::configuration::{MAX_LINE_WIDTH, MAX_TILE_PIXELS};
use crate::io::error::{PatternError, Result, invalid_parameter};

const SVG_BLACK: &str = "#000000";
const SVG_WHITE: &str = "#FFFFFF";

/// Render a pattern as an SVG document string
///
/// # Errors
///
/// Returns `InvalidParameter` if `tile_size` is outside `[1, MAX_TILE_PIXELS]`
/// or the stroke width is outside `[1, MAX_LINE_WIDTH]`.
pub fn pattern_to_svg(
    pattern: &TilePattern,
    tile_size: usize,
    line_width: usize,
) -> Result<String> {
    if tile_size == 0 || tile_size > MAX_TILE_PIXELS {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("tile edge length must be in [1, {MAX_TILE_PIXELS}]"),
        ));
    }
    if line_width == 0 || line_width > MAX_LINE_WIDTH {
        return Err(invalid_parameter(
            "line_width",
            &line_width,
            &format!("stroke width must be in [1, {MAX_LINE_WIDTH}]"),
        ));
    }

    let edge = pattern.side() * tile_size;
    let mid = tile_size / 2;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{edge}" height="{edge}" viewBox="0 0 {edge} {edge}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{edge}" height="{edge}" fill="{SVG_WHITE}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"  <g stroke="{SVG_BLACK}" stroke-width="{line_width}" fill="none">"#
    );

    for row in 0..pattern.side() {
        let y_offset = row * tile_size;
        for col in 0..pattern.side() {
            let x_offset = col * tile_size;
            let flag = pattern.flag(row, col).unwrap_or_default();

            let left_start = (x_offset, y_offset + mid);
            let right_start = (x_offset + tile_size, y_offset + mid);
            let (left_end, right_end) = if flag {
                (
                    (x_offset + mid, y_offset),
                    (x_offset + mid, y_offset + tile_size),
                )
            } else {
                (
                    (x_offset + mid, y_offset + tile_size),
                    (x_offset + mid, y_offset),
                )
            };

            push_line(&mut svg, left_start, left_end);
            push_line(&mut svg, right_start, right_end);
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}

/// Export a pattern as an SVG file
///
/// # Errors
///
/// Returns an error if the document cannot be built (see [`pattern_to_svg`])
/// or written to the specified path.
pub fn export_pattern_as_svg(
    pattern: &TilePattern,
    tile_size: usize,
    line_width: usize,
    output_path: &Path,
) -> Result<()> {
    let svg = pattern_to_svg(pattern, tile_size, line_width)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, svg).map_err(|e| PatternError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write SVG",
        source: e,
    })
}

fn push_line(svg: &mut String, start: (usize, usize), end: (usize, usize)) {
    let _ = writeln!(
        svg,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        start.0, start.1, end.0, end.1
    );
}
