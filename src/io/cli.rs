//! Command-line interface for generating and exporting tile patterns

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::grid::pattern::{PatternConfig, TilePattern};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_OUTPUT, DEFAULT_SEED, default_tile_pixels,
};
use crate::io::error::Result;
use crate::io::image::export_pattern_as_png;
use crate::io::svg::export_pattern_as_svg;
use crate::sequence::SequenceKind;

/// Integer sequence selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Natural numbers 0, 1, 2, …
    Identity,
    /// Fibonacci numbers 1, 1, 2, 3, 5, …
    Fibonacci,
    /// Prime numbers 2, 3, 5, 7, …
    Primes,
    /// Seeded uniform random values
    Random,
}

#[derive(Parser)]
#[command(name = "truchet")]
#[command(
    author,
    version,
    about = "Generate deterministic Truchet tile patterns"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Grid side length in tiles
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Integer sequence feeding the binary selector
    #[arg(short, long, value_enum, default_value = "identity")]
    pub source: SourceArg,

    /// Seed for the random sequence source
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pixel size of each tile (derived from the grid size if omitted)
    #[arg(short, long)]
    pub tile_size: Option<usize>,

    /// Stroke width in pixels
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: usize,

    /// Also write an SVG rendition next to the PNG
    #[arg(long)]
    pub svg: bool,

    /// Flip every tile orientation
    #[arg(short, long)]
    pub invert: bool,

    /// Suppress completion output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Sequence source selected by the arguments
    pub const fn sequence_kind(&self) -> SequenceKind {
        match self.source {
            SourceArg::Identity => SequenceKind::Identity,
            SourceArg::Fibonacci => SequenceKind::Fibonacci,
            SourceArg::Primes => SequenceKind::Primes,
            SourceArg::Random => SequenceKind::Random { seed: self.seed },
        }
    }

    /// Pixel size per tile, explicit or derived
    pub fn tile_pixels(&self) -> usize {
        self.tile_size
            .unwrap_or_else(|| default_tile_pixels(self.grid_size))
    }
}

/// Orchestrates one generation run and its exports
pub struct PatternProcessor {
    cli: Cli,
}

impl PatternProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the pattern and write the requested renditions
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or any export fails.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let config = PatternConfig {
            grid_size: self.cli.grid_size,
            source: self.cli.sequence_kind(),
        };

        let mut pattern = TilePattern::generate(&config)?;
        if self.cli.invert {
            pattern.invert();
        }

        let tile_pixels = self.cli.tile_pixels();
        export_pattern_as_png(
            &pattern,
            tile_pixels,
            self.cli.line_width,
            &self.cli.output,
        )?;

        if self.cli.svg {
            let svg_path = Self::sibling_with_extension(&self.cli.output, "svg");
            export_pattern_as_svg(&pattern, tile_pixels, self.cli.line_width, &svg_path)?;
        }

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} ({}x{} tiles)",
                self.cli.output.display(),
                pattern.side(),
                pattern.side()
            );
        }

        Ok(())
    }

    fn sibling_with_extension(path: &Path, extension: &str) -> PathBuf {
        let mut sibling = path.to_path_buf();
        sibling.set_extension(extension);
        sibling
    }
}
