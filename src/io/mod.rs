//! Input/output operations and error handling

/// Command-line interface and export orchestration
pub mod cli;
/// Named constants and configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG rendering of generated patterns
pub mod image;
/// SVG rendering of generated patterns
pub mod svg;
