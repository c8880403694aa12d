//! Input/output operations: CLI, configuration, errors, and encoding

/// Command-line interface and request processing
pub mod cli;
/// Runtime defaults and encoding constants
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Image decoding, JPEG encoding, and export
pub mod image;
/// Progress display for the generation phases
pub mod progress;
