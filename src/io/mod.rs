//! Input/output operations, configuration, and error handling
//!
//! This module contains the serializer side of the program:
//! - CLI argument handling and the generation run loop
//! - Fixed generation constants
//! - JSON export of rendered collections
//! - Progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and output settings
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON serialization of art collections
pub mod export;
/// Progress display for collection generation
pub mod progress;
