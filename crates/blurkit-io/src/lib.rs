#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any_bgr8`] for automatic format detection.
pub mod functional;

/// Internal utility functions for channel order conversion.
mod conv_utils;

pub use crate::error::IoError;
