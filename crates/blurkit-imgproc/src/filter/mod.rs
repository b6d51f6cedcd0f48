//! Filter operations
//!
//! This module provides the box blur filter and its edge handling policies.

/// Edge policies and neighborhood windows
mod border;
pub use border::*;

/// Filter kernels
pub mod kernels;
pub use kernels::KernelSize;

/// Filter operations
mod ops;
pub use ops::*;
