use blurkit_image::ImageError;
use thiserror::Error;

use crate::parallel::ParallelError;

/// An error type for filter operations.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// The images passed to the filter are not valid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The execution strategy could not be honored.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// The kernel size is not odd and at least 1.
    #[error("Kernel size must be odd and >= 1, got {0}")]
    InvalidKernelSize(usize),

    /// The edge policy name is not recognized.
    #[error("Unknown edge policy '{0}', expected 'clamped' or 'cropped'")]
    InvalidEdgePolicy(String),
}
