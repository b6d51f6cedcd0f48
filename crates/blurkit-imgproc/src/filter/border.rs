use std::ops::Range;
use std::str::FromStr;

use blurkit_image::ImageSize;

use super::KernelSize;
use crate::error::FilterError;

/// Border handling modes for the box blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Compute every pixel from the neighbors that fall inside the image.
    ///
    /// The window is clipped to the image bounds and the divisor is the
    /// number of samples actually read, from `(radius + 1)^2` at a corner up
    /// to `N * N` in the interior.
    #[default]
    Clamped,

    /// Only compute pixels whose full window lies inside the image.
    ///
    /// A border of width `radius` is never written and keeps whatever the
    /// destination held before the call. The divisor is always `N * N`.
    Cropped,
}

impl EdgePolicy {
    /// Rows of the destination visited by the filter.
    pub fn visited_rows(&self, size: ImageSize, radius: usize) -> Range<usize> {
        self.visited(size.height, radius)
    }

    /// Columns of the destination visited by the filter.
    pub fn visited_cols(&self, size: ImageSize, radius: usize) -> Range<usize> {
        self.visited(size.width, radius)
    }

    fn visited(&self, len: usize, radius: usize) -> Range<usize> {
        match self {
            EdgePolicy::Clamped => 0..len,
            EdgePolicy::Cropped => {
                // empty when the image is thinner than the kernel
                let end = len.saturating_sub(radius);
                radius.min(end)..end
            }
        }
    }

    /// The input window read to compute the output pixel at `(row, col)`.
    ///
    /// `(row, col)` must lie in [`visited_rows`](Self::visited_rows) x
    /// [`visited_cols`](Self::visited_cols) for this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use blurkit_image::ImageSize;
    /// use blurkit_imgproc::filter::{EdgePolicy, KernelSize};
    ///
    /// let size = ImageSize { width: 10, height: 10 };
    /// let kernel_size = KernelSize::new(3).unwrap();
    ///
    /// let window = EdgePolicy::Clamped.window(size, kernel_size, 0, 0);
    /// assert_eq!(window.rows, 0..2);
    /// assert_eq!(window.cols, 0..2);
    /// assert_eq!(window.divisor, 4);
    /// ```
    pub fn window(
        &self,
        size: ImageSize,
        kernel_size: KernelSize,
        row: usize,
        col: usize,
    ) -> NeighborWindow {
        let radius = kernel_size.radius();
        match self {
            EdgePolicy::Clamped => {
                // half-open upper bound: the last valid index is len - 1
                let rows = row.saturating_sub(radius)..(row + radius + 1).min(size.height);
                let cols = col.saturating_sub(radius)..(col + radius + 1).min(size.width);
                let divisor = rows.len() * cols.len();
                NeighborWindow {
                    rows,
                    cols,
                    divisor,
                }
            }
            EdgePolicy::Cropped => NeighborWindow {
                rows: row - radius..row + radius + 1,
                cols: col - radius..col + radius + 1,
                divisor: kernel_size.area(),
            },
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamped" | "clamp" => Ok(EdgePolicy::Clamped),
            "cropped" | "crop" => Ok(EdgePolicy::Cropped),
            _ => Err(FilterError::InvalidEdgePolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EdgePolicy::Clamped => write!(f, "clamped"),
            EdgePolicy::Cropped => write!(f, "cropped"),
        }
    }
}

/// The block of input pixels averaged into one output pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborWindow {
    /// Input rows read, half-open.
    pub rows: Range<usize>,
    /// Input columns read, half-open.
    pub cols: Range<usize>,
    /// Value the channel sums are divided by.
    pub divisor: usize,
}

impl NeighborWindow {
    /// Number of pixels in the window.
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Whether the window covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
