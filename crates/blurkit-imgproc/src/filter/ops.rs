use blurkit_image::{Image, ImageError};

use super::{EdgePolicy, KernelSize, NeighborWindow};
use crate::error::FilterError;
use crate::parallel::{self, ExecutionStrategy};

/// Blur an image using a box blur filter
///
/// Every visited output pixel becomes the per-channel integer mean of the
/// square window of input pixels centered on it. Which pixels are visited
/// and how the window is treated at the image border is decided by `policy`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the square window.
/// * `policy` - The edge handling policy.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Examples
///
/// ```
/// use blurkit_image::{Image, ImageSize};
/// use blurkit_imgproc::filter::{box_blur_u8, EdgePolicy, KernelSize};
///
/// let size = ImageSize { width: 3, height: 1 };
/// let src = Image::<u8, 1>::new(size, vec![0, 30, 60]).unwrap();
/// let mut dst = src.clone();
///
/// box_blur_u8(&src, &mut dst, KernelSize::new(3).unwrap(), EdgePolicy::Clamped).unwrap();
///
/// assert_eq!(dst.as_slice(), &[15, 30, 45]);
/// ```
pub fn box_blur_u8<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel_size: KernelSize,
    policy: EdgePolicy,
) -> Result<(), FilterError> {
    box_blur_u8_with_strategy(src, dst, kernel_size, policy, ExecutionStrategy::default())
}

/// Blur an image using a box blur filter with execution strategy control.
///
/// Output rows are distributed according to `strategy`; the result does not
/// depend on the strategy.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the square window.
/// * `policy` - The edge handling policy.
/// * `strategy` - How rows are scheduled over threads.
pub fn box_blur_u8_with_strategy<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel_size: KernelSize,
    policy: EdgePolicy,
    strategy: ExecutionStrategy,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let size = src.size();
    let radius = kernel_size.radius();
    let rows = policy.visited_rows(size, radius);
    let cols = policy.visited_cols(size, radius);

    log::debug!(
        "box blur: {size}, step {} bytes, kernel {kernel_size}, policy {policy}, rows {rows:?}, cols {cols:?}",
        src.row_stride(),
    );

    parallel::for_each_row_with(
        strategy,
        dst.as_slice_mut(),
        src.row_stride(),
        rows,
        |row, dst_row| {
            for col in cols.clone() {
                let window = policy.window(size, kernel_size, row, col);
                average_window(src, &window, &mut dst_row[col * C..(col + 1) * C]);
            }
        },
    )?;

    Ok(())
}

/// Write the per-channel mean of `window` into the pixel slice `dst`.
fn average_window<const C: usize>(src: &Image<u8, C>, window: &NeighborWindow, dst: &mut [u8]) {
    let stride = src.row_stride();
    let data = src.as_slice();

    let mut sum = [0u64; C];
    for row in window.rows.clone() {
        let start = row * stride + window.cols.start * C;
        let end = row * stride + window.cols.end * C;
        for pixel in data[start..end].chunks_exact(C) {
            for (acc, &val) in sum.iter_mut().zip(pixel) {
                *acc += u64::from(val);
            }
        }
    }

    let divisor = window.divisor as u64;
    for (out, acc) in dst.iter_mut().zip(sum) {
        // the mean of u8 samples always fits in u8
        *out = (acc / divisor) as u8;
    }
}
