use crate::error::FilterError;

/// Side length of a square box blur kernel.
///
/// The value is always odd and at least 1 so that the window is centered on
/// the pixel being computed.
///
/// # Examples
///
/// ```
/// use blurkit_imgproc::filter::KernelSize;
///
/// let kernel_size = KernelSize::new(5).unwrap();
/// assert_eq!(kernel_size.radius(), 2);
/// assert_eq!(kernel_size.area(), 25);
///
/// assert!(KernelSize::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSize(usize);

impl KernelSize {
    /// Create a kernel size, validating that it is odd and at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernelSize`] for zero or even values.
    pub fn new(kernel_size: usize) -> Result<Self, FilterError> {
        if kernel_size == 0 || kernel_size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(kernel_size));
        }
        Ok(Self(kernel_size))
    }

    /// The side length of the kernel.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Maximum offset from the center pixel, `floor(N / 2)`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.0 / 2
    }

    /// Number of samples in a full window, `N * N`.
    #[inline]
    pub fn area(&self) -> usize {
        self.0 * self.0
    }
}

impl TryFrom<usize> for KernelSize {
    type Error = FilterError;

    fn try_from(kernel_size: usize) -> Result<Self, Self::Error> {
        Self::new(kernel_size)
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_size_valid() -> Result<(), FilterError> {
        let k1 = KernelSize::new(1)?;
        assert_eq!(k1.radius(), 0);
        assert_eq!(k1.area(), 1);

        let k3 = KernelSize::try_from(3)?;
        assert_eq!(k3.get(), 3);
        assert_eq!(k3.radius(), 1);
        assert_eq!(k3.area(), 9);
        assert_eq!(k3.to_string(), "3x3");

        Ok(())
    }

    #[test]
    fn test_kernel_size_invalid() {
        assert_eq!(KernelSize::new(0), Err(FilterError::InvalidKernelSize(0)));
        assert_eq!(KernelSize::new(2), Err(FilterError::InvalidKernelSize(2)));
        assert_eq!(KernelSize::new(10), Err(FilterError::InvalidKernelSize(10)));
    }
}
