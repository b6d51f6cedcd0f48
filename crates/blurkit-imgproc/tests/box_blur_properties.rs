use blurkit_image::{Image, ImageSize};
use blurkit_imgproc::filter::{box_blur_u8, box_blur_u8_with_strategy, EdgePolicy, KernelSize};
use blurkit_imgproc::parallel::ExecutionStrategy;
use blurkit_imgproc::FilterError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_TRIALS: usize = 64;

fn random_image(rng: &mut StdRng, size: ImageSize) -> Image<u8, 3> {
    let data = (0..size.area() * 3).map(|_| rng.random()).collect();
    Image::new(size, data).expect("data length matches the size")
}

fn random_case(rng: &mut StdRng) -> (Image<u8, 3>, KernelSize) {
    let size = ImageSize {
        width: rng.random_range(1..24),
        height: rng.random_range(1..24),
    };
    let kernel_size = KernelSize::new(2 * rng.random_range(0..6) + 1).expect("odd kernel size");
    (random_image(rng, size), kernel_size)
}

/// Direct transcription of the neighborhood loop with signed indices and a
/// strict upper bound on both axes.
fn reference_clamped(src: &Image<u8, 3>, kernel_size: KernelSize) -> Vec<u8> {
    let rows = src.rows() as isize;
    let cols = src.cols() as isize;
    let radius = kernel_size.radius() as isize;
    let mut out = Vec::with_capacity(src.as_slice().len());

    for iy in 0..rows {
        for ix in 0..cols {
            let mut sum = [0u64; 3];
            let mut count = 0u64;
            for i in -radius..=radius {
                for j in -radius..=radius {
                    let (iyn, ixn) = (iy + i, ix + j);
                    if iyn >= 0 && ixn >= 0 && iyn < rows && ixn < cols {
                        count += 1;
                        let pixel = src
                            .pixel(iyn as usize, ixn as usize)
                            .expect("neighbor is inside the image");
                        for ch in 0..3 {
                            sum[ch] += u64::from(pixel[ch]);
                        }
                    }
                }
            }
            out.extend(sum.iter().map(|s| (s / count) as u8));
        }
    }

    out
}

#[test]
fn clamped_matches_reference() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..NUM_TRIALS {
        let (src, kernel_size) = random_case(&mut rng);
        let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;
        box_blur_u8(&src, &mut dst, kernel_size, EdgePolicy::Clamped)?;

        assert_eq!(dst.size(), src.size());
        assert_eq!(
            dst.as_slice(),
            reference_clamped(&src, kernel_size).as_slice(),
            "size {} kernel {}",
            src.size(),
            kernel_size
        );
    }

    Ok(())
}

#[test]
fn clamped_windows_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..NUM_TRIALS {
        let (src, kernel_size) = random_case(&mut rng);
        let size = src.size();
        for row in EdgePolicy::Clamped.visited_rows(size, kernel_size.radius()) {
            for col in EdgePolicy::Clamped.visited_cols(size, kernel_size.radius()) {
                let window = EdgePolicy::Clamped.window(size, kernel_size, row, col);
                assert!(window.rows.end <= size.height, "row window {window:?}");
                assert!(window.cols.end <= size.width, "col window {window:?}");
                assert!(window.rows.contains(&row) && window.cols.contains(&col));
                assert_eq!(window.divisor, window.len());
            }
        }
    }
}

#[test]
fn cropped_interior_and_border() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..NUM_TRIALS {
        let (src, kernel_size) = random_case(&mut rng);
        let radius = kernel_size.radius();
        let area = kernel_size.area() as u64;
        let (rows, cols) = (src.rows(), src.cols());

        let mut dst = src.clone();
        box_blur_u8(&src, &mut dst, kernel_size, EdgePolicy::Cropped)?;

        for row in 0..rows {
            for col in 0..cols {
                let interior = row >= radius
                    && row + radius < rows
                    && col >= radius
                    && col + radius < cols;

                for ch in 0..3 {
                    let out = dst.get([row, col, ch]).copied();
                    if interior {
                        let mut sum = 0u64;
                        for y in row - radius..=row + radius {
                            for x in col - radius..=col + radius {
                                sum += u64::from(*src.get_pixel(x, y, ch)?);
                            }
                        }
                        assert_eq!(out, Some((sum / area) as u8));
                    } else {
                        assert_eq!(out, src.get([row, col, ch]).copied());
                    }
                }
            }
        }
    }

    Ok(())
}

#[test]
fn identity_kernel() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(1);
    let k1 = KernelSize::new(1)?;

    for _ in 0..8 {
        let (src, _) = random_case(&mut rng);
        for policy in [EdgePolicy::Clamped, EdgePolicy::Cropped] {
            let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;
            box_blur_u8(&src, &mut dst, k1, policy)?;
            assert_eq!(dst, src);
        }
    }

    Ok(())
}

#[test]
fn constant_image_is_invariant() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..16 {
        let (noise, kernel_size) = random_case(&mut rng);
        let bgr: [u8; 3] = rng.random();
        let src = Image::<u8, 3>::new(noise.size(), bgr.repeat(noise.size().area()))?;

        for policy in [EdgePolicy::Clamped, EdgePolicy::Cropped] {
            let mut dst = src.clone();
            box_blur_u8(&src, &mut dst, kernel_size, policy)?;
            assert!(dst.as_slice().chunks_exact(3).all(|px| px == bgr));
        }
    }

    Ok(())
}

#[test]
fn strategies_agree() -> Result<(), FilterError> {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..16 {
        let (src, kernel_size) = random_case(&mut rng);
        for policy in [EdgePolicy::Clamped, EdgePolicy::Cropped] {
            let mut expected = src.clone();
            box_blur_u8_with_strategy(
                &src,
                &mut expected,
                kernel_size,
                policy,
                ExecutionStrategy::Serial,
            )?;

            for strategy in [ExecutionStrategy::ParallelRows, ExecutionStrategy::Fixed(2)] {
                let mut dst = src.clone();
                box_blur_u8_with_strategy(&src, &mut dst, kernel_size, policy, strategy)?;
                assert_eq!(dst, expected, "{policy} {strategy:?}");
            }
        }
    }

    Ok(())
}
