use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use blurkit::imgproc::filter::{self, EdgePolicy, KernelSize};
use blurkit::imgproc::parallel::ExecutionStrategy;
use blurkit::io::functional as F;

fn default_image_path() -> PathBuf {
    PathBuf::from("image.jpg")
}

#[derive(FromArgs)]
/// Smooth a color image with a box blur filter
struct Args {
    /// path to an input image, defaults to image.jpg
    #[argh(positional, default = "default_image_path()")]
    image_path: PathBuf,

    /// side length of the square averaging window, must be odd
    #[argh(option, short = 'k', default = "5")]
    kernel_size: usize,

    /// border handling: clamped or cropped
    #[argh(option, default = "EdgePolicy::Clamped")]
    policy: EdgePolicy,

    /// number of worker threads, 1 runs serially
    #[argh(option)]
    threads: Option<usize>,

    /// path to write the blurred image to
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // validate the configuration before touching the file system
    let kernel_size = KernelSize::new(args.kernel_size)?;
    let strategy = ExecutionStrategy::from_threads(args.threads);

    // read the image
    let image = match F::read_image_any_bgr8(&args.image_path) {
        Ok(image) if !image.is_empty() => image,
        Ok(_) => {
            log::error!("{} decoded to an empty image", args.image_path.display());
            println!("Image Not Found!");
            std::process::exit(-1);
        }
        Err(e) => {
            log::error!("failed to load {}: {e}", args.image_path.display());
            println!("Image Not Found!");
            std::process::exit(-1);
        }
    };

    log::debug!(
        "input image step: {} rows: {} cols: {}",
        image.row_stride(),
        image.rows(),
        image.cols()
    );

    // start from a copy so the cropped border keeps the input values
    let mut blurred = image.clone();

    let start = Instant::now();
    filter::box_blur_u8_with_strategy(&image, &mut blurred, kernel_size, args.policy, strategy)?;
    let elapsed = start.elapsed();

    println!("elapsed {:.6} ms", elapsed.as_secs_f64() * 1e3);
    log::info!(
        "blurred {} with {kernel_size} {} kernel",
        image.size(),
        args.policy
    );

    if let Some(output) = args.output {
        F::write_image_bgr8(&output, &blurred)?;
        log::info!("wrote {}", output.display());
    }

    Ok(())
}
