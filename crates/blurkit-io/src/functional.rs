use std::path::Path;

use blurkit_image::{Image, ImageSize};

use crate::{conv_utils::swap_rb_in_place, error::IoError};

/// Decodes an image held in memory into a 3-channel 8-bit image.
///
/// The format is guessed from the data. Whatever the source color type, the
/// result is converted to 8-bit color and stored in blue, green, red order.
///
/// # Arguments
///
/// * `bytes` - The encoded image data.
pub fn decode_image_bgr8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    let img = image::load_from_memory(bytes)?;

    let rgb = img.into_rgb8();
    let size = ImageSize {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    };

    let mut data = rgb.into_raw();
    swap_rb_in_place(&mut data);

    Ok(Image::new(size, data)?)
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image with three channels in blue, green, red order.
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] when there is nothing at `file_path`, and
/// [`IoError::ImageDecodeError`] when the data cannot be decoded.
pub fn read_image_any_bgr8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    let image = decode_image_bgr8(&bytes)?;

    log::debug!("decoded {} from {}", image.size(), file_path.display());

    Ok(image)
}

/// Writes a 3-channel image in blue, green, red order to the given file path.
///
/// The encoder is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `blurred.png`.
/// * `image` - The image to encode.
pub fn write_image_bgr8(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    let mut data = image.as_slice().to_vec();
    swap_rb_in_place(&mut data);

    let buf = image::RgbImage::from_raw(image.width() as u32, image.height() as u32, data)
        .ok_or_else(|| IoError::ImageEncodeError(format!("buffer does not fit {}", image.size())))?;

    buf.save_with_format(file_path, format)
        .map_err(|e| IoError::ImageEncodeError(e.to_string()))?;

    log::debug!("encoded {} to {}", image.size(), file_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file() {
        let res = read_image_any_bgr8("does/not/exist.jpg");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn decode_garbage() {
        let res = decode_image_bgr8(&[0u8, 1, 2, 3]);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
    }

    #[test]
    fn write_invalid_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;

        let res = write_image_bgr8(tmp_dir.path().join("image"), &image);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));

        Ok(())
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("bgr.png");

        // one blue, one green, one red pixel
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255],
        )?;
        write_image_bgr8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        // the encoded file stores rgb
        let rgb = image::open(&file_path)?.into_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 255]);

        let image_back = read_image_any_bgr8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }
}
