use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::core::params::ResizeParams;
use crate::core::processing::padding::{RgbCanvas, pad_to_canvas};
use crate::core::processing::resize::{calculate_paste_dimensions, resize_rgb_image};
use crate::error::Result;

/// Decode an image file, sniffing the real format from its content. Alpha is dropped.
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image.into_rgb8())
}

/// Fit, enlarge and center an RGB image onto a white canvas of the requested size.
pub fn square_rgb_image(image: &RgbImage, params: &ResizeParams) -> Result<RgbCanvas> {
    let (cols, rows) = image.dimensions();
    let (new_cols, new_rows) =
        calculate_paste_dimensions(cols, rows, params.width, params.height, params.overflow);

    let resized = resize_rgb_image(image.as_raw(), cols, rows, new_cols, new_rows)?;
    pad_to_canvas(&resized, new_cols, new_rows, params.width, params.height)
}

pub fn square_image_file(path: &Path, params: &ResizeParams) -> Result<RgbCanvas> {
    let image = decode_rgb(path)?;
    debug!("Decoded {:?} ({}x{})", path, image.width(), image.height());
    square_rgb_image(&image, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::padding::BACKGROUND;
    use crate::types::Overflow;
    use image::Rgb;

    const BLUE: Rgb<u8> = Rgb([20, 40, 220]);

    fn close(a: [u8; 3], b: [u8; 3]) -> bool {
        a.iter().zip(b).all(|(&x, y)| x.abs_diff(y) <= 3)
    }

    #[test]
    fn crop_fills_the_canvas_for_wide_images() {
        let image = RgbImage::from_pixel(400, 200, BLUE);
        let canvas = square_rgb_image(&image, &ResizeParams::square(100, 80)).unwrap();
        assert_eq!((canvas.width, canvas.height), (100, 100));
        assert!(close(canvas.pixel(0, 0), BLUE.0));
        assert!(close(canvas.pixel(99, 99), BLUE.0));
    }

    #[test]
    fn contain_letterboxes_wide_images() {
        let image = RgbImage::from_pixel(400, 200, BLUE);
        let params = ResizeParams::square(100, 80).with_overflow(Overflow::Contain);
        let canvas = square_rgb_image(&image, &params).unwrap();
        assert_eq!(canvas.pixel(50, 0), BACKGROUND);
        assert!(close(canvas.pixel(50, 50), BLUE.0));
        assert_eq!(canvas.pixel(50, 99), BACKGROUND);
    }

    #[test]
    fn small_images_are_enlarged() {
        let image = RgbImage::from_pixel(10, 10, BLUE);
        let canvas = square_rgb_image(&image, &ResizeParams::square(64, 80)).unwrap();
        assert!(close(canvas.pixel(0, 0), BLUE.0));
        assert!(close(canvas.pixel(63, 63), BLUE.0));
    }

    #[test]
    fn rectangular_canvas_is_supported() {
        let image = RgbImage::from_pixel(30, 30, BLUE);
        let params = ResizeParams {
            width: 40,
            height: 20,
            quality: 80,
            overflow: Overflow::Contain,
        };
        let canvas = square_rgb_image(&image, &params).unwrap();
        assert_eq!((canvas.width, canvas.height), (40, 20));
        assert_eq!(canvas.pixel(0, 10), BACKGROUND);
        assert!(close(canvas.pixel(20, 10), BLUE.0));
    }
}
