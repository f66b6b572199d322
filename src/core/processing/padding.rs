use tracing::debug;

use crate::core::processing::resize::rgb_buffer;
use crate::error::Result;

pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// A fixed-size interleaved RGB8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbCanvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbCanvas {
    /// Blank canvas filled with the white background.
    pub fn white(width: u32, height: u32) -> Result<Self> {
        let pixels = rgb_buffer(width, height, BACKGROUND[0])?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
impl RgbCanvas {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

/// Top-left offset that centers an image of `(cols, rows)` on the canvas. Floor
/// division, so the offset is negative when the image is larger than the canvas.
pub fn centered_offset(canvas_cols: u32, canvas_rows: u32, cols: u32, rows: u32) -> (i64, i64) {
    let x = (canvas_cols as i64 - cols as i64).div_euclid(2);
    let y = (canvas_rows as i64 - rows as i64).div_euclid(2);
    (x, y)
}

/// Copy RGB8 `data` of `(cols, rows)` onto the canvas at `(left, top)`. Pixels that
/// land outside the canvas are dropped.
pub fn paste_rgb(canvas: &mut RgbCanvas, data: &[u8], cols: u32, rows: u32, left: i64, top: i64) {
    let canvas_cols = canvas.width as i64;
    let canvas_rows = canvas.height as i64;

    let src_x0 = (-left).max(0);
    let src_x1 = (canvas_cols - left).min(cols as i64);
    let src_y0 = (-top).max(0);
    let src_y1 = (canvas_rows - top).min(rows as i64);
    if src_x0 >= src_x1 || src_y0 >= src_y1 {
        return;
    }

    let span = (src_x1 - src_x0) as usize * 3;
    // one slice copy per visible row
    for row in src_y0..src_y1 {
        let src_offset = (row as usize * cols as usize + src_x0 as usize) * 3;
        let dst_offset =
            ((row + top) as usize * canvas.width as usize + (src_x0 + left) as usize) * 3;
        canvas.pixels[dst_offset..dst_offset + span]
            .copy_from_slice(&data[src_offset..src_offset + span]);
    }
}

/// Center `data` on a white `(width, height)` canvas.
pub fn pad_to_canvas(
    data: &[u8],
    cols: u32,
    rows: u32,
    width: u32,
    height: u32,
) -> Result<RgbCanvas> {
    let mut canvas = RgbCanvas::white(width, height)?;
    let (left, top) = centered_offset(width, height, cols, rows);
    debug!(
        "Pasting {}x{} onto {}x{} canvas at ({}, {})",
        cols, rows, width, height, left, top
    );
    paste_rgb(&mut canvas, data, cols, rows, left, top);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [200, 10, 10];

    fn solid(cols: u32, rows: u32, px: [u8; 3]) -> Vec<u8> {
        px.repeat((cols * rows) as usize)
    }

    #[test]
    fn white_canvas_has_expected_size() {
        let canvas = RgbCanvas::white(4, 3).unwrap();
        assert_eq!(canvas.pixels.len(), 4 * 3 * 3);
        assert!(canvas.pixels.iter().all(|&v| v == 255));
    }

    #[test]
    fn offsets_use_floor_division() {
        assert_eq!(centered_offset(100, 100, 50, 100), (25, 0));
        assert_eq!(centered_offset(100, 100, 51, 100), (24, 0));
        assert_eq!(centered_offset(100, 100, 201, 100), (-51, 0));
    }

    #[test]
    fn smaller_image_is_centered_with_white_border() {
        let canvas = pad_to_canvas(&solid(2, 2, RED), 2, 2, 4, 4).unwrap();
        assert_eq!(canvas.pixel(0, 0), BACKGROUND);
        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(2, 2), RED);
        assert_eq!(canvas.pixel(3, 3), BACKGROUND);
        assert_eq!(canvas.pixel(3, 1), BACKGROUND);
    }

    #[test]
    fn oversized_image_is_clipped_around_the_center() {
        // columns carry their index in the red channel
        let cols = 6u32;
        let data: Vec<u8> = (0..2)
            .flat_map(|_| (0..cols).flat_map(|x| [x as u8, 0, 0]))
            .collect();
        let canvas = pad_to_canvas(&data, cols, 2, 2, 2).unwrap();
        assert_eq!(canvas.pixel(0, 0), [2, 0, 0]);
        assert_eq!(canvas.pixel(1, 1), [3, 0, 0]);
    }

    #[test]
    fn paste_fully_outside_is_ignored() {
        let mut canvas = RgbCanvas::white(3, 3).unwrap();
        paste_rgb(&mut canvas, &solid(2, 2, RED), 2, 2, 5, -7);
        assert_eq!(canvas, RgbCanvas::white(3, 3).unwrap());
    }
}
