use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Overflow;

/// Upper bound for any single RGB8 buffer the pipeline allocates.
pub const MAX_BUFFER_BYTES: u64 = 1 << 30;

/// Allocate a `(cols, rows)` RGB8 buffer filled with `fill`, failing instead of aborting
/// when it is over [`MAX_BUFFER_BYTES`] or the allocator refuses it.
pub fn rgb_buffer(cols: u32, rows: u32, fill: u8) -> Result<Vec<u8>> {
    let bytes = cols as u64 * rows as u64 * 3;
    if bytes > MAX_BUFFER_BYTES {
        return Err(Error::BufferTooLarge {
            cols,
            rows,
            bytes,
            limit: MAX_BUFFER_BYTES,
        });
    }
    let len = bytes as usize;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(Error::resize)?;
    buffer.resize(len, fill);
    Ok(buffer)
}

/// Shrink `(cols, rows)` so both sides fit inside `(max_cols, max_rows)` while keeping
/// the aspect ratio. Dimensions that already fit are returned unchanged; the free side is
/// rounded to whichever neighbour keeps the ratio closest, never below 1.
pub fn fit_within_dimensions(
    cols: u32,
    rows: u32,
    max_cols: u32,
    max_rows: u32,
) -> (u32, u32) {
    if max_cols >= cols && max_rows >= rows {
        return (cols, rows);
    }

    let aspect = cols as f64 / rows as f64;
    let bound_cols = max_cols as f64;
    let bound_rows = max_rows as f64;

    if bound_cols / bound_rows >= aspect {
        let new_cols = round_aspect(bound_rows * aspect, |n| (aspect - n / bound_rows).abs());
        (new_cols, max_rows)
    } else {
        let new_rows = round_aspect(bound_cols / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - bound_cols / n).abs()
            }
        });
        (max_cols, new_rows)
    }
}

fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor();
    let ceil = value.ceil();
    // ties go to the floor
    let best = if error(ceil) < error(floor) { ceil } else { floor };
    (best as u32).max(1)
}

/// Enlarge `(cols, rows)` so both sides reach at least `(min_cols, min_rows)`.
/// One side may overshoot; scaled sides are truncated.
pub fn cover_dimensions(cols: u32, rows: u32, min_cols: u32, min_rows: u32) -> (u32, u32) {
    if cols >= min_cols && rows >= min_rows {
        return (cols, rows);
    }
    let scale = (min_cols as f64 / cols as f64).max(min_rows as f64 / rows as f64);
    scaled(cols, rows, scale)
}

/// Enlarge `(cols, rows)` as far as possible without exceeding `(max_cols, max_rows)`.
pub fn contain_dimensions(cols: u32, rows: u32, max_cols: u32, max_rows: u32) -> (u32, u32) {
    if cols >= max_cols || rows >= max_rows {
        return (cols, rows);
    }
    let scale = (max_cols as f64 / cols as f64).min(max_rows as f64 / rows as f64);
    let (new_cols, new_rows) = scaled(cols, rows, scale);
    (new_cols.min(max_cols), new_rows.min(max_rows))
}

fn scaled(cols: u32, rows: u32, scale: f64) -> (u32, u32) {
    let new_cols = ((scale * cols as f64) as u32).max(1);
    let new_rows = ((scale * rows as f64) as u32).max(1);
    (new_cols, new_rows)
}

/// Final size of an image of `(cols, rows)` before it is pasted onto a
/// `(target_cols, target_rows)` canvas: fit-within first, then enlarge per `overflow`.
pub fn calculate_paste_dimensions(
    cols: u32,
    rows: u32,
    target_cols: u32,
    target_rows: u32,
    overflow: Overflow,
) -> (u32, u32) {
    let (fit_cols, fit_rows) = fit_within_dimensions(cols, rows, target_cols, target_rows);
    let (new_cols, new_rows) = match overflow {
        Overflow::Crop => cover_dimensions(fit_cols, fit_rows, target_cols, target_rows),
        Overflow::Contain => contain_dimensions(fit_cols, fit_rows, target_cols, target_rows),
    };
    debug!(
        "Original size: {}x{}, fit: {}x{}, final: {}x{} ({})",
        cols, rows, fit_cols, fit_rows, new_cols, new_rows, overflow
    );
    (new_cols, new_rows)
}

/// Resample interleaved RGB8 pixels with a Lanczos3 filter.
pub fn resize_rgb_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    if original_cols == target_cols && original_rows == target_rows {
        return Ok(data.to_vec());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let dst_buffer = rgb_buffer(target_cols, target_rows, 0)?;
    let mut dst_image = Image::from_vec_u8(target_cols, target_rows, dst_buffer, PixelType::U8x3)
        .map_err(Error::resize)?;
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}
