use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::processing::padding::RgbCanvas;
use crate::error::{Error, Result};

fn encode_rgb<W: Write>(writer: &mut W, canvas: &RgbCanvas, quality: u8) -> Result<()> {
    let cols = u16::try_from(canvas.width).map_err(|_| Error::InvalidArgument {
        arg: "width",
        value: canvas.width.to_string(),
    })?;
    let rows = u16::try_from(canvas.height).map_err(|_| Error::InvalidArgument {
        arg: "height",
        value: canvas.height.to_string(),
    })?;
    // the encoder's quality scale starts at 1
    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder.encode(&canvas.pixels, cols, rows, ColorType::Rgb)?;
    Ok(())
}

pub fn write_rgb_jpeg(output: &Path, canvas: &RgbCanvas, quality: u8) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    encode_rgb(&mut writer, canvas, quality)?;
    writer.flush()?;
    Ok(())
}

pub fn encode_rgb_jpeg(canvas: &RgbCanvas, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_rgb(&mut buffer, canvas, quality)?;
    Ok(buffer)
}
