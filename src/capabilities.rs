//! Startup preconditions. Every allow-listed extension needs a decoder compiled into the
//! `image` crate; the progress display is optional and only reported on.
use image::ImageFormat;
use indicatif::ProgressDrawTarget;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::SUPPORTED_EXTENSIONS;

/// What the running binary can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub decoders: Vec<ImageFormat>,
    pub progress_visible: bool,
}

fn decoder_for(extension: &str) -> Result<ImageFormat> {
    let ext = extension.trim_start_matches('.');
    let format = ImageFormat::from_extension(ext).ok_or_else(|| Error::MissingCapability {
        capability: format!("image codec for {extension}"),
        hint: "The image crate does not recognise this extension.".to_string(),
    })?;
    if !format.reading_enabled() {
        return Err(Error::MissingCapability {
            capability: format!("{format:?} decoder for {extension}"),
            hint: format!(
                "Rebuild with the `{}` feature of the `image` crate enabled.",
                ext.to_lowercase()
            ),
        });
    }
    Ok(format)
}

/// Verify every required capability, failing on the first missing decoder.
pub fn check() -> Result<Capabilities> {
    let mut decoders = Vec::new();
    for extension in SUPPORTED_EXTENSIONS {
        let format = decoder_for(extension)?;
        if !decoders.contains(&format) {
            decoders.push(format);
        }
    }

    let progress_visible = !ProgressDrawTarget::stderr().is_hidden();
    if progress_visible {
        info!("Decoders available: {:?}", decoders);
    } else {
        warn!("stderr is not a terminal; the progress bar will not be drawn");
    }

    Ok(Capabilities {
        decoders,
        progress_visible,
    })
}
