use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Overflow;

pub const DEFAULT_QUALITY: u8 = 80;

/// Largest canvas side the JPEG writer can encode.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

/// Resize parameters suitable for presets and batch reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeParams {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// JPEG quality, 0..=100
    pub quality: u8,
    #[serde(default)]
    pub overflow: Overflow,
}

impl ResizeParams {
    /// Square canvas of `size` x `size`, the shape the interactive driver asks for.
    pub fn square(size: u32, quality: u8) -> Self {
        Self {
            width: size,
            height: size,
            quality,
            overflow: Overflow::default(),
        }
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for side in [self.width, self.height] {
            if side == 0 {
                return Err(Error::ZeroSize { size: side });
            }
            if side > MAX_CANVAS_SIDE {
                return Err(Error::InvalidArgument {
                    arg: "size",
                    value: side.to_string(),
                });
            }
        }
        if self.quality > 100 {
            return Err(Error::QualityOutOfRange {
                quality: self.quality,
            });
        }
        Ok(())
    }
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self::square(512, DEFAULT_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_sets_both_sides() {
        let params = ResizeParams::square(300, 90);
        assert_eq!((params.width, params.height), (300, 300));
        assert_eq!(params.overflow, Overflow::Crop);
    }

    #[test]
    fn rejects_zero_size() {
        let err = ResizeParams::square(0, 80).validate().unwrap_err();
        assert!(matches!(err, Error::ZeroSize { size: 0 }));
    }

    #[test]
    fn rejects_quality_above_100() {
        let err = ResizeParams::square(10, 101).validate().unwrap_err();
        assert!(matches!(err, Error::QualityOutOfRange { quality: 101 }));
    }

    #[test]
    fn rejects_canvas_too_large_for_jpeg() {
        let err = ResizeParams::square(70_000, 80).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "size", .. }));
    }

    #[test]
    fn accepts_quality_bounds() {
        assert!(ResizeParams::square(1, 0).validate().is_ok());
        assert!(ResizeParams::square(1, 100).validate().is_ok());
    }

    #[test]
    fn overflow_is_optional_when_deserializing() {
        let params: ResizeParams =
            serde_json::from_str(r#"{"width":64,"height":32,"quality":75}"#).unwrap();
        assert_eq!(params.overflow, Overflow::Crop);
        assert_eq!(params.height, 32);
    }
}
