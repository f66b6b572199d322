//! Shared types used across squarepad.
//! Includes the `Overflow` paste policy and the fixed allow-list of image extensions.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Extensions picked up from the source directory, matched case-insensitively
/// against the end of the file name.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".bmp"];

/// How an image smaller than the canvas is enlarged before pasting.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Cover the canvas; whatever overshoots is clipped at paste time.
    #[default]
    Crop,
    /// Enlarge only until the image fits; the rest of the canvas stays white.
    Contain,
}

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Overflow::Crop => write!(f, "crop"),
            Overflow::Contain => write!(f, "contain"),
        }
    }
}

pub fn is_supported_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_allow_list_case_insensitively() {
        assert!(is_supported_image_name("a.jpg"));
        assert!(is_supported_image_name("B.JPEG"));
        assert!(is_supported_image_name("scan.Png"));
        assert!(is_supported_image_name("old.bmp"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_supported_image_name("anim.gif"));
        assert!(!is_supported_image_name("photo.jpg.txt"));
        assert!(!is_supported_image_name("jpg"));
        assert!(!is_supported_image_name("notes.tiff"));
    }

    #[test]
    fn overflow_defaults_to_crop() {
        assert_eq!(Overflow::default(), Overflow::Crop);
        assert_eq!(Overflow::Contain.to_string(), "contain");
    }
}
