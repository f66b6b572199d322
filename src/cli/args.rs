use clap::Parser;
use std::path::PathBuf;

use squarepad::Overflow;

#[derive(Parser, Debug)]
#[command(name = "squarepad", version, about = "Batch-resize photos onto white square canvases")]
pub struct CliArgs {
    /// Directory to process (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Canvas size in pixels; runs a single batch without prompting
    #[arg(long)]
    pub size: Option<u32>,

    /// JPEG quality (0-100) for the single batch started by --size
    #[arg(long, requires = "size")]
    pub quality: Option<u8>,

    /// What to do with images smaller than the canvas (crop or contain)
    #[arg(long, value_enum, default_value_t = Overflow::Crop)]
    pub overflow: Overflow,

    /// Keep the archived originals when the interactive session ends
    #[arg(long, default_value_t = false)]
    pub keep_originals: bool,

    /// Write the last batch report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_interactive_defaults() {
        let args = CliArgs::try_parse_from(["squarepad"]).unwrap();
        assert!(args.size.is_none());
        assert_eq!(args.overflow, Overflow::Crop);
        assert!(!args.keep_originals);
    }

    #[test]
    fn quality_requires_size() {
        assert!(CliArgs::try_parse_from(["squarepad", "--quality", "70"]).is_err());
        let args =
            CliArgs::try_parse_from(["squarepad", "--size", "300", "--quality", "70"]).unwrap();
        assert_eq!((args.size, args.quality), (Some(300), Some(70)));
    }

    #[test]
    fn overflow_parses_contain() {
        let args = CliArgs::try_parse_from(["squarepad", "--overflow", "contain"]).unwrap();
        assert_eq!(args.overflow, Overflow::Contain);
    }
}
