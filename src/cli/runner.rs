use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use squarepad::{BatchLayout, BatchReport, BatchResizer, Overflow, ResizeParams, capabilities};

use super::args::CliArgs;
use super::errors::AppError;
use super::prompt::Prompter;

const PROGRESS_TEMPLATE: &str =
    "{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed}<{eta}]";

/// One interactive (or one-shot) session over a single directory.
pub struct Session<R, W> {
    layout: BatchLayout,
    overflow: Overflow,
    keep_originals: bool,
    show_progress: bool,
    report_path: Option<PathBuf>,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(layout: BatchLayout, prompter: Prompter<R, W>) -> Self {
        Self {
            layout,
            overflow: Overflow::default(),
            keep_originals: false,
            show_progress: false,
            report_path: None,
            prompter,
        }
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn keep_originals(mut self, keep: bool) -> Self {
        self.keep_originals = keep;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn report_path(mut self, path: Option<PathBuf>) -> Self {
        self.report_path = path;
        self
    }

    fn progress_bar(&self) -> Result<ProgressBar, AppError> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }
        let bar = ProgressBar::new(0);
        bar.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("#>-"));
        Ok(bar)
    }

    /// Run one batch and print its failures and totals.
    pub fn run_batch(&mut self, size: u32, quality: u8) -> Result<BatchReport, AppError> {
        let params = ResizeParams::square(size, quality).with_overflow(self.overflow);
        let resizer = BatchResizer::new(self.layout.clone(), params)?;
        info!("Batch parameters: {:?}", resizer.params());
        let progress = self.progress_bar()?;

        let prompter = &mut self.prompter;
        let report = resizer.run_with(&progress, |failure| {
            let line = format!(
                "Error processing file '{}': {}",
                failure.name, failure.message
            );
            if let Err(e) = progress.suspend(|| prompter.say(&line)) {
                warn!("Could not print failure for {}: {}", failure.name, e);
            }
        })?;

        self.prompter
            .say(&format!("Resized {} photos.", report.resized))?;
        self.prompter
            .say(&format!("Saved {} original photos.", report.archived))?;

        if let Some(path) = &self.report_path {
            squarepad::write_batch_report(path, &report)?;
        }
        Ok(report)
    }

    /// Prompt for size and quality, run a batch, and repeat until the user declines.
    /// The archive is emptied on the way out unless originals are kept.
    pub fn interactive(&mut self) -> Result<BatchReport, AppError> {
        let last = loop {
            let size = self.prompter.ask_size()?;
            let quality = self.prompter.ask_quality()?;
            let report = self.run_batch(size, quality)?;

            if !self.prompter.ask_repeat()? {
                self.prompter.say("Stay safe.")?;
                break report;
            }
        };

        if self.keep_originals {
            info!("Keeping archived originals in {:?}", self.layout.archive);
        } else {
            let removed = self.layout.clear_archive()?;
            info!("Removed {} archived original(s)", removed);
        }
        Ok(last)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let caps = capabilities::check()?;

    let root = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let layout = BatchLayout::in_dir(&root);
    info!("Working directory: {:?}", root);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(layout, prompter)
        .overflow(args.overflow)
        .keep_originals(args.keep_originals)
        .show_progress(caps.progress_visible)
        .report_path(args.report);

    match args.size {
        Some(size) => {
            let quality = args.quality.unwrap_or(squarepad::DEFAULT_QUALITY);
            session.run_batch(size, quality)?;
        }
        None => {
            session.interactive()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(root: &TempDir, input: &str) -> TestSession {
        let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(BatchLayout::in_dir(root.path()), prompter)
    }

    fn transcript(session: TestSession) -> String {
        String::from_utf8(session.prompter.into_output()).unwrap()
    }

    fn add_photo(root: &TempDir, name: &str) {
        RgbImage::from_pixel(40, 30, Rgb([10, 120, 10]))
            .save(root.path().join(name))
            .unwrap();
    }

    #[test]
    fn single_round_resizes_then_empties_archive() {
        let root = TempDir::new().unwrap();
        add_photo(&root, "a.png");
        add_photo(&root, "b.jpg");

        let mut s = session(&root, "64\n\nn\n");
        let report = s.interactive().unwrap();
        assert_eq!((report.resized, report.archived), (2, 2));
        assert_eq!(report.params.quality, 80);

        assert!(root.path().join("Resized/1.jpg").exists());
        assert!(root.path().join("Resized/2.jpg").exists());
        assert_eq!(fs::read_dir(root.path().join("Original")).unwrap().count(), 0);

        let out = transcript(s);
        assert!(out.contains("Resized 2 photos."));
        assert!(out.contains("Saved 2 original photos."));
        assert!(out.ends_with("Stay safe.\n"));
    }

    #[test]
    fn keep_originals_skips_final_cleanup() {
        let root = TempDir::new().unwrap();
        add_photo(&root, "a.png");

        let mut s = session(&root, "32\n90\nN\n").keep_originals(true);
        s.interactive().unwrap();
        assert!(root.path().join("Original/a.png").exists());
    }

    #[test]
    fn repeating_runs_another_batch() {
        let root = TempDir::new().unwrap();
        add_photo(&root, "a.png");

        let mut s = session(&root, "32\n\ny\n48\n70\nn\n");
        let last = s.interactive().unwrap();
        // the second batch finds nothing left to resize
        assert_eq!(last.resized, 0);
        assert_eq!(last.params.width, 48);
        assert_eq!(last.params.quality, 70);
        assert_eq!(fs::read_dir(root.path().join("Resized")).unwrap().count(), 0);

        let out = transcript(s);
        assert!(out.contains("Resized 1 photos."));
        assert!(out.contains("Resized 0 photos."));
    }

    #[test]
    fn failures_are_printed_per_file() {
        let root = TempDir::new().unwrap();
        add_photo(&root, "a.png");
        fs::write(root.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let mut s = session(&root, "");
        let report = s.run_batch(16, 80).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert!(transcript(s).contains("Error processing file 'broken.jpg':"));
    }

    #[test]
    fn report_is_written_when_requested() {
        let root = TempDir::new().unwrap();
        let report_dir = TempDir::new().unwrap();
        let path = report_dir.path().join("last.json");
        add_photo(&root, "a.png");

        let mut s = session(&root, "").report_path(Some(path.clone()));
        s.run_batch(16, 75).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["resized"], 1);
        assert_eq!(json["params"]["quality"], 75);
    }

    #[test]
    fn closed_input_before_size_is_an_error() {
        let root = TempDir::new().unwrap();
        let mut s = session(&root, "");
        assert!(matches!(s.interactive(), Err(AppError::InputClosed { .. })));
    }
}
