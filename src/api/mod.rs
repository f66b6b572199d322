//! High-level, ergonomic library API: the directory layout a batch works in, the
//! `BatchResizer` that walks it, and the `BatchReport` it returns. Prefer these
//! entrypoints over the low-level processing modules when embedding squarepad.
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::ResizeParams;
use crate::core::processing::pipeline::square_image_file;
use crate::error::Result;
use crate::io::fs::{
    DirEntry, archive_destination, clear_top_level_files, list_sorted_entries, move_into,
    prepare_dir,
};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::types::is_supported_image_name;

pub const OUTPUT_DIR_NAME: &str = "Resized";
pub const ARCHIVE_DIR_NAME: &str = "Original";

/// Where a batch reads from, writes to, and archives originals into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLayout {
    pub source: PathBuf,
    pub output: PathBuf,
    pub archive: PathBuf,
}

impl BatchLayout {
    /// `root` as source, with `Resized/` and `Original/` underneath it.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            source: root.to_path_buf(),
            output: root.join(OUTPUT_DIR_NAME),
            archive: root.join(ARCHIVE_DIR_NAME),
        }
    }

    /// Create the output and archive directories and empty them of files.
    pub fn prepare(&self) -> Result<()> {
        prepare_dir(&self.output)?;
        prepare_dir(&self.archive)?;
        Ok(())
    }

    /// Delete the archived originals. Used once when the interactive session ends.
    pub fn clear_archive(&self) -> Result<usize> {
        if !self.archive.is_dir() {
            return Ok(0);
        }
        clear_top_level_files(&self.archive)
    }
}

/// A single file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub name: String,
    pub message: String,
}

/// Summary of one batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub params: ResizeParams,
    /// Entries in the source listing, images or not
    pub scanned: usize,
    pub resized: usize,
    pub archived: usize,
    /// Entries that were not supported image files
    pub skipped: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    fn new(params: ResizeParams) -> Self {
        Self {
            params,
            scanned: 0,
            resized: 0,
            archived: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }
}

pub struct BatchResizer {
    layout: BatchLayout,
    params: ResizeParams,
}

impl BatchResizer {
    pub fn new(layout: BatchLayout, params: ResizeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { layout, params })
    }

    pub fn params(&self) -> &ResizeParams {
        &self.params
    }

    /// Resize every supported image at the top level of the source directory into
    /// `<output>/1.jpg`, `<output>/2.jpg`, ... in name order and move each original into
    /// the archive. Failures are recorded per file and never stop the batch.
    ///
    /// `progress` gets its length set to the full listing and advances once per entry.
    pub fn run(&self, progress: &ProgressBar) -> Result<BatchReport> {
        self.run_with(progress, |_| {})
    }

    /// Like [`BatchResizer::run`], calling `on_failure` as soon as a file fails.
    pub fn run_with(
        &self,
        progress: &ProgressBar,
        mut on_failure: impl FnMut(&FileFailure),
    ) -> Result<BatchReport> {
        self.layout.prepare()?;

        let entries = list_sorted_entries(&self.layout.source)?;
        info!(
            "Starting batch in {:?}: {} entries, canvas {}x{}, quality {}",
            self.layout.source,
            entries.len(),
            self.params.width,
            self.params.height,
            self.params.quality
        );

        progress.set_length(entries.len() as u64);
        progress.set_message("Resizing Photos");

        let mut report = BatchReport::new(self.params);
        for entry in &entries {
            report.scanned += 1;
            if entry.is_file() && is_supported_image_name(&entry.name) {
                if let Some(failure) = self.process_entry(entry, &mut report) {
                    on_failure(&failure);
                    report.failures.push(failure);
                }
            } else {
                debug!("Skipping {:?}", entry.path);
                report.skipped += 1;
            }
            progress.inc(1);
        }
        progress.finish();

        info!(
            "Batch complete: resized={} archived={} skipped={} errors={}",
            report.resized,
            report.archived,
            report.skipped,
            report.failures.len()
        );
        Ok(report)
    }

    fn process_entry(&self, entry: &DirEntry, report: &mut BatchReport) -> Option<FileFailure> {
        let index = report.resized + 1;
        match self.resize_one(entry, index, report) {
            Ok(output) => {
                debug!("{} -> {:?}", entry.name, output);
                None
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", entry.path, e);
                Some(FileFailure {
                    name: entry.name.clone(),
                    message: e.to_string(),
                })
            }
        }
    }

    fn resize_one(
        &self,
        entry: &DirEntry,
        index: usize,
        report: &mut BatchReport,
    ) -> Result<PathBuf> {
        // nothing gets written for a file that could not be archived afterwards
        archive_destination(&self.layout.archive, &entry.file_name)?;

        let canvas = square_image_file(&entry.path, &self.params)?;
        let output = self.layout.output.join(format!("{index}.jpg"));
        write_rgb_jpeg(&output, &canvas, self.params.quality)?;
        report.resized += 1;

        move_into(&entry.path, &self.layout.archive, &entry.file_name)?;
        report.archived += 1;
        Ok(output)
    }
}

/// Run one batch over `root` with `Resized/` and `Original/` underneath it, without
/// drawing a progress bar.
pub fn resize_directory(root: &Path, params: ResizeParams) -> Result<BatchReport> {
    let resizer = BatchResizer::new(BatchLayout::in_dir(root), params)?;
    resizer.run(&ProgressBar::hidden())
}
