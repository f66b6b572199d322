#![doc = r#"
squarepad — batch-resize a directory of photos onto fixed-size white canvases.

Every `.jpg`, `.jpeg`, `.png` and `.bmp` file at the top level of a directory is shrunk to
fit the target size, enlarged again if it ended up smaller than the canvas, centered on a
white background and written as `Resized/1.jpg`, `Resized/2.jpg`, ... in name order. The
untouched original is moved into `Original/`. A file that fails is reported and skipped;
the rest of the batch carries on.

Quick start
-----------
```rust,no_run
use std::path::Path;
use squarepad::{ResizeParams, resize_directory};

fn main() -> squarepad::Result<()> {
    let report = resize_directory(Path::new("/photos"), ResizeParams::square(1080, 80))?;
    println!("resized={} archived={}", report.resized, report.archived);
    for failure in &report.failures {
        eprintln!("{}: {}", failure.name, failure.message);
    }
    Ok(())
}
```

With a progress bar and a custom layout
---------------------------------------
```rust,no_run
use std::path::PathBuf;
use indicatif::ProgressBar;
use squarepad::{BatchLayout, BatchResizer, Overflow, ResizeParams};

fn main() -> squarepad::Result<()> {
    let layout = BatchLayout {
        source: PathBuf::from("/incoming"),
        output: PathBuf::from("/outgoing"),
        archive: PathBuf::from("/incoming/done"),
    };
    let params = ResizeParams::square(512, 90).with_overflow(Overflow::Contain);
    let resizer = BatchResizer::new(layout, params)?;
    let report = resizer.run(&ProgressBar::new(0))?;
    println!("{report:?}");
    Ok(())
}
```

Useful modules
--------------
- [`api`] — batch entry points.
- [`core`] — dimension math, canvas padding and the per-image pipeline.
- [`io`] — directory handling and writers (JPEG, JSON reports).
- [`capabilities`] — startup decoder check.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod capabilities;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{DEFAULT_QUALITY, ResizeParams};
pub use crate::core::processing::padding::RgbCanvas;
pub use crate::core::processing::pipeline::{square_image_file, square_rgb_image};
pub use error::{Error, Result};
pub use types::{Overflow, SUPPORTED_EXTENSIONS, is_supported_image_name};

pub use api::{
    ARCHIVE_DIR_NAME, BatchLayout, BatchReport, BatchResizer, FileFailure, OUTPUT_DIR_NAME,
    resize_directory,
};
pub use io::writers::report::write_batch_report;
