//! I/O layer: directory preparation, sorted listings and archive moves (`fs`),
//! plus `writers` for JPEG outputs and JSON batch reports.
pub mod fs;
pub mod writers;
