//! Core processing building blocks: dimension math, resampling, canvas padding,
//! and the per-image pipeline. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
