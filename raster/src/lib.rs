//! False-color rendering of 2-D sample arrays.
//!
//! Maps `Array2<u8>` sample data through a named colormap to an RGB raster,
//! upscales it by an integer pixel-size factor, and encodes it as PNG bytes.
//! Also provides the synthetic test-pattern generators, the tagged UI event
//! reducer driving the interactive viewer, and a plain-text stdin reader for
//! external array data.

pub mod colormap;
pub mod config;
pub mod controller;
pub mod error;
pub mod generators;
pub mod input;
pub mod render;

// Re-export commonly used types for external use
pub use crate::colormap::Colormap;
pub use crate::controller::{reduce, EventOutcome, RenderOptions, ViewerEvent};
pub use crate::error::{RasterError, Result};
pub use crate::render::render;
