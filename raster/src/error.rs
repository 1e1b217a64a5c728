use thiserror::Error;

/// Errors produced by array generation, rendering, and ingest.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Pixel size outside the supported range.
    #[error("pixel size {got} outside supported range 1..={max}")]
    PixelSizeOutOfRange {
        /// Requested pixel size.
        got: u32,
        /// Largest supported pixel size.
        max: u32,
    },

    /// Colormap name not in the supported set.
    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),

    /// Array shape with a zero dimension.
    #[error("array shape must have positive dimensions, got {rows}x{cols}")]
    EmptyShape {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Array input that does not follow the text format.
    #[error("malformed array input: {0}")]
    MalformedInput(String),

    /// Underlying image encode failure.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// I/O failure while reading array data.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Standard Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
