//! Process-wide limits and defaults shared by the renderer, the event
//! reducer, and the command-line layer.

/// Largest supported pixel block size for a single array cell.
pub const MAX_PIXEL_SIZE: u32 = 5;

/// Pixel size used when none is requested.
pub const DEFAULT_PIXEL_SIZE: u32 = 1;

/// Default (rows, cols) shape for the synthetic test patterns.
pub const DEFAULT_SHAPE: (usize, usize) = (1024, 512);
