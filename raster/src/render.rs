//! Array-to-image rendering.
//!
//! Converts a 2-D sample array to an RGB raster by normalizing cell values
//! over the array's own [min, max] range and mapping each cell through the
//! selected colormap, then upscales by an integer pixel-size factor with
//! nearest-neighbor filtering so every cell becomes a solid block.
//!
//! # Coordinate System Conversions
//!
//! - **ndarray**: matrix indexing [row, col] = [y, x] with (height, width)
//!   dimensions
//! - **image crate**: graphics indexing (x, y) with (width, height)
//!   dimensions
//!
//! Rendering is a pure function of its inputs: fixed (array, pixel size,
//! colormap) produce byte-identical PNG output.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;

use crate::colormap::Colormap;
use crate::config::MAX_PIXEL_SIZE;
use crate::error::{RasterError, Result};

/// Render a sample array to an RGB image.
///
/// Arguments are validated before any rendering work: `pixel_size` must lie
/// in `1..=MAX_PIXEL_SIZE` and the array must have positive dimensions.
///
/// # Arguments
/// * `data` - 2D array of u8 sample values
/// * `pixel_size` - Integer scale factor applied to both dimensions
/// * `colormap` - Colormap applied to the normalized cell values
///
/// # Returns
/// RgbImage of dimensions (cols x pixel_size, rows x pixel_size)
pub fn render_rgb(data: &Array2<u8>, pixel_size: u32, colormap: Colormap) -> Result<RgbImage> {
    if pixel_size < 1 || pixel_size > MAX_PIXEL_SIZE {
        return Err(RasterError::PixelSizeOutOfRange {
            got: pixel_size,
            max: MAX_PIXEL_SIZE,
        });
    }

    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return Err(RasterError::EmptyShape { rows, cols });
    }

    // Normalize over the array's own value range; a constant array maps to
    // the low end of the gradient.
    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);
    let span = (max - min) as f64;

    let gradient = colormap.gradient();
    let mut img = RgbImage::new(cols as u32, rows as u32);
    for ((row, col), &value) in data.indexed_iter() {
        let t = if span > 0.0 {
            (value - min) as f64 / span
        } else {
            0.0
        };
        let [r, g, b, _] = gradient.at(t).to_rgba8();
        img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
    }

    if pixel_size > 1 {
        img = imageops::resize(
            &img,
            cols as u32 * pixel_size,
            rows as u32 * pixel_size,
            FilterType::Nearest,
        );
    }

    Ok(img)
}

/// Encode an RGB image as PNG bytes.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Render a sample array straight to encoded PNG bytes.
///
/// Composition of [`render_rgb`] and [`encode_png`]; the output image has
/// pixel dimensions (cols x pixel_size, rows x pixel_size).
pub fn render(data: &Array2<u8>, pixel_size: u32, colormap: Colormap) -> Result<Vec<u8>> {
    encode_png(&render_rgb(data, pixel_size, colormap)?)
}
