//! Plain-text array ingest.
//!
//! The external-input format is deliberately minimal: one array row per
//! line, cells as whitespace-separated integers in 0..=255. A `#` starts a
//! comment running to the end of the line; blank lines are skipped. All
//! rows must have the same length.

use std::io::BufRead;

use ndarray::Array2;

use crate::error::{RasterError, Result};

/// Read a sample array from a buffered reader (typically stdin).
///
/// # Errors
/// [`RasterError::MalformedInput`] on unparsable or out-of-range cells,
/// ragged rows, or empty input; [`RasterError::Io`] on read failure.
pub fn read_array<R: BufRead>(reader: R) -> Result<Array2<u8>> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("");

        let mut cells = Vec::new();
        for token in content.split_whitespace() {
            let value: u16 = token.parse().map_err(|_| {
                RasterError::MalformedInput(format!(
                    "line {}: '{}' is not an unsigned integer",
                    index + 1,
                    token
                ))
            })?;
            if value > 255 {
                return Err(RasterError::MalformedInput(format!(
                    "line {}: value {} outside 0..=255",
                    index + 1,
                    value
                )));
            }
            cells.push(value as u8);
        }

        if cells.is_empty() {
            continue;
        }
        if let Some(first) = rows.first() {
            if cells.len() != first.len() {
                return Err(RasterError::MalformedInput(format!(
                    "line {}: row has {} values, expected {}",
                    index + 1,
                    cells.len(),
                    first.len()
                )));
            }
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(RasterError::MalformedInput(
            "no array rows in input".to_string(),
        ));
    }

    let height = rows.len();
    let width = rows[0].len();
    let flat: Vec<u8> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat)
        .map_err(|e| RasterError::MalformedInput(e.to_string()))
}
