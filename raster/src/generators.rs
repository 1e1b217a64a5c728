//! Synthetic sample arrays for demonstration and testing.
//!
//! All generators take a `(rows, cols)` shape and produce an `Array2<u8>`.
//! Values wrap modulo 256, so the gradients repeat on shapes wider or taller
//! than one value period.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{RasterError, Result};

/// Uniform random cells over [0, 256), seeded from thread-local entropy.
pub fn random(size: (usize, usize)) -> Result<Array2<u8>> {
    let mut rng = rand::thread_rng();
    sample_uniform(size, &mut rng)
}

/// Deterministic variant of [`random`] for reproducible output.
///
/// # Arguments
/// * `size` - Tuple of (rows, cols) for the output array dimensions
/// * `seed` - Random seed for deterministic output
pub fn random_seeded(size: (usize, usize), seed: u64) -> Result<Array2<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_uniform(size, &mut rng)
}

/// Horizontal ramp: cell value = column index mod 256, constant down rows.
pub fn horizontal(size: (usize, usize)) -> Result<Array2<u8>> {
    check_shape(size)?;
    Ok(Array2::from_shape_fn(size, |(_, col)| (col % 256) as u8))
}

/// Vertical ramp: cell value = row index mod 256, constant across columns.
pub fn vertical(size: (usize, usize)) -> Result<Array2<u8>> {
    check_shape(size)?;
    Ok(Array2::from_shape_fn(size, |(row, _)| (row % 256) as u8))
}

fn sample_uniform<R: Rng>(size: (usize, usize), rng: &mut R) -> Result<Array2<u8>> {
    check_shape(size)?;
    Ok(Array2::from_shape_fn(size, |_| rng.gen()))
}

fn check_shape((rows, cols): (usize, usize)) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(RasterError::EmptyShape { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_rows_are_column_ramps() {
        let data = horizontal((4, 8)).unwrap();
        assert_eq!(data.dim(), (4, 8));
        for row in data.rows() {
            let values: Vec<u8> = row.iter().copied().collect();
            assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn test_vertical_columns_are_row_ramps() {
        let data = vertical((4, 8)).unwrap();
        assert_eq!(data.dim(), (4, 8));
        for col in data.columns() {
            let values: Vec<u8> = col.iter().copied().collect();
            assert_eq!(values, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_ramps_wrap_modulo_256() {
        let data = horizontal((1, 300)).unwrap();
        assert_eq!(data[[0, 255]], 255);
        assert_eq!(data[[0, 256]], 0);
        assert_eq!(data[[0, 299]], 43);

        let data = vertical((300, 1)).unwrap();
        assert_eq!(data[[255, 0]], 255);
        assert_eq!(data[[256, 0]], 0);
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let a = random_seeded((16, 16), 42).unwrap();
        let b = random_seeded((16, 16), 42).unwrap();
        assert_eq!(a, b);

        let c = random_seeded((16, 16), 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_has_expected_shape() {
        let data = random((7, 3)).unwrap();
        assert_eq!(data.dim(), (7, 3));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        for size in [(0, 8), (4, 0), (0, 0)] {
            assert!(matches!(
                horizontal(size),
                Err(RasterError::EmptyShape { .. })
            ));
            assert!(matches!(vertical(size), Err(RasterError::EmptyShape { .. })));
            assert!(matches!(
                random_seeded(size, 1),
                Err(RasterError::EmptyShape { .. })
            ));
        }
    }
}
