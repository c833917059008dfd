use crate::Matrix;
use crate::error::{Error, Result};
use ndarray::{Array1, Axis};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Distribution, Normal};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

/// Builds an N x D point matrix from row records, validating that every
/// row has the same non-zero length.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    if rows.is_empty() {
        return Ok(Matrix::zeros((0, 0)));
    }
    let dim = rows[0].len();
    if dim == 0 {
        return Err(Error::ZeroDimension);
    }
    for (index, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(Error::DimensionMismatch {
                index,
                expected: dim,
                found: row.len(),
            });
        }
    }
    Ok(Matrix::from_shape_fn((rows.len(), dim), |(i, j)| rows[i][j]))
}

/// Treats a sequence of N scalars as N points of dimension 1.
pub fn from_scalars(values: &[f64]) -> Matrix {
    Array1::from_iter(values.iter().copied()).insert_axis(Axis(1))
}

/// Two interleaving half-circle point sets with optional Gaussian jitter
/// of standard deviation `noise`. Deterministic for a fixed seed.
pub fn make_moons(n_samples: usize, noise: f64, seed: u64) -> Matrix {
    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;
    let mut points = Matrix::zeros((n_samples, 2));

    for (i, t) in Array1::linspace(0.0, PI, n_outer).iter().enumerate() {
        points[[i, 0]] = t.cos();
        points[[i, 1]] = t.sin();
    }
    for (i, t) in Array1::linspace(0.0, PI, n_inner).iter().enumerate() {
        points[[n_outer + i, 0]] = 1.0 - t.cos();
        points[[n_outer + i, 1]] = 0.5 - t.sin();
    }

    if noise > 0.0 {
        let gaussian = Normal::new(0.0, noise).expect("standard deviation is positive");
        let mut rng = StdRng::seed_from_u64(seed);
        points += &Matrix::random_using((n_samples, 2), gaussian, &mut rng);
    }
    points
}

/// Isotropic Gaussian blobs of `samples_per_center` points around each
/// center row. `spread` must be non-negative. Deterministic for a fixed
/// seed.
pub fn make_blobs(centers: &Matrix, samples_per_center: usize, spread: f64, seed: u64) -> Matrix {
    let dim = centers.ncols();
    let gaussian = Normal::new(0.0, spread).expect("standard deviation is non-negative");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Matrix::zeros((centers.nrows() * samples_per_center, dim));
    for (b, center) in centers.rows().into_iter().enumerate() {
        for s in 0..samples_per_center {
            let i = b * samples_per_center + s;
            for (j, &c) in center.iter().enumerate() {
                points[[i, j]] = c + gaussian.sample(&mut rng);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{Distance, Euclidean};
    use ndarray::array;

    #[test]
    fn test_from_rows() {
        let x = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(x.shape(), &[3, 2]);
        assert_eq!(x[[2, 1]], 6.0);
    }

    #[test]
    fn test_from_rows_empty() {
        let x = from_rows(&[]).unwrap();
        assert_eq!(x.nrows(), 0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_zero_dimension() {
        let err = from_rows(&[vec![], vec![]]).unwrap_err();
        assert_eq!(err, Error::ZeroDimension);
    }

    #[test]
    fn test_from_scalars() {
        let x = from_scalars(&[1.0, 2.0, 4.0]);
        assert_eq!(x.shape(), &[3, 1]);
        assert_eq!(x[[2, 0]], 4.0);
    }

    #[test]
    fn test_make_moons_shape_and_determinism() {
        let a = make_moons(101, 0.05, 7);
        let b = make_moons(101, 0.05, 7);
        assert_eq!(a.shape(), &[101, 2]);
        assert_eq!(a, b);
        assert_ne!(a, make_moons(101, 0.05, 8));
    }

    #[test]
    fn test_make_moons_noiseless_geometry() {
        let x = make_moons(200, 0.0, 0);

        // The outer moon sits on the unit circle.
        for row in x.rows().into_iter().take(100) {
            let r = (row[0] * row[0] + row[1] * row[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }

        // The moons approach each other but never closer than 0.5.
        let mut min_gap = f64::INFINITY;
        for i in 0..100 {
            for j in 100..200 {
                let d = Euclidean.distance(x.row(i), x.row(j));
                min_gap = min_gap.min(d);
            }
        }
        assert!(min_gap >= 0.5 - 1e-9 && min_gap < 0.6, "gap {min_gap}");
    }

    #[test]
    fn test_make_blobs_stay_near_their_centers() {
        let centers = array![[0.0, 0.0], [10.0, 10.0]];
        let x = make_blobs(&centers, 25, 0.5, 3);
        assert_eq!(x.shape(), &[50, 2]);
        for (i, row) in x.rows().into_iter().enumerate() {
            let d = Euclidean.distance(row, centers.row(i / 25));
            assert!(d < 4.0, "sample {i} strayed {d} from its center");
        }
    }
}
