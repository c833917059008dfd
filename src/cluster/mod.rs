//! Density-based clustering.
//!
//! This module provides `DBSCAN`: density-based clustering that grows
//! clusters of arbitrary shape out of dense neighborhoods and labels
//! low-density outliers as noise (`NOISE`, -1).
//!
//! # Examples
//!
//! ```rust
//! use denscan::{DBSCAN, NOISE};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // Outlier
//! ];
//!
//! let mut dbscan = DBSCAN::new(1.0, 2).unwrap(); // eps=1.0, min_points=2
//! let labels = dbscan.fit_predict(&x).unwrap();
//!
//! // Cluster IDs count up from 0 in discovery order; the outlier is noise.
//! assert_eq!(labels, array![0, 0, 0, 1, 1, 1, NOISE]);
//!
//! let n_clusters = dbscan.n_clusters().unwrap();
//! println!("Number of clusters: {}", n_clusters);
//!
//! let n_noise = dbscan.n_noise_points().unwrap();
//! println!("Number of noise points: {}", n_noise);
//! ```
//!
//! Any symmetric distance function can replace the Euclidean default, for
//! example great-circle kilometres over latitude/longitude pairs:
//!
//! ```rust
//! use denscan::{DBSCAN, Haversine};
//! use ndarray::array;
//!
//! let cities = array![
//!     [51.5074, -0.1278], // London
//!     [51.5000, -0.1200],
//!     [48.8566, 2.3522],  // Paris
//!     [48.8600, 2.3400],
//! ];
//!
//! let mut dbscan = DBSCAN::new(10.0, 2).unwrap().with_metric(Haversine);
//! let labels = dbscan.fit_predict(&cities).unwrap();
//! assert_eq!(labels, array![0, 0, 1, 1]);
//! ```

mod dbscan;

pub use dbscan::{DBSCAN, NOISE};
