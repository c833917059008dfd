pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod error;
pub mod metric;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Labels = Array1<i64>;

pub use cluster::{DBSCAN, NOISE};
pub use error::{Error, Result};
pub use metric::{Distance, Euclidean, Haversine, Manhattan};
