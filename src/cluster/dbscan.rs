use crate::error::{Error, Result};
use crate::metric::{Distance, Euclidean};
use crate::{Labels, Matrix};
use log::debug;
use ndarray::ArrayView2;
use std::collections::{HashSet, VecDeque};

/// Label assigned to points that are density-reachable from no core point.
pub const NOISE: i64 = -1;

#[derive(Clone, Debug)]
pub struct DBSCAN<M = Euclidean> {
    pub labels: Option<Labels>,
    pub core_sample_indices: Option<Vec<usize>>,
    eps: f64,
    min_points: usize,
    metric: M,
}

impl DBSCAN<Euclidean> {
    pub fn new(eps: f64, min_points: usize) -> Result<Self> {
        if eps < 0.0 || eps.is_nan() {
            return Err(Error::InvalidEpsilon { got: eps });
        }
        if min_points < 1 {
            return Err(Error::InvalidMinPoints { got: min_points });
        }

        Ok(Self {
            labels: None,
            core_sample_indices: None,
            eps,
            min_points,
            metric: Euclidean,
        })
    }
}

impl<M: Distance> DBSCAN<M> {
    /// Swaps in a different metric, dropping any stored result.
    pub fn with_metric<M2: Distance>(self, metric: M2) -> DBSCAN<M2> {
        DBSCAN {
            labels: None,
            core_sample_indices: None,
            eps: self.eps,
            min_points: self.min_points,
            metric,
        }
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn min_points(&self) -> usize {
        self.min_points
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        self.labels = None;
        self.core_sample_indices = None;

        let n = x.nrows();
        if n == 0 {
            self.labels = Some(Labels::from_elem(0, NOISE));
            self.core_sample_indices = Some(Vec::new());
            return Ok(());
        }
        if x.ncols() == 0 {
            return Err(Error::ZeroDimension);
        }

        debug!(
            "clustering {} points of dimension {} (eps={}, min_points={})",
            n,
            x.ncols(),
            self.eps,
            self.min_points
        );

        let x = x.view();
        let mut cache = self.neighbor_cache(&x, n);
        let mut visited = vec![false; n];
        let mut clusters: Vec<Vec<usize>> = Vec::new();
        let mut cores: Vec<usize> = Vec::new();

        for p in 0..n {
            if visited[p] {
                continue;
            }
            let reach = self.cached_neighbors(&x, &mut cache, p);
            if reach.len() + 1 < self.min_points {
                // Not core. Left unvisited so a later expansion can still
                // absorb it as a border point.
                continue;
            }
            let mut queue: VecDeque<usize> = reach.iter().copied().collect();
            visited[p] = true;
            cores.push(p);
            let mut cluster = vec![p];

            while let Some(q) = queue.pop_front() {
                if visited[q] {
                    continue;
                }
                visited[q] = true;
                cluster.push(q);
                let reach = self.cached_neighbors(&x, &mut cache, q);
                // Only core points extend the frontier; border points join
                // the cluster but contribute no further reach.
                if reach.len() + 1 >= self.min_points {
                    cores.push(q);
                    queue.extend(reach.iter().copied());
                }
            }

            clusters.push(cluster);
        }

        let mut labels = Labels::from_elem(n, NOISE);
        for (cluster_id, members) in clusters.iter().enumerate() {
            for &idx in members {
                labels[idx] = cluster_id as i64;
            }
        }
        cores.sort_unstable();

        debug!(
            "discovered {} clusters, {} noise points",
            clusters.len(),
            labels.iter().filter(|&&label| label == NOISE).count()
        );

        self.labels = Some(labels);
        self.core_sample_indices = Some(cores);

        Ok(())
    }

    pub fn fit_predict(&mut self, x: &Matrix) -> Result<Labels> {
        self.fit(x)?;
        Ok(self.labels.clone().expect("fit stores labels on success"))
    }

    pub fn n_clusters(&self) -> Option<usize> {
        self.labels.as_ref().map(|labels| {
            let unique: HashSet<i64> = labels
                .iter()
                .copied()
                .filter(|&label| label >= 0)
                .collect();
            unique.len()
        })
    }

    pub fn n_noise_points(&self) -> Option<usize> {
        self.labels
            .as_ref()
            .map(|labels| labels.iter().filter(|&&label| label == NOISE).count())
    }

    pub fn is_core_sample(&self, index: usize) -> Option<bool> {
        self.core_sample_indices
            .as_ref()
            .map(|cores| cores.binary_search(&index).is_ok())
    }

    #[cfg(not(feature = "rayon"))]
    fn neighbor_cache(&self, _x: &ArrayView2<'_, f64>, n: usize) -> Vec<Option<Vec<usize>>> {
        vec![None; n]
    }

    // Neighbor sets are independent of one another, so with rayon enabled
    // the whole cache is filled up front in parallel; expansion stays
    // sequential and sees identical contents either way.
    #[cfg(feature = "rayon")]
    fn neighbor_cache(&self, x: &ArrayView2<'_, f64>, n: usize) -> Vec<Option<Vec<usize>>> {
        use rayon::prelude::*;

        (0..n)
            .into_par_iter()
            .map(|p| Some(self.region_scan(x, p)))
            .collect()
    }

    fn cached_neighbors<'a>(
        &self,
        x: &ArrayView2<'_, f64>,
        cache: &'a mut [Option<Vec<usize>>],
        p: usize,
    ) -> &'a [usize] {
        cache[p].get_or_insert_with(|| self.region_scan(x, p))
    }

    fn region_scan(&self, x: &ArrayView2<'_, f64>, p: usize) -> Vec<usize> {
        let mut neighbors = Vec::new();
        for q in 0..x.nrows() {
            if q == p {
                continue;
            }
            if self.metric.distance(x.row(p), x.row(q)) < self.eps {
                neighbors.push(q);
            }
        }
        neighbors
    }
}
