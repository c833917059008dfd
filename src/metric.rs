use ndarray::ArrayView1;

/// Pairwise distance between two points of equal dimension.
///
/// Implementations must be symmetric for neighborhood queries to behave
/// sensibly; nothing here enforces it. `Sync` so neighbor scans can fan
/// out across worker threads.
pub trait Distance: Sync {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64;
}

/// Straight-line (L2) distance. The default metric.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}

/// Taxicab (L1) distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Distance for Manhattan {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

/// Great-circle distance in kilometres between `[latitude, longitude]`
/// pairs given in degrees. Expects points of dimension 2.
#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

const EARTH_RADIUS_KM: f64 = 6367.0;

impl Distance for Haversine {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        let (lat1, lon1) = (a[0].to_radians(), a[1].to_radians());
        let (lat2, lon2) = (b[0].to_radians(), b[1].to_radians());
        let half_dlat = (lat2 - lat1) / 2.0;
        let half_dlon = (lon2 - lon1) / 2.0;
        let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

/// Any plain function over two point views works as a metric.
impl<F> Distance for F
where
    F: Sync + for<'a, 'b> Fn(ArrayView1<'a, f64>, ArrayView1<'b, f64>) -> f64,
{
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        self(a, b)
    }
}
