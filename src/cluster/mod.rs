//! Mock cluster assignment.
//!
//! None of the four advertised algorithms is implemented. Each
//! (algorithm, dataset shape) pair maps to a named assignment [`Strategy`]
//! through an explicit dispatch table: spectral and DBSCAN "see through"
//! non-convex shapes (half-index and radius splits match the true geometry)
//! while k-means and agglomerative fall back to a naive positional split, and
//! all four reduce to nearest-random-centroid on globular data. Adding a real
//! algorithm later means one new table entry and one new strategy.

pub mod assign;

use std::collections::HashMap;
use std::fmt;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dataset::Point;
use crate::metrics::Metrics;
use crate::rng::UniformSource;

/// Reserved cluster label for "not assigned to any cluster". Only the
/// DBSCAN-labeled path produces it.
pub const NOISE_LABEL: i64 = -1;

/// Radius split threshold used for circles by spectral and DBSCAN.
pub const RADIUS_SPLIT_THRESHOLD: f64 = 0.75;

/// Cluster count the DBSCAN mock uses on globular data.
pub const DBSCAN_MOCK_CLUSTERS: usize = 3;

/// Fraction of points the DBSCAN mock re-labels as noise on globular data.
pub const DBSCAN_NOISE_FRACTION: f64 = 0.05;

/// The four algorithms the demo pretends to run, in visualization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Spectral,
    KMeans,
    Agglomerative,
    Dbscan,
}

impl Algorithm {
    /// All algorithms in fixed visualization order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Spectral,
        Algorithm::KMeans,
        Algorithm::Agglomerative,
        Algorithm::Dbscan,
    ];

    /// Display label used in result records and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Spectral => "Spectral Clustering",
            Algorithm::KMeans => "K-Means",
            Algorithm::Agglomerative => "Agglomerative Clustering",
            Algorithm::Dbscan => "DBSCAN",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Linkage criterion accepted for agglomerative clustering.
///
/// Part of the configuration surface but never varies the computed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    #[default]
    Ward,
    Complete,
    Average,
    Single,
}

/// Spectral clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralParams {
    pub n_clusters: usize,
}

/// K-means configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansParams {
    pub n_clusters: usize,
}

/// Agglomerative clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgglomerativeParams {
    pub n_clusters: usize,
    pub linkage: Linkage,
}

/// DBSCAN configuration. `eps` is accepted but, like `linkage`, inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbscanParams {
    pub eps: f64,
}

/// The per-algorithm parameter bundle for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmParams {
    pub spectral: SpectralParams,
    pub kmeans: KMeansParams,
    pub agglomerative: AgglomerativeParams,
    pub dbscan: DbscanParams,
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        AlgorithmParams {
            spectral: SpectralParams { n_clusters: 2 },
            kmeans: KMeansParams { n_clusters: 3 },
            agglomerative: AgglomerativeParams {
                n_clusters: 3,
                linkage: Linkage::Ward,
            },
            dbscan: DbscanParams { eps: 0.5 },
        }
    }
}

impl AlgorithmParams {
    /// The parameter map recorded on a result for display.
    pub fn map_for(&self, algorithm: Algorithm) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        match algorithm {
            Algorithm::Spectral => {
                map.insert("n_clusters".to_string(), json!(self.spectral.n_clusters));
            }
            Algorithm::KMeans => {
                map.insert("n_clusters".to_string(), json!(self.kmeans.n_clusters));
            }
            Algorithm::Agglomerative => {
                map.insert(
                    "n_clusters".to_string(),
                    json!(self.agglomerative.n_clusters),
                );
                map.insert("linkage".to_string(), json!(self.agglomerative.linkage));
            }
            Algorithm::Dbscan => {
                map.insert("eps".to_string(), json!(self.dbscan.eps));
            }
        }
        map
    }
}

/// Shape class of the active dataset, the second axis of strategy dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetShape {
    Moons,
    Circles,
    /// Blob data and user uploads.
    Globular,
}

/// A named assignment strategy resolved from the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// First ⌊n/2⌋ points are cluster 0, the rest cluster 1.
    HalfSplit,
    /// Distance from origin above the threshold is cluster 0, else cluster 1.
    RadiusThreshold { threshold: f64 },
    /// k contiguous blocks of the x-sorted sequence.
    PositionalSplit { k: usize },
    /// Nearest of k pseudo-centroids drawn from the data.
    NearestCentroid { k: usize },
    /// Nearest-centroid plus random noise relabeling.
    NearestCentroidWithNoise { k: usize, fraction: f64 },
}

/// Resolve the assignment strategy for an algorithm/shape pair.
pub fn strategy_for(
    algorithm: Algorithm,
    shape: DatasetShape,
    params: &AlgorithmParams,
) -> Strategy {
    use Algorithm::*;
    use DatasetShape::*;

    match (algorithm, shape) {
        (Spectral, Moons) | (Dbscan, Moons) => Strategy::HalfSplit,
        (Spectral, Circles) | (Dbscan, Circles) => Strategy::RadiusThreshold {
            threshold: RADIUS_SPLIT_THRESHOLD,
        },
        (Spectral, Globular) => Strategy::NearestCentroid {
            k: params.spectral.n_clusters,
        },
        (KMeans, Moons) | (KMeans, Circles) => Strategy::PositionalSplit {
            k: params.kmeans.n_clusters,
        },
        (KMeans, Globular) => Strategy::NearestCentroid {
            k: params.kmeans.n_clusters,
        },
        (Agglomerative, Moons) | (Agglomerative, Circles) => Strategy::PositionalSplit {
            k: params.agglomerative.n_clusters,
        },
        (Agglomerative, Globular) => Strategy::NearestCentroid {
            k: params.agglomerative.n_clusters,
        },
        (Dbscan, Globular) => Strategy::NearestCentroidWithNoise {
            k: DBSCAN_MOCK_CLUSTERS,
            fraction: DBSCAN_NOISE_FRACTION,
        },
    }
}

/// Apply a resolved strategy to a point set in place.
pub fn apply_strategy(points: &mut [Point], strategy: Strategy, source: &mut dyn UniformSource) {
    match strategy {
        Strategy::HalfSplit => assign::half_split(points),
        Strategy::RadiusThreshold { threshold } => assign::radius_threshold(points, threshold),
        Strategy::PositionalSplit { k } => assign::positional_split(points, k),
        Strategy::NearestCentroid { k } => assign::nearest_random_centroid(points, k, source),
        Strategy::NearestCentroidWithNoise { k, fraction } => {
            assign::nearest_random_centroid(points, k, source);
            assign::scatter_noise(points, fraction, source);
        }
    }
}

/// The outcome of one mock algorithm run: labeled points, synthetic metrics,
/// and the parameters that were (nominally) in effect. Immutable after
/// creation; replaced wholesale on the next analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterResult {
    pub algorithm: Algorithm,
    pub data: Vec<Point>,
    pub metrics: Metrics,
    pub params: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        let params = AlgorithmParams::default();

        assert_eq!(
            strategy_for(Algorithm::Spectral, DatasetShape::Moons, &params),
            Strategy::HalfSplit
        );
        assert_eq!(
            strategy_for(Algorithm::Dbscan, DatasetShape::Circles, &params),
            Strategy::RadiusThreshold { threshold: 0.75 }
        );
        assert_eq!(
            strategy_for(Algorithm::KMeans, DatasetShape::Moons, &params),
            Strategy::PositionalSplit { k: 3 }
        );
        assert_eq!(
            strategy_for(Algorithm::Agglomerative, DatasetShape::Globular, &params),
            Strategy::NearestCentroid { k: 3 }
        );
        assert_eq!(
            strategy_for(Algorithm::Dbscan, DatasetShape::Globular, &params),
            Strategy::NearestCentroidWithNoise {
                k: 3,
                fraction: 0.05
            }
        );
    }

    #[test]
    fn test_params_map_contents() {
        let params = AlgorithmParams::default();

        let spectral = params.map_for(Algorithm::Spectral);
        assert_eq!(spectral["n_clusters"], json!(2));

        let agglo = params.map_for(Algorithm::Agglomerative);
        assert_eq!(agglo["n_clusters"], json!(3));
        assert_eq!(agglo["linkage"], json!("ward"));

        let dbscan = params.map_for(Algorithm::Dbscan);
        assert_eq!(dbscan["eps"], json!(0.5));
    }

    #[test]
    fn test_algorithm_serializes_as_label() {
        let json = serde_json::to_string(&Algorithm::KMeans).unwrap();
        assert_eq!(json, r#""K-Means""#);
    }

    #[test]
    fn test_linkage_round_trip() {
        let linkage: Linkage = serde_json::from_str(r#""complete""#).unwrap();
        assert_eq!(linkage, Linkage::Complete);
        assert_eq!(serde_json::to_string(&linkage).unwrap(), r#""complete""#);
    }
}
