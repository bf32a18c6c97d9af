//! Synthetic quality metrics.
//!
//! The three scores are drawn at random on every call and carry no
//! relationship to the actual cluster geometry; they exist purely to populate
//! the demo's metric panel. Tests may verify ranges and rounding, never
//! correctness relative to the input points.

use serde::{Deserialize, Serialize};

use crate::rng::UniformSource;

const SILHOUETTE_RANGE: (f64, f64) = (-0.6, 1.0);
const CALINSKI_HARABASZ_RANGE: (f64, f64) = (50.0, 550.0);
const DAVIES_BOULDIN_RANGE: (f64, f64) = (0.3, 1.8);

/// The metric triple shown for each algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub silhouette: f64,
    pub calinski_harabasz: f64,
    pub davies_bouldin: f64,
}

impl Metrics {
    /// The identity for [`Metrics::fold_max`]: negative infinity per field.
    pub fn neg_infinity() -> Self {
        Metrics {
            silhouette: f64::NEG_INFINITY,
            calinski_harabasz: f64::NEG_INFINITY,
            davies_bouldin: f64::NEG_INFINITY,
        }
    }

    /// Per-field maximum of `self` and `other`.
    pub fn fold_max(&self, other: &Metrics) -> Metrics {
        Metrics {
            silhouette: self.silhouette.max(other.silhouette),
            calinski_harabasz: self.calinski_harabasz.max(other.calinski_harabasz),
            davies_bouldin: self.davies_bouldin.max(other.davies_bouldin),
        }
    }
}

fn draw(range: (f64, f64), source: &mut dyn UniformSource) -> f64 {
    let value = range.0 + source.next_uniform() * (range.1 - range.0);
    (value * 1000.0).round() / 1000.0
}

/// Draw a fresh metric triple; the clustered points are deliberately not
/// consulted. Fields are drawn in declaration order (silhouette, CH, DB) so a
/// recorded source replays exactly.
pub fn synthesize(source: &mut dyn UniformSource) -> Metrics {
    Metrics {
        silhouette: draw(SILHOUETTE_RANGE, source),
        calinski_harabasz: draw(CALINSKI_HARABASZ_RANGE, source),
        davies_bouldin: draw(DAVIES_BOULDIN_RANGE, source),
    }
}
