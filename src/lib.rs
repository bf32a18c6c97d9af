//! Computational core of a browser-based 2D clustering demo.
//!
//! The crate generates synthetic point datasets (moons, blobs, circles),
//! ingests user-uploaded CSV data, assigns mock cluster labels that imitate
//! four well-known clustering algorithms, synthesizes pseudo-random quality
//! metrics, and aggregates everything into per-algorithm result records plus
//! natural-language commentary from a pluggable provider.
//!
//! None of the advertised algorithms (spectral, k-means, agglomerative,
//! DBSCAN) is actually implemented. Labels come from simple geometric
//! heuristics chosen per algorithm/dataset pair so that spectral and DBSCAN
//! appear to handle non-convex shapes while k-means and agglomerative appear
//! to fail on them. Metrics are random draws with no relationship to the
//! points. This is a deliberate illusion for illustration, not analysis.

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod rng;
pub mod session;

// Re-exports for convenience
pub use cluster::{
    strategy_for, Algorithm, AlgorithmParams, ClusterResult, DatasetShape, Linkage, Strategy,
    NOISE_LABEL,
};
pub use dataset::{generate, parse_points, DatasetType, Point};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use rng::{EntropySource, FixedSource, SeededSource, UniformSource};
pub use session::{
    analyze_points, AnalysisReport, CommentaryProvider, RunOutput, RunRequest, RunState, Session,
    UnconfiguredProvider,
};
