//! Run orchestration: dataset acquisition, the four mock runs, commentary.
//!
//! A run is strictly sequential. Dataset acquisition, the four assignment
//! strategies, and metric synthesis execute inline; the commentary call is the
//! only suspension point. Each run builds entirely new state, so nothing is
//! shared or locked across runs.

mod commentary;

pub use self::commentary::{CommentaryProvider, UnconfiguredProvider};

use crate::cluster::{self, Algorithm, AlgorithmParams, ClusterResult, DatasetShape};
use crate::dataset::{self, DatasetType, Point};
use crate::error::Result;
use crate::metrics::{self, Metrics};
use crate::rng::UniformSource;

/// One analysis request.
#[derive(Debug, Clone)]
pub enum RunRequest {
    /// Generate a synthetic dataset of the given type.
    Synthetic {
        dataset: DatasetType,
        n_samples: usize,
    },
    /// Cluster the body of an uploaded CSV file.
    Upload {
        name: String,
        contents: String,
        drop_last_column: bool,
    },
}

impl RunRequest {
    /// Human-readable dataset name for results and commentary.
    pub fn dataset_label(&self) -> String {
        match self {
            RunRequest::Synthetic { dataset, .. } => dataset.label().to_string(),
            RunRequest::Upload { name, .. } => name.clone(),
        }
    }

    fn shape(&self) -> DatasetShape {
        match self {
            RunRequest::Synthetic { dataset, .. } => dataset.shape(),
            RunRequest::Upload { .. } => DatasetShape::Globular,
        }
    }
}

/// The four results plus the per-field metric maxima used for display scaling.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub results: Vec<ClusterResult>,
    pub maxima: Metrics,
}

/// Run the four mock algorithms over one point set.
///
/// Results come back in fixed order (spectral, k-means, agglomerative,
/// DBSCAN), each over its own copy of the points. Infallible on valid input;
/// a panic here is a programming error and propagates.
pub fn analyze_points(
    points: &[Point],
    params: &AlgorithmParams,
    shape: DatasetShape,
    source: &mut dyn UniformSource,
) -> AnalysisReport {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    let mut maxima = Metrics::neg_infinity();

    for algorithm in Algorithm::ALL {
        let strategy = cluster::strategy_for(algorithm, shape, params);
        log::debug!("{}: applying {:?}", algorithm, strategy);

        let mut data = points.to_vec();
        cluster::apply_strategy(&mut data, strategy, source);

        let metrics = metrics::synthesize(source);
        maxima = maxima.fold_max(&metrics);

        results.push(ClusterResult {
            algorithm,
            data,
            metrics,
            params: params.map_for(algorithm),
        });
    }

    AnalysisReport { results, maxima }
}

/// Aggregated output of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset_label: String,
    pub results: Vec<ClusterResult>,
    pub maxima: Metrics,
    pub commentary: String,
}

/// The run lifecycle, passed by value rather than mutated piecemeal so a
/// reader can never observe a half-updated mix of old and new results.
#[derive(Debug, Clone)]
pub enum RunState {
    Idle,
    Loading,
    Loaded(RunOutput),
    Failed(String),
}

impl RunState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, RunState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunState::Failed(_))
    }
}

/// Owns the run lifecycle for one demo client.
///
/// Rapid repeated run requests supersede each other: every run stamps a
/// generation, and only the run whose generation is still current commits its
/// terminal state, so only the latest request's results are ever applied.
pub struct Session {
    state: RunState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: RunState::Idle,
            generation: 0,
        }
    }

    /// Current run state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Execute one end-to-end run.
    ///
    /// Dataset-acquisition failures (empty dataset, CSV parse error) are fatal
    /// to the run and land in [`RunState::Failed`] with no partial results.
    /// Commentary failures never are: whatever text the provider returns,
    /// error-shaped or not, is stored verbatim.
    pub async fn run(
        &mut self,
        request: RunRequest,
        params: &AlgorithmParams,
        provider: &dyn CommentaryProvider,
        source: &mut dyn UniformSource,
    ) -> &RunState {
        self.generation += 1;
        let generation = self.generation;
        // Entering Loading clears prior results, errors, and commentary.
        self.state = RunState::Loading;
        log::debug!("run {}: {}", generation, request.dataset_label());

        let points = match acquire(&request, source) {
            Ok(points) if points.is_empty() => {
                log::warn!("run {}: dataset yielded no points", generation);
                return self.commit(
                    generation,
                    RunState::Failed("failed to load dataset".to_string()),
                );
            }
            Ok(points) => points,
            Err(err) => {
                log::warn!("run {}: {}", generation, err);
                return self.commit(generation, RunState::Failed(err.to_string()));
            }
        };

        let report = analyze_points(&points, params, request.shape(), source);
        let commentary = provider.analyze(&report.results, &request.dataset_label()).await;

        self.commit(
            generation,
            RunState::Loaded(RunOutput {
                dataset_label: request.dataset_label(),
                results: report.results,
                maxima: report.maxima,
                commentary,
            }),
        )
    }

    fn commit(&mut self, generation: u64, state: RunState) -> &RunState {
        if generation == self.generation {
            self.state = state;
        } else {
            log::debug!("run {}: superseded, discarding result", generation);
        }
        &self.state
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn acquire(request: &RunRequest, source: &mut dyn UniformSource) -> Result<Vec<Point>> {
    match request {
        RunRequest::Synthetic { dataset, n_samples } => {
            Ok(dataset::generate(*dataset, *n_samples, source))
        }
        RunRequest::Upload {
            contents,
            drop_last_column,
            ..
        } => dataset::parse_points(contents, *drop_last_column),
    }
}
