use async_trait::async_trait;
use clusterlab::{
    AlgorithmParams, ClusterResult, CommentaryProvider, DatasetType, EntropySource, RunRequest,
    RunState, Session, UnconfiguredProvider,
};

struct CannedProvider(&'static str);

#[async_trait]
impl CommentaryProvider for CannedProvider {
    async fn analyze(&self, _results: &[ClusterResult], _dataset_name: &str) -> String {
        self.0.to_string()
    }
}

#[tokio::test]
async fn test_synthetic_run_reaches_loaded() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();
    let provider = CannedProvider("The clusters look separable.");

    let state = session
        .run(
            RunRequest::Synthetic {
                dataset: DatasetType::Moons,
                n_samples: 120,
            },
            &params,
            &provider,
            &mut source,
        )
        .await;

    match state {
        RunState::Loaded(output) => {
            assert_eq!(output.dataset_label, "Moons");
            assert_eq!(output.results.len(), 4);
            assert_eq!(output.commentary, "The clusters look separable.");
            for r in &output.results {
                assert_eq!(r.data.len(), 120);
            }
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_dataset_fails_the_run() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();

    let state = session
        .run(
            RunRequest::Synthetic {
                dataset: DatasetType::Custom,
                n_samples: 200,
            },
            &params,
            &UnconfiguredProvider,
            &mut source,
        )
        .await;

    match state {
        RunState::Failed(message) => assert_eq!(message, "failed to load dataset"),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_upload_fails_before_clustering() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();

    let state = session
        .run(
            RunRequest::Upload {
                name: "upload.csv".to_string(),
                contents: "just_a_header".to_string(),
                drop_last_column: false,
            },
            &params,
            &UnconfiguredProvider,
            &mut source,
        )
        .await;

    match state {
        RunState::Failed(message) => {
            assert!(message.contains("header and at least one data row"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_run_uses_file_name_and_globular_dispatch() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();

    let state = session
        .run(
            RunRequest::Upload {
                name: "measurements.csv".to_string(),
                contents: "a,b\n1.0,2.0\n2.0,1.0\n5.0,5.0\n6.0,4.0".to_string(),
                drop_last_column: false,
            },
            &params,
            &CannedProvider("ok"),
            &mut source,
        )
        .await;

    match state {
        RunState::Loaded(output) => {
            assert_eq!(output.dataset_label, "measurements.csv");
            // uploads dispatch as globular: every label stays in [0, k) or -1
            for r in &output.results {
                for p in &r.data {
                    let label = p.cluster.unwrap();
                    assert!(label >= -1);
                }
            }
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_shaped_commentary_is_stored_verbatim() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();
    let provider = CannedProvider("An error occurred while contacting the service.");

    let state = session
        .run(
            RunRequest::Synthetic {
                dataset: DatasetType::Blobs,
                n_samples: 50,
            },
            &params,
            &provider,
            &mut source,
        )
        .await;

    match state {
        RunState::Loaded(output) => {
            assert_eq!(
                output.commentary,
                "An error occurred while contacting the service."
            );
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_new_run_replaces_failed_state() {
    let mut session = Session::new();
    let mut source = EntropySource::new();
    let params = AlgorithmParams::default();

    session
        .run(
            RunRequest::Synthetic {
                dataset: DatasetType::Custom,
                n_samples: 10,
            },
            &params,
            &UnconfiguredProvider,
            &mut source,
        )
        .await;
    assert!(session.state().is_failed());

    session
        .run(
            RunRequest::Synthetic {
                dataset: DatasetType::Circles,
                n_samples: 30,
            },
            &params,
            &UnconfiguredProvider,
            &mut source,
        )
        .await;
    assert!(session.state().is_loaded());

    // the fallback provider's text is kept as-is
    if let RunState::Loaded(output) = session.state() {
        assert!(output.commentary.starts_with("Error:"));
    }
}
