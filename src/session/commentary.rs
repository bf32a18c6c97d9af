//! The generative-commentary boundary.
//!
//! Real providers wrap an HTTP client for a hosted generative-language model;
//! that client lives outside this crate. The core only depends on this trait.

use async_trait::async_trait;

use crate::cluster::ClusterResult;
use crate::config;

/// Produces natural-language commentary for a finished analysis run.
///
/// Implementations never fail. On missing configuration or a remote error they
/// return human-readable text (conventionally starting with "Error:" or
/// "An error occurred") which the session stores exactly like a successful
/// commentary. The returned text is opaque Markdown for display; the core must
/// not re-parse it for control decisions.
#[async_trait]
pub trait CommentaryProvider: Send + Sync {
    /// Summarize the four results for `dataset_name`.
    async fn analyze(&self, results: &[ClusterResult], dataset_name: &str) -> String;
}

/// Fallback provider used when no API credential is configured.
#[derive(Debug, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl CommentaryProvider for UnconfiguredProvider {
    async fn analyze(&self, _results: &[ClusterResult], _dataset_name: &str) -> String {
        format!(
            "Error: AI commentary is unavailable because no API key is configured. \
             Set {} to enable analysis.",
            config::API_KEY_VAR
        )
    }
}
