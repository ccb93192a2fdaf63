use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod engine;

/// A verse matched against the user input, with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseMatch {
    pub verse: String,

    /// Cosine similarity between the query vector and the verse vector
    pub similarity: f32,
}

/// The similarity capability behind the `/api/similarity` endpoint.
/// Handlers only see this seam; the production implementation is
/// backed by the model artifacts.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    async fn get_similar_verses(&self, text: &str) -> anyhow::Result<Vec<VerseMatch>>;
}
