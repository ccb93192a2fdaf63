//! Request and response API models for the similarity endpoint

use serde::{Deserialize, Serialize};

use crate::search::VerseMatch;

/// `user_input` stays optional so that its absence is answered by the
/// handler with the endpoint's own error body instead of a framework
/// deserialization error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimilarityRequest {
    pub user_input: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub user_input: String,
    pub results: Vec<VerseMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
