use std::sync::Arc;

use crate::{
    checkups::verify_model_artifacts,
    configurations::system::Config,
    search::{SimilaritySearch, engine::ClusteredVerseIndex},
};

/// Shared application state. The search capability is built once from
/// the model artifacts at startup and is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub search: Arc<dyn SimilaritySearch>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine = ClusteredVerseIndex::load(&config.artifacts, config.search.top_n)?;
        verify_model_artifacts(&engine)?;

        Ok(Self {
            config,
            search: Arc::new(engine),
        })
    }
}
