use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::{
    configurations::system::ArtifactsConfig,
    model::{kmeans::KMeansModel, vectorizer::TfidfVectorizer},
    search::{SimilaritySearch, VerseMatch},
    traits::LoadArtifact,
};

/// A verse with its vector in the fitted space. Vectors are computed
/// once when the index is built and never mutated afterwards.
#[derive(Debug, Clone)]
struct IndexedVerse {
    text: String,
    cluster: usize,
    vector: Vec<f32>,
}

/// Production similarity engine: assigns the query to a cluster of the
/// pre-trained model and ranks that cluster's verses by cosine
/// similarity to the query vector.
pub struct ClusteredVerseIndex {
    vectorizer: TfidfVectorizer,
    model: KMeansModel,
    verses: Vec<IndexedVerse>,
    top_n: usize,
}

impl ClusteredVerseIndex {
    pub fn load(artifacts: &ArtifactsConfig, top_n: usize) -> Result<Self> {
        let vectorizer = TfidfVectorizer::load(&artifacts.vectorizer_path)?;
        let model = KMeansModel::load(&artifacts.clustering_model_path)?;

        info!(
            "Model artifacts loaded: {} centroids, {} verses, {} vectorizer terms",
            model.centroids.len(),
            model.verses.len(),
            model.dimensions(),
        );

        Ok(Self::build(vectorizer, model, top_n))
    }

    pub fn build(vectorizer: TfidfVectorizer, model: KMeansModel, top_n: usize) -> Self {
        let verses = model
            .verses
            .iter()
            .map(|record| IndexedVerse {
                text: record.text.clone(),
                cluster: record.cluster,
                vector: vectorizer.transform(&record.text),
            })
            .collect();

        Self {
            vectorizer,
            model,
            verses,
            top_n,
        }
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &KMeansModel {
        &self.model
    }
}

/// Both sides are L2-normalized, so the dot product is the cosine.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[async_trait]
impl SimilaritySearch for ClusteredVerseIndex {
    async fn get_similar_verses(&self, text: &str) -> Result<Vec<VerseMatch>> {
        let query_vector = self.vectorizer.transform(text);
        let cluster = self.model.predict(&query_vector);

        let mut matches: Vec<VerseMatch> = self
            .verses
            .iter()
            .filter(|verse| verse.cluster == cluster)
            .map(|verse| VerseMatch {
                verse: verse.text.clone(),
                similarity: cosine_similarity(&query_vector, &verse.vector),
            })
            .collect();

        // Stable sort keeps corpus order on equal scores
        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(self.top_n);

        Ok(matches)
    }
}
