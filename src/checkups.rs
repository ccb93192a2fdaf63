//! A list of checkups to run before booting up the program

use anyhow::{Result, anyhow};

use crate::search::engine::ClusteredVerseIndex;

/// The two artifacts are produced together by the training pipeline,
/// but nothing stops an operator from deploying mismatched files.
/// Refuse to serve from an inconsistent pair.
pub fn verify_model_artifacts(engine: &ClusteredVerseIndex) -> Result<()> {
    let model = engine.model();
    let vectorizer = engine.vectorizer();

    if model.centroids.is_empty() {
        return Err(anyhow!(
            "The clustering model has no centroids. Please check whether the artifact was exported from a fitted model"
        ));
    }

    if model.verses.is_empty() {
        return Err(anyhow!(
            "The clustering model carries no verse corpus, every query would return empty results"
        ));
    }

    if model.dimensions() != vectorizer.dimensions() {
        return Err(anyhow!(
            "Centroid dimension mismatched the vectorizer. Centroids: {} while the vectorizer produces {}",
            model.dimensions(),
            vectorizer.dimensions()
        ));
    }

    if let Some(centroid) = model
        .centroids
        .iter()
        .find(|centroid| centroid.len() != model.dimensions())
    {
        return Err(anyhow!(
            "Ragged centroid matrix: found a centroid of dimension {} among centroids of dimension {}",
            centroid.len(),
            model.dimensions()
        ));
    }

    if let Some(record) = model
        .verses
        .iter()
        .find(|record| record.cluster >= model.centroids.len())
    {
        return Err(anyhow!(
            "Verse `{}` is labeled with cluster {} but the model only has {} centroids",
            record.text,
            record.cluster,
            model.centroids.len()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::{
        kmeans::{KMeansModel, VerseRecord},
        vectorizer::TfidfVectorizer,
    };

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer {
            vocabulary: HashMap::from([("light".to_string(), 0), ("earth".to_string(), 1)]),
            idf: vec![1.0, 1.0],
        }
    }

    fn model() -> KMeansModel {
        KMeansModel {
            centroids: vec![vec![1.0, 0.0]],
            verses: vec![VerseRecord {
                text: "Let there be light".to_string(),
                cluster: 0,
            }],
        }
    }

    #[test]
    fn accepts_a_consistent_pair() {
        let engine = ClusteredVerseIndex::build(vectorizer(), model(), 3);
        assert!(verify_model_artifacts(&engine).is_ok());
    }

    #[test]
    fn rejects_empty_centroids() {
        let mut model = model();
        model.centroids.clear();
        let engine = ClusteredVerseIndex::build(vectorizer(), model, 3);
        assert!(verify_model_artifacts(&engine).is_err());
    }

    #[test]
    fn rejects_empty_corpus() {
        let mut model = model();
        model.verses.clear();
        let engine = ClusteredVerseIndex::build(vectorizer(), model, 3);
        assert!(verify_model_artifacts(&engine).is_err());
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let mut model = model();
        model.centroids = vec![vec![1.0, 0.0, 0.0]];
        let engine = ClusteredVerseIndex::build(vectorizer(), model, 3);
        assert!(verify_model_artifacts(&engine).is_err());
    }

    #[test]
    fn rejects_out_of_range_cluster_label() {
        let mut model = model();
        model.verses[0].cluster = 5;
        let engine = ClusteredVerseIndex::build(vectorizer(), model, 3);
        assert!(verify_model_artifacts(&engine).is_err());
    }
}
