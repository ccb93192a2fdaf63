//! Pre-trained KMeans clustering model plus the verse corpus it was
//! fitted on. Both travel in one artifact so the cluster labels can
//! never drift apart from the centroids that produced them.

use serde::{Deserialize, Serialize};

use crate::traits::LoadArtifact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    pub text: String,

    /// Index into `KMeansModel::centroids`
    pub cluster: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansModel {
    /// Cluster centers in vectorizer space
    pub centroids: Vec<Vec<f32>>,

    pub verses: Vec<VerseRecord>,
}

impl LoadArtifact for KMeansModel {}

impl KMeansModel {
    pub fn dimensions(&self) -> usize {
        self.centroids.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Nearest centroid by squared Euclidean distance. Ties resolve to
    /// the lowest cluster index.
    pub fn predict(&self, vector: &[f32]) -> usize {
        let mut best_cluster = 0;
        let mut best_distance = f32::INFINITY;

        for (cluster, centroid) in self.centroids.iter().enumerate() {
            let distance: f32 = centroid
                .iter()
                .zip(vector)
                .map(|(c, v)| (c - v) * (c - v))
                .sum();

            if distance < best_distance {
                best_distance = distance;
                best_cluster = cluster;
            }
        }

        best_cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> KMeansModel {
        KMeansModel {
            centroids: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            verses: vec![
                VerseRecord {
                    text: "first".to_string(),
                    cluster: 0,
                },
                VerseRecord {
                    text: "second".to_string(),
                    cluster: 1,
                },
            ],
        }
    }

    #[test]
    fn predicts_nearest_centroid() {
        let model = model();
        assert_eq!(model.predict(&[0.9, 0.1]), 0);
        assert_eq!(model.predict(&[0.1, 0.9]), 1);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        assert_eq!(model().predict(&[0.5, 0.5]), 0);
    }

    #[test]
    fn reports_centroid_dimensions() {
        assert_eq!(model().dimensions(), 2);
        let empty = KMeansModel {
            centroids: vec![],
            verses: vec![],
        };
        assert_eq!(empty.dimensions(), 0);
    }

    #[test]
    fn deserializes_from_artifact_json() {
        let json = r#"{
            "centroids": [[0.1, 0.2], [0.3, 0.4]],
            "verses": [{"text": "In the beginning", "cluster": 0}]
        }"#;
        let model: KMeansModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.centroids.len(), 2);
        assert_eq!(model.verses[0].text, "In the beginning");
        assert_eq!(model.verses[0].cluster, 0);
    }
}
