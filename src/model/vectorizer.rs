//! Fitted TF-IDF vectorizer, deserialized from the vectorizer artifact.
//! The vocabulary and idf weights come from the offline training run;
//! this side only transforms query text into the fitted space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::traits::LoadArtifact;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term -> column index in the output vector
    pub vocabulary: HashMap<String, usize>,

    /// idf weight per column, same width as the vocabulary
    pub idf: Vec<f32>,
}

impl LoadArtifact for TfidfVectorizer {}

impl TfidfVectorizer {
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// Lowercase alphanumeric tokenization. Matches what the corpus was
    /// fitted with; out-of-vocabulary terms are dropped in `transform`.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Transform text into a dense L2-normalized tf-idf vector of
    /// vocabulary width. Text with no in-vocabulary terms yields the
    /// zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions()];

        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vector;
        }

        let mut term_counts: HashMap<&str, f32> = HashMap::new();
        for token in &tokens {
            *term_counts.entry(token.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in term_counts {
            if let Some(&column) = self.vocabulary.get(term) {
                vector[column] = (count / total) * self.idf[column];
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}
