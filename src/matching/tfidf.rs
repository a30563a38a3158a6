//! Batch TF-IDF vectorization and cosine similarity
//!
//! The vectorizer is fit jointly over the profile text and every posting text
//! so IDF weights reflect the batch being matched. Vocabulary is built from
//! word n-grams after stop-word removal, capped at `max_features` by corpus
//! frequency. IDF is smoothed and vectors are L2-normalized, matching the
//! conventional TF-IDF formulation.

use crate::config::VectorizerConfig;
use crate::error::{JobMatcherError, Result};
use crate::matching::text::tokenize;
use std::collections::{BTreeMap, HashMap};

pub struct TfidfVectorizer {
    max_features: usize,
    ngram_min: usize,
    ngram_max: usize,
    remove_stop_words: bool,
}

impl TfidfVectorizer {
    pub fn new(config: &VectorizerConfig) -> Self {
        Self {
            max_features: config.max_features,
            ngram_min: config.ngram_min,
            ngram_max: config.ngram_max,
            remove_stop_words: config.remove_stop_words,
        }
    }

    /// Fit the vocabulary over the whole corpus and return one L2-normalized
    /// TF-IDF vector per input text.
    ///
    /// Fails with a vectorization error when no term survives tokenization
    /// (empty corpus, or everything was a stop word); callers are expected to
    /// fall back to degraded matching in that case.
    pub fn fit_transform(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        let documents: Vec<Vec<String>> = texts.iter().map(|text| self.ngrams(text)).collect();

        // Document frequency and total corpus frequency per term
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<&str, usize> = HashMap::new();
        for terms in &documents {
            let mut seen: HashMap<&str, ()> = HashMap::new();
            for term in terms {
                *corpus_frequency.entry(term).or_insert(0) += 1;
                if seen.insert(term, ()).is_none() {
                    *document_frequency.entry(term).or_insert(0) += 1;
                }
            }
        }

        if corpus_frequency.is_empty() {
            return Err(JobMatcherError::Vectorization(
                "empty vocabulary: no terms survived tokenization".to_string(),
            ));
        }

        // Cap the vocabulary by corpus frequency, ties broken alphabetically
        let mut ranked: Vec<(&str, usize)> =
            corpus_frequency.iter().map(|(t, c)| (*t, *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let vocabulary: BTreeMap<&str, usize> = ranked
            .iter()
            .map(|(term, _)| *term)
            .collect::<std::collections::BTreeSet<&str>>()
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term, index))
            .collect();

        let total_docs = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
            idf[index] = ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0;
        }

        let vectors = documents
            .iter()
            .map(|terms| {
                let mut vector = vec![0.0; vocabulary.len()];
                for term in terms {
                    if let Some(&index) = vocabulary.get(term.as_str()) {
                        vector[index] += 1.0;
                    }
                }
                for (index, value) in vector.iter_mut().enumerate() {
                    *value *= idf[index];
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Ok(vectors)
    }

    /// Word n-grams for one text, from `ngram_min` up to `ngram_max`.
    fn ngrams(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text, self.remove_stop_words);
        let mut terms = Vec::new();

        for n in self.ngram_min..=self.ngram_max {
            if n == 0 || tokens.len() < n {
                continue;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }

        terms
    }
}

/// Cosine similarity between two vectors, 0.0 when either has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn l2_normalize(vector: &mut [f64]) {
    let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
