//! TF-IDF relevance ranking between a job description and resumes

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// TF-IDF vector space built over one corpus. The vocabulary is rebuilt fresh
/// for every ranking call; nothing is shared across runs.
pub struct TfIdfVectorizer {
    stop_words: HashSet<&'static str>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Tokenize into lowercase words, dropping stop words and single characters.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() > 1 && !self.stop_words.contains(w.as_str()))
            .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
            .collect()
    }

    /// Build the vocabulary and IDF weights, then return one L2-normalized
    /// TF-IDF vector per input document, index-aligned.
    ///
    /// Uses smoothed IDF: ln((1 + n) / (1 + df)) + 1, so terms present in
    /// every document still carry weight and no division by zero can occur.
    pub fn fit_transform(&mut self, documents: &[&str]) -> Vec<Vec<f32>> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        self.vocabulary.clear();
        for tokens in &tokenized {
            for token in tokens {
                let next_id = self.vocabulary.len();
                self.vocabulary.entry(token.clone()).or_insert(next_id);
            }
        }

        let vocab_size = self.vocabulary.len();
        let doc_count = documents.len();

        // Document frequency per term
        let mut df = vec![0usize; vocab_size];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                df[self.vocabulary[token]] += 1;
            }
        }

        self.idf = df
            .iter()
            .map(|&d| ((1.0 + doc_count as f32) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        tokenized
            .iter()
            .map(|tokens| self.vectorize(tokens, vocab_size))
            .collect()
    }

    fn vectorize(&self, tokens: &[String], vocab_size: usize) -> Vec<f32> {
        let mut vector = vec![0.0f32; vocab_size];
        for token in tokens {
            if let Some(&id) = self.vocabulary.get(token) {
                vector[id] += 1.0;
            }
        }

        for (id, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf[id];
        }

        // L2 normalization; an all-stop-word document stays a zero vector
        let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in vector.iter_mut() {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity between two TF-IDF vectors, clamped to [0, 1].
/// A zero vector on either side yields 0.0 rather than an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

/// Score each resume against the job description.
///
/// Builds the vector space over {job} ∪ resumes and returns one similarity in
/// [0, 1] per resume, index-aligned with the input order. A resume sharing no
/// vocabulary with the job scores 0.0; an empty resume list returns an empty
/// vector.
pub fn rank_relevance(job_text: &str, resume_texts: &[String]) -> Vec<f32> {
    if resume_texts.is_empty() {
        return Vec::new();
    }

    let mut corpus: Vec<&str> = Vec::with_capacity(resume_texts.len() + 1);
    corpus.push(job_text);
    corpus.extend(resume_texts.iter().map(|t| t.as_str()));

    let mut vectorizer = TfIdfVectorizer::new();
    let vectors = vectorizer.fit_transform(&corpus);

    let job_vector = &vectors[0];
    vectors[1..]
        .iter()
        .map(|resume_vector| cosine_similarity(job_vector, resume_vector))
        .collect()
}

/// Common English stop words excluded from the vector space
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];
