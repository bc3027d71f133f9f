//! Keyword frequency extraction from the filtered review corpus.

use std::collections::HashMap;

/// Tokens shorter than this are noise.
const MIN_TOKEN_LEN: usize = 3;

/// Common English words that carry no signal in review text.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "this", "that", "was", "are", "but", "not", "with", "you", "have", "had",
    "very", "its", "it's", "they", "them", "then", "than", "too", "can", "all", "out", "get",
    "got", "our", "has", "were", "been", "from", "would", "will", "just", "about", "there",
    "their", "what", "when", "which", "your", "some", "more", "also", "did", "does", "only",
];

/// A word and how often it occurs in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

/// Counts keyword frequencies across `texts` and returns the top `limit`
/// entries, most frequent first; ties break alphabetically so output is
/// stable. An empty result means the corpus was too sparse and the caller
/// renders a fallback message instead of the keyword block.
pub fn keyword_frequencies<'a, I>(texts: I, limit: usize) -> Vec<Keyword>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for token in text.split(|c: char| !c.is_alphanumeric()) {
            let word = token.to_lowercase();
            if word.len() < MIN_TOKEN_LEN || STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut keywords: Vec<Keyword> = counts
        .into_iter()
        .map(|(word, count)| Keyword { word, count })
        .collect();

    keywords.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    keywords.truncate(limit);
    keywords
}
