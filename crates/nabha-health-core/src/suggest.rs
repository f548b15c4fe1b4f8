//! "Did you mean" suggestions for medicine searches that matched nothing.
//!
//! Names are scored with Jaro-Winkler against the whole name and each of its
//! words, so a misspelled generic ("paracetmol") still finds
//! "Paracetamol 500mg".

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum similarity for a name to be suggested.
pub const MIN_SIMILARITY: f64 = 0.70;

/// A suggested medicine name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    /// Similarity in [0, 1]
    pub score: f64,
}

fn similarity(query: &str, name: &str) -> f64 {
    let name = name.to_lowercase();
    name.split_whitespace()
        .map(|word| jaro_winkler(query, word))
        .fold(jaro_winkler(query, &name), f64::max)
}

/// Rank `names` by similarity to `query`, best first, at most `limit` results.
///
/// Ties are broken alphabetically; duplicate names are reported once. A blank
/// query suggests nothing.
pub fn suggest_alternatives<'a, I>(query: &str, names: I, limit: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Suggestion> = names
        .into_iter()
        .map(|name| Suggestion {
            name: name.to_string(),
            score: similarity(&query, name),
        })
        .filter(|s| s.score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    scored.dedup_by(|a, b| a.name == b.name);
    scored.truncate(limit);

    tracing::debug!(query = %query, suggestions = scored.len(), "Suggested alternatives");
    scored
}
