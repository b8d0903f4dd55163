//! Cosine similarity scoring and ranked retrieval over feature vectors.
//!
//! Candidates are any slice of items that can be viewed as `&[f64]`; an
//! item's position in the slice is the index reported back. Candidates whose
//! length differs from the query are skipped, never scored.

use std::cmp::Ordering;

use crate::types::{MatchError, MatchResult, ScoredMatch};

/// Compute cosine similarity between two vectors.
///
/// Returns `0.0` when either vector is empty, has zero magnitude, or the
/// lengths differ. The result is always finite and within [-1, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    // Scale each vector by its largest magnitude so squares cannot overflow or underflow
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = x / scale_a;
        let y = y / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    let similarity = dot / denom;
    if !similarity.is_finite() {
        return 0.0;
    }

    similarity.clamp(-1.0, 1.0)
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}

/// Cosine similarity that reports a malformed query instead of scoring it.
///
/// Zero-magnitude vectors are still a valid `0.0` score.
pub fn checked_similarity(a: &[f64], b: &[f64]) -> MatchResult<f64> {
    if a.is_empty() {
        return Err(MatchError::InvalidInput(
            "query vector must not be empty".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(MatchError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(cosine_similarity(a, b))
}

/// Score every candidate whose length matches the query, in candidate order.
fn score_candidates<'a, V>(
    query: &'a [f64],
    candidates: &'a [V],
) -> impl Iterator<Item = ScoredMatch> + 'a
where
    V: AsRef<[f64]>,
{
    candidates
        .iter()
        .enumerate()
        .filter_map(move |(index, candidate)| {
            let candidate = candidate.as_ref();
            if query.is_empty() || candidate.len() != query.len() {
                tracing::trace!(
                    "Skipping candidate {index}: length {} != query length {}",
                    candidate.len(),
                    query.len()
                );
                return None;
            }
            Some(ScoredMatch {
                index,
                score: cosine_similarity(query, candidate),
            })
        })
}

/// Find the index of the candidate most similar to `query`.
///
/// The first candidate wins ties. Returns `None` when no candidate has the
/// query's length.
pub fn find_best_match<V: AsRef<[f64]>>(query: &[f64], candidates: &[V]) -> Option<usize> {
    // Floor sits below the lowest possible cosine score so a -1.0 match is kept
    let mut best_score = f64::NEG_INFINITY;
    let mut best_match = None;

    for m in score_candidates(query, candidates) {
        if m.score > best_score {
            best_score = m.score;
            best_match = Some(m.index);
        }
    }

    if let Some(index) = best_match {
        tracing::debug!("Best match {index} with similarity {best_score:.4}");
    }
    best_match
}

/// Find the top-k candidates by similarity, highest first.
///
/// Equal scores keep their original candidate order.
pub fn find_top_k<V: AsRef<[f64]>>(
    query: &[f64],
    candidates: &[V],
    k: usize,
) -> Vec<ScoredMatch> {
    find_top_k_above(query, candidates, k, f64::NEG_INFINITY)
}

/// Like [`find_top_k`], but drops candidates scoring below `min_score`.
pub fn find_top_k_above<V: AsRef<[f64]>>(
    query: &[f64],
    candidates: &[V],
    k: usize,
    min_score: f64,
) -> Vec<ScoredMatch> {
    if k == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch> = score_candidates(query, candidates)
        .filter(|m| m.score >= min_score)
        .collect();

    // sort_by is stable, so ties stay in candidate order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(k);
    matches
}
