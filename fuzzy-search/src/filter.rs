use crate::result::SearchResult;
use std::cmp::Ordering;

/// Minimum score a result needs to survive culling, or `None` for an empty set.
///
/// Blends the mean score towards the best one by `factor` and caps the
/// result at `cutoff`, so a strong outlier never hides ordinary matches.
pub fn cull_threshold(scores: &[i64], cutoff: f64, factor: f64) -> Option<f64> {
    let max = *scores.iter().max()? as f64;
    let mean = scores.iter().map(|&score| score as f64).sum::<f64>() / scores.len() as f64;
    Some(cutoff.min(lerp(mean, max, factor)))
}

fn lerp(from: f64, to: f64, weight: f64) -> f64 {
    from + (to - from) * weight
}

/// Score descending, then shorter target, then lexicographically smaller.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.char_len().cmp(&b.char_len()))
        .then_with(|| a.target.cmp(&b.target))
}

/// Drops results below the cull threshold, orders the rest and keeps the
/// first `max_results`.
pub(crate) fn cull_and_sort(
    mut results: Vec<SearchResult>,
    max_results: usize,
    cutoff: f64,
    factor: f64,
) -> (Vec<SearchResult>, Option<f64>) {
    let scores: Vec<i64> = results.iter().map(|result| result.score).collect();
    let Some(threshold) = cull_threshold(&scores, cutoff, factor) else {
        return (results, None);
    };
    results.retain(|result| result.score as f64 >= threshold);

    if max_results == 0 {
        results.clear();
    } else if results.len() > max_results {
        // The comparator is a total order, so selecting then sorting the
        // head yields the same prefix as a full sort.
        results.select_nth_unstable_by(max_results - 1, compare_results);
        results.truncate(max_results);
        results.sort_unstable_by(compare_results);
    } else {
        results.sort_unstable_by(compare_results);
    }
    (results, Some(threshold))
}
