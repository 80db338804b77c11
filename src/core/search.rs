//! Incremental search over a directory listing.
//!
//! Matching is a case-insensitive substring test on the display name. Results keep the
//! listing order except that names starting with the query (case-sensitive) come first.

use crate::core::fm::Entry;

use std::ops::Range;

/// Filters `entries` by `query` and returns the ranked matches with their match spans set.
///
/// Synthetic `./` and `../` rows never match.
pub fn filter(query: &str, entries: &[Entry]) -> Vec<Entry> {
    let candidates = entries.iter().filter(|e| !e.is_synthetic());
    if query.is_empty() {
        return candidates.cloned().collect();
    }

    let mut results: Vec<Entry> = candidates
        .filter_map(|e| {
            find_case_insensitive(e.name(), query).map(|span| e.clone().with_match_span(span))
        })
        .collect();

    // sort_by_key is stable
    results.sort_by_key(|e| !e.name().starts_with(query));
    results
}

/// Byte range in `haystack` of the first case-insensitive occurrence of `needle`.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }
    let needle = needle.to_lowercase();

    // lowered text plus (lowered offset, original offset) at every original char boundary
    let mut lowered = String::with_capacity(haystack.len());
    let mut bounds = Vec::with_capacity(haystack.len() + 1);
    for (orig, c) in haystack.char_indices() {
        bounds.push((lowered.len(), orig));
        lowered.extend(c.to_lowercase());
    }
    bounds.push((lowered.len(), haystack.len()));

    lowered.match_indices(needle.as_str()).find_map(|(start, m)| {
        let end = start + m.len();
        let begin = bounds
            .binary_search_by_key(&start, |&(low, _)| low)
            .ok()
            .map(|i| bounds[i].1)?;
        let finish = bounds
            .iter()
            .find(|&&(low, _)| low >= end)
            .map(|&(_, orig)| orig)?;
        Some(begin..finish)
    })
}
