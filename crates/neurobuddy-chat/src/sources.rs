//! Citation filtering and deduplication.

use std::collections::HashSet;

use neurobuddy_ai::CitationCandidate;

use crate::conversation::Source;

/// Coerce loose citation candidates into the strict `Source` shape.
///
/// Candidates missing a non-empty `uri` or non-empty `title` are
/// dropped. Duplicates (by `uri`) keep the first occurrence in original
/// order; later duplicates are discarded, never merged.
pub fn collect_sources(candidates: Vec<CitationCandidate>) -> Vec<Source> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for candidate in candidates {
        if candidate.uri.is_empty() || candidate.title.is_empty() {
            continue;
        }
        if seen.insert(candidate.uri.clone()) {
            sources.push(Source {
                uri: candidate.uri,
                title: candidate.title,
            });
        }
    }

    sources
}
