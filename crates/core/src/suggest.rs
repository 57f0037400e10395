//! Autocomplete suggestions for the search box.

use crate::practitioner::Practitioner;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// First name-matches for an in-progress search term, in list order.
///
/// No ranking beyond source-order truncation: the first
/// [`MAX_SUGGESTIONS`] case-insensitive substring matches win. An empty or
/// whitespace-only term yields nothing.
pub fn suggest(practitioners: &[Practitioner], term: &str) -> Vec<Practitioner> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    practitioners
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
