//! Bidirectional mapping between query state and the flat parameter set.
//!
//! The parameter set is the durable representation of a view: it is what a
//! client carries in its URL, so any filtered/sorted listing is shareable
//! and bookmarkable. Unset fields are removed rather than written empty, so
//! cleared filters disappear from shared URLs instead of lingering as empty
//! markers. Keys the codec does not own pass through untouched.

use std::collections::BTreeMap;

use crate::query::{ConsultationMode, QueryState, SortKey};

/// Flat string-keyed parameter set, as carried in a URL query string.
pub type Params = BTreeMap<String, String>;

/// Free-text search term.
pub const PARAM_SEARCH: &str = "search";
/// Consultation mode: "Video Consult" or "In Clinic".
pub const PARAM_CONSULTATION: &str = "consultationType";
/// Comma-joined specialty set.
pub const PARAM_SPECIALTIES: &str = "specialties";
/// Sort key: "fees-low-to-high" or "experience".
pub const PARAM_SORT: &str = "sortBy";

/// Decode a parameter set into a query state.
///
/// Total: absent keys and unrecognized values decode to the field's unset
/// state, and empty segments of the specialty list are discarded.
pub fn decode(params: &Params) -> QueryState {
    QueryState {
        search: params.get(PARAM_SEARCH).cloned().unwrap_or_default(),
        consultation: params
            .get(PARAM_CONSULTATION)
            .and_then(|v| ConsultationMode::parse(v)),
        specialties: params
            .get(PARAM_SPECIALTIES)
            .map(|v| {
                v.split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        sort: params.get(PARAM_SORT).and_then(|v| SortKey::parse(v)),
    }
}

/// Encode a query state onto an existing parameter set.
///
/// Owns exactly the four directory keys: set fields are written, unset
/// fields are removed, everything else in `previous` is preserved.
pub fn encode(state: &QueryState, previous: &Params) -> Params {
    let mut params = previous.clone();

    set_or_remove(
        &mut params,
        PARAM_SEARCH,
        (!state.search.is_empty()).then(|| state.search.clone()),
    );
    set_or_remove(
        &mut params,
        PARAM_CONSULTATION,
        state.consultation.map(|m| m.as_str().to_string()),
    );
    let joined = state
        .specialties
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(",");
    set_or_remove(&mut params, PARAM_SPECIALTIES, (!joined.is_empty()).then_some(joined));
    set_or_remove(
        &mut params,
        PARAM_SORT,
        state.sort.map(|s| s.as_str().to_string()),
    );

    params
}

/// Discard the entire parameter set in one step: the whole query state
/// resets atomically to its unset defaults.
pub fn clear_all() -> Params {
    Params::new()
}

fn set_or_remove(params: &mut Params, key: &str, value: Option<String>) {
    match value {
        Some(v) => {
            params.insert(key.to_string(), v);
        }
        None => {
            params.remove(key);
        }
    }
}
