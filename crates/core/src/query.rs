//! Query state and the pure filter/sort pipeline.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::practitioner::Practitioner;

/// Consultation mode filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationMode {
    VideoConsult,
    InClinic,
}

impl ConsultationMode {
    /// Wire value carried by the `consultationType` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoConsult => "Video Consult",
            Self::InClinic => "In Clinic",
        }
    }

    /// Parse the wire value. Unrecognized values decode as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Video Consult" => Some(Self::VideoConsult),
            "In Clinic" => Some(Self::InClinic),
            _ => None,
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Fees ascending.
    FeesLowToHigh,
    /// Years of experience descending.
    Experience,
}

impl SortKey {
    /// Wire value carried by the `sortBy` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeesLowToHigh => "fees-low-to-high",
            Self::Experience => "experience",
        }
    }

    /// Parse the wire value. Unrecognized values decode as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fees-low-to-high" => Some(Self::FeesLowToHigh),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

/// The active search/filter/sort parameters for one view of the directory.
///
/// Rebuilt from the parameter set on every request and never mutated in
/// place: a change produces a whole new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive name substring.
    pub search: String,
    pub consultation: Option<ConsultationMode>,
    /// Membership-only; a practitioner matches if any of their specialties
    /// is in the set.
    pub specialties: BTreeSet<String>,
    pub sort: Option<SortKey>,
}

impl QueryState {
    /// True when every field is unset.
    pub fn is_unset(&self) -> bool {
        self.search.is_empty()
            && self.consultation.is_none()
            && self.specialties.is_empty()
            && self.sort.is_none()
    }
}

/// Run the query pipeline: consultation filter, specialty filter, name
/// search, then an optional stable sort.
///
/// Pure and deterministic. Filtering preserves the relative order of
/// surviving entries, and sort ties keep their original order, so repeated
/// application with the same state is a no-op.
pub fn apply(practitioners: &[Practitioner], state: &QueryState) -> Vec<Practitioner> {
    let needle = state.search.to_lowercase();

    let mut result: Vec<Practitioner> = practitioners
        .iter()
        .filter(|p| match state.consultation {
            Some(ConsultationMode::VideoConsult) => p.video_consult,
            Some(ConsultationMode::InClinic) => p.in_clinic,
            None => true,
        })
        .filter(|p| {
            state.specialties.is_empty()
                || p.specialties.iter().any(|s| state.specialties.contains(s))
        })
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match state.sort {
        Some(SortKey::FeesLowToHigh) => result.sort_by_key(|p| p.fees),
        Some(SortKey::Experience) => result.sort_by_key(|p| Reverse(p.experience)),
        None => {}
    }

    result
}
