use serde::{Deserialize, Serialize};

use crate::practitioner::Practitioner;

/// Link attached to a listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingLink {
    pub relation: String,
    pub url: String,
}

/// Search-response envelope for the practitioner listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub total: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<ListingLink>,

    #[serde(default)]
    pub results: Vec<Practitioner>,
}

impl Listing {
    /// Build a listing carrying the canonical `self` link for its view.
    pub fn with_self_link(self_url: String, results: Vec<Practitioner>) -> Self {
        Self {
            total: results.len() as u32,
            link: vec![ListingLink {
                relation: "self".to_string(),
                url: self_url,
            }],
            results,
        }
    }
}
