//! meddir-core: Shared practitioner-directory types and logic
//!
//! This crate is the pure domain layer: record normalization, the query
//! pipeline, the parameter codec, and autocomplete suggestions. No I/O
//! lives here; everything is total and safe to call on every request.

pub mod codec;
pub mod listing;
pub mod normalize;
pub mod outcome;
pub mod practitioner;
pub mod query;
pub mod specialties;
pub mod suggest;

// Re-export our types
pub use codec::{Params, clear_all, decode, encode};
pub use listing::{Listing, ListingLink};
pub use normalize::{normalize, normalize_all};
pub use outcome::{ApiOutcome, ErrorKind};
pub use practitioner::Practitioner;
pub use query::{ConsultationMode, QueryState, SortKey, apply};
pub use suggest::{MAX_SUGGESTIONS, suggest};
