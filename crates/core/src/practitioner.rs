use serde::{Deserialize, Serialize};

/// A normalized practitioner entry.
///
/// Every field is always populated: the normalizer substitutes defaults for
/// anything the upstream record omits or mangles. Serialized camelCase to
/// match the directory feed's own conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    /// Unique within one loaded directory. Generated when the raw record
    /// carries none, in which case it is NOT stable across reloads.
    pub id: String,
    pub name: String,
    /// Discovery order from the raw record; may be empty.
    pub specialties: Vec<String>,
    /// Years of experience.
    pub experience: u32,
    /// Consultation fee, whatever numeral the feed carried after stripping
    /// currency decoration.
    pub fees: u32,
    pub video_consult: bool,
    pub in_clinic: bool,
    /// Direct reference, or a placeholder derived from the name.
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intro: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub qualifications: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub clinic_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locality: String,
}
