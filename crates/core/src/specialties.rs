//! Specialty catalog backing the filter panel.

use std::collections::BTreeSet;

use crate::practitioner::Practitioner;

/// Specialties always offered as filters, regardless of what the loaded
/// directory happens to contain.
pub const KNOWN_SPECIALTIES: [&str; 24] = [
    "General Physician",
    "Dentist",
    "Dermatologist",
    "Paediatrician",
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian/Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ayurveda",
    "Homeopath",
];

/// All filterable specialties: the known list unioned with every specialty
/// discovered in the directory, sorted and deduplicated.
pub fn catalog(practitioners: &[Practitioner]) -> Vec<String> {
    let mut all: BTreeSet<String> = KNOWN_SPECIALTIES.iter().map(|s| s.to_string()).collect();

    for practitioner in practitioners {
        for specialty in &practitioner.specialties {
            if !specialty.is_empty() {
                all.insert(specialty.clone());
            }
        }
    }

    all.into_iter().collect()
}
