//! Total normalization of raw upstream records.
//!
//! The upstream feed is loosely typed: field names, nesting, and value types
//! vary between record producers. Every accessor here is defensive with an
//! explicit default, so normalization never fails and never drops a record.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::practitioner::Practitioner;

/// Display name substituted when a record carries none.
const UNKNOWN_NAME: &str = "Unknown Doctor";

/// First run of ASCII digits anywhere in a string, e.g. the "11" in
/// "11 Years of experience".
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Convert one raw record into a [`Practitioner`].
///
/// Total over any `Value` whatsoever, including non-objects: absent,
/// renamed, and mis-typed fields all degrade to defaults.
pub fn normalize(raw: &Value) -> Practitioner {
    tracing::trace!(record = %raw, "normalizing raw record");

    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    // Image resolution order: photo, then logo_url, then a placeholder
    // keyed by the display name.
    let image = raw
        .get("photo")
        .and_then(Value::as_str)
        .or_else(|| raw.get("logo_url").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_image(&name));

    // The feed spells this key both ways; the alternate spelling wins.
    let specialties = raw
        .get("specialities")
        .filter(|v| truthy(v))
        .or_else(|| raw.get("specialties").filter(|v| truthy(v)))
        .map(specialty_list)
        .unwrap_or_default();

    let fees = raw.get("fees").map(parse_fees).unwrap_or(0);
    let experience = raw.get("experience").map(parse_experience).unwrap_or(0);

    let clinic = raw.get("clinic");
    let clinic_name = clinic
        .and_then(|c| c.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let locality = raw
        .get("locality")
        .and_then(Value::as_str)
        .or_else(|| raw.get("location").and_then(Value::as_str))
        .or_else(|| raw.get("address").and_then(Value::as_str))
        .or_else(|| clinic.and_then(|c| c.get("locality")).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string();

    let qualifications = raw
        .get("qualifications")
        .and_then(Value::as_str)
        .or_else(|| raw.get("education").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string();

    // A generated id is unique within this load only; collisions across
    // reloads are acceptable because nothing persists it.
    let id = match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => Uuid::new_v4().simple().to_string(),
    };

    Practitioner {
        id,
        name,
        specialties,
        experience,
        fees,
        video_consult: raw.get("video_consult").is_some_and(truthy),
        in_clinic: raw.get("in_clinic").is_some_and(truthy),
        image,
        intro: raw
            .get("intro")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        qualifications,
        clinic_name,
        locality,
    }
}

/// Normalize a whole upstream payload, preserving its order.
pub fn normalize_all(raw: &[Value]) -> Vec<Practitioner> {
    raw.iter().map(normalize).collect()
}

/// Placeholder image reference derived from the display name.
fn placeholder_image(name: &str) -> String {
    format!("/placeholder.svg?height=200&width=200&query=doctor {name}")
}

/// A scalar specialty wraps into a one-element list.
fn specialty_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(specialty_name).collect(),
        scalar => vec![specialty_name(scalar)],
    }
}

/// Coerce one specialty item to a string: used directly if already a
/// string, else the object's `name` property, else its JSON rendering.
fn specialty_name(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    }
}

/// Fee values arrive either numeric or as currency-formatted strings,
/// sometimes with the rupee sign mangled by a bad encoding pass. Strings
/// are reduced to their digits before parsing.
fn parse_fees(value: &Value) -> u32 {
    match value {
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        _ => 0,
    }
}

/// Experience arrives numeric or embedded in text ("11 Years of
/// experience"); the first digit run anywhere in the string wins.
fn parse_experience(value: &Value) -> u32 {
    match value {
        Value::String(s) => DIGIT_RUN
            .find(s)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0),
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        _ => 0,
    }
}

/// JS-style truthiness, matching how the feed encodes optional values and
/// flags (0/1 numbers, empty strings, explicit nulls).
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
