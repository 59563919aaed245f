//! Raw record normalization and status filtering.
//!
//! # Responsibility
//! - Coerce the facade's loose id typing (string, number, null) into
//!   `PersonId` strings.
//! - Treat blank-cell artifacts (empty string, numeric zero) as missing
//!   references.
//! - Split snapshots into the active and inactive views.
//!
//! # Invariants
//! - `id` is always stringified, even when numeric.
//! - A reference that normalizes to `None` never reaches the forest.
//! - Filtering drops records; it never rewrites them.

use crate::model::person::{Gender, Person, PersonId, RecordStatus};
use log::debug;
use serde::Deserialize;

/// Loosely typed id cell as the facade emits it.
///
/// Spreadsheet-backed rows deliver numeric row keys for hand-entered
/// ids and strings for generated ones; both map to the same id space.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRef {
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawRef {
    /// Stringifies the cell for use as a record id.
    fn into_id(self) -> PersonId {
        match self {
            Self::Text(value) => value,
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }

    /// Normalizes a reference cell. Empty strings and numeric zero are
    /// blank-cell artifacts and mean "no reference".
    fn into_reference(self) -> Option<PersonId> {
        match self {
            Self::Text(value) if value.is_empty() => None,
            Self::Int(0) => None,
            Self::Float(value) if value == 0.0 => None,
            other => Some(other.into_id()),
        }
    }
}

/// Person record as decoded from the facade payload, before coercion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPersonRecord {
    pub id: RawRef,
    #[serde(default)]
    pub parent_id: Option<RawRef>,
    #[serde(default)]
    pub spouse_id: Option<RawRef>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl RawPersonRecord {
    /// Coerces this raw record into the canonical shape.
    pub fn normalize(self) -> Person {
        Person {
            id: self.id.into_id(),
            parent_id: self.parent_id.and_then(RawRef::into_reference),
            spouse_id: self.spouse_id.and_then(RawRef::into_reference),
            full_name: self.full_name,
            nick_name: self.nick_name,
            gender: self.gender,
            birth_date: self.birth_date,
            bio: self.bio,
            photo_url: self.photo_url,
            status: self.status,
        }
    }
}

/// Normalizes a whole payload, preserving input order.
pub fn normalize_records(records: Vec<RawPersonRecord>) -> Vec<Person> {
    records.into_iter().map(RawPersonRecord::normalize).collect()
}

/// Splits a snapshot by visibility.
///
/// `show_inactive = false` keeps everything not explicitly inactive;
/// `show_inactive = true` keeps only explicitly inactive records.
pub fn filter_by_status(people: Vec<Person>, show_inactive: bool) -> Vec<Person> {
    let total = people.len();
    let kept: Vec<Person> = people
        .into_iter()
        .filter(|person| {
            if show_inactive {
                person.status == Some(RecordStatus::Inactive)
            } else {
                person.is_active()
            }
        })
        .collect();
    debug!(
        "event=snapshot_filtered show_inactive={} kept={} dropped={}",
        show_inactive,
        kept.len(),
        total - kept.len()
    );
    kept
}
