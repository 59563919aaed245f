//! Person domain record.
//!
//! # Responsibility
//! - Define the canonical person record shared by list and tree views.
//! - Carry parent/spouse references as plain ids for the forest layer.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a snapshot and never reused.
//! - `parent_id`/`spouse_id` may dangle; consumers degrade softly
//!   instead of rejecting the record.
//! - Presentation fields (`bio`, `birth_date`, `photo_url`) are opaque
//!   strings; the core never parses them.

use serde::{Deserialize, Serialize};

/// Stable identifier for a person record.
///
/// Ids are minted by the record facade (spreadsheet row keys or UUIDs);
/// the core treats them as opaque strings. Kept as a type alias to make
/// semantic intent explicit in signatures.
pub type PersonId = String;

/// Gender marker used for card symbols and child tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Visibility state maintained by the record facade.
///
/// A record with no status at all counts as active; only an explicit
/// `inactive` marker hides it from the default view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
}

/// Canonical person record as exchanged with the record facade.
///
/// Field names follow the facade's camelCase wire shape. All optional
/// fields tolerate absence so partially filled spreadsheet rows decode
/// without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Stable record id.
    pub id: PersonId,
    /// Reference to the anchor parent's id. `None` means no parent in
    /// this data set.
    #[serde(default)]
    pub parent_id: Option<PersonId>,
    /// Reference to the spouse's id. Not guaranteed to be stored
    /// symmetrically on both halves of a couple.
    #[serde(default)]
    pub spouse_id: Option<PersonId>,
    /// Full legal name.
    pub full_name: String,
    /// Preferred short name, shown instead of `full_name` when present.
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// ISO-like date string, passed through untouched.
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl Person {
    /// Creates a minimal record with every optional field unset.
    pub fn new(id: impl Into<PersonId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            spouse_id: None,
            full_name: full_name.into(),
            nick_name: None,
            gender: None,
            birth_date: None,
            bio: None,
            photo_url: None,
            status: None,
        }
    }

    /// Sets the anchor parent reference.
    pub fn with_parent(mut self, parent_id: impl Into<PersonId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the spouse reference.
    pub fn with_spouse(mut self, spouse_id: impl Into<PersonId>) -> Self {
        self.spouse_id = Some(spouse_id.into());
        self
    }

    /// Sets the gender marker.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the facade visibility status.
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the label shown on this person's card.
    pub fn display_name(&self) -> &str {
        self.nick_name.as_deref().unwrap_or(&self.full_name)
    }

    /// Returns whether this record belongs to the default (active) view.
    pub fn is_active(&self) -> bool {
        self.status != Some(RecordStatus::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::{Person, RecordStatus};

    #[test]
    fn display_name_prefers_nickname() {
        let mut person = Person::new("1", "Ahmad bin Sarimon");
        assert_eq!(person.display_name(), "Ahmad bin Sarimon");

        person.nick_name = Some("Ahmad".to_string());
        assert_eq!(person.display_name(), "Ahmad");
    }

    #[test]
    fn missing_status_counts_as_active() {
        let person = Person::new("1", "Ahmad");
        assert!(person.is_active());

        let inactive = Person::new("2", "Jamilah").with_status(RecordStatus::Inactive);
        assert!(!inactive.is_active());
    }
}
