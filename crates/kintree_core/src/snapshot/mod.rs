//! Snapshot intake boundary.
//!
//! # Responsibility
//! - Convert raw facade payloads into normalized `Person` snapshots.
//! - Apply the active/inactive visibility split before the core sees
//!   any record.
//!
//! # Invariants
//! - Normalization preserves input order and never fails.
//! - The active and inactive views are disjoint.

pub mod intake;
