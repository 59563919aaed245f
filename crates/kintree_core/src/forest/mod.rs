//! Family forest construction and geometry.
//!
//! # Responsibility
//! - Rebuild the render-ready forest from each person snapshot.
//! - Scope snapshots to one couple's descendants at bounded depth.
//! - Derive the card geometry a renderer draws connectors with.
//!
//! # Invariants
//! - A rebuild never mutates a previously returned forest.
//! - A spouse pair contributes exactly one root entry.
//! - A child id appears at most once among a unit's children.

pub mod builder;
pub mod layout;
pub mod scope;
pub mod unit;
