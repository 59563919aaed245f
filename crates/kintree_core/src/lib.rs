//! Core domain logic for Kintree.
//! This crate is the single source of truth for how a flat genealogical
//! record snapshot becomes a render-ready family forest.

pub mod forest;
pub mod logging;
pub mod model;
pub mod snapshot;

pub use forest::builder::{build_forest, build_forest_with_states};
pub use forest::layout::{
    child_connector, child_drop_offset, couple_geometry, ChildConnector, CoupleGeometry,
    DropBridge, CARD_WIDTH, SPOUSE_GAP,
};
pub use forest::scope::select_family;
pub use forest::unit::{ExpandedStates, FamilyForest, FamilyUnit, GenderTally};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Gender, Person, PersonId, RecordStatus};
pub use snapshot::intake::{filter_by_status, normalize_records, RawPersonRecord, RawRef};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
