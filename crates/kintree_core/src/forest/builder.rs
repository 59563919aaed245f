//! Forest construction from a flat person snapshot.
//!
//! # Responsibility
//! - Merge spouse pairs and attach children to both halves of a couple.
//! - Identify root units without emitting a couple twice.
//!
//! # Invariants
//! - Dangling parent references promote the person to root.
//! - Children keep discovery order and are deduplicated by id.
//! - The builder never mutates its input snapshot; every call allocates
//!   a fresh forest.

use crate::forest::unit::{ExpandedStates, FamilyForest, FamilyUnit};
use crate::model::person::{Person, PersonId};
use log::debug;
use std::collections::HashMap;

/// Builds the display forest with every unit expanded.
pub fn build_forest(people: &[Person]) -> FamilyForest {
    build_forest_with_states(people, &ExpandedStates::default())
}

/// Builds the display forest, seeding collapse state from `states`.
///
/// Four passes over the snapshot: unit creation, spouse resolution,
/// parent-child linking with couple merge, root identification. Order
/// of `people` drives child discovery order and root order.
pub fn build_forest_with_states(people: &[Person], states: &ExpandedStates) -> FamilyForest {
    let mut units: HashMap<PersonId, FamilyUnit> = HashMap::with_capacity(people.len());
    for person in people {
        units.insert(
            person.id.clone(),
            FamilyUnit::new(person.clone(), states.is_expanded(&person.id)),
        );
    }

    // Spouse resolution. One-sided references stay one-sided: the link
    // is set only on the side whose record stores it.
    for person in people {
        let resolvable = person
            .spouse_id
            .as_ref()
            .filter(|id| units.contains_key(*id));
        if let Some(spouse_id) = resolvable.cloned() {
            if let Some(unit) = units.get_mut(&person.id) {
                unit.spouse = Some(spouse_id);
            }
        }
    }

    // Parent-child linking. A child anchored to either half of a couple
    // is listed under both halves, so rendering either card shows the
    // full family.
    for person in people {
        let Some(parent_id) = person
            .parent_id
            .as_ref()
            .filter(|id| units.contains_key(*id))
        else {
            continue;
        };
        attach_child(&mut units, parent_id, &person.id);

        let merge_spouse = units
            .get(parent_id)
            .and_then(|parent| parent.person.spouse_id.clone())
            .filter(|id| units.contains_key(id));
        if let Some(spouse_id) = merge_spouse {
            attach_child(&mut units, &spouse_id, &person.id);
        }
    }

    // Root identification. A person roots the forest when their parent
    // does not resolve here, unless they render as the attached half of
    // a couple instead: their resolvable spouse has a parent in the
    // set, or the couple is already rooted by its other half.
    let mut roots: Vec<PersonId> = Vec::new();
    for person in people {
        let parent_in_set = person
            .parent_id
            .as_ref()
            .is_some_and(|id| units.contains_key(id));
        if parent_in_set {
            continue;
        }

        let spouse = person.spouse_id.as_ref().and_then(|id| units.get(id));
        let spouse_has_parent = spouse.is_some_and(|unit| {
            unit.person
                .parent_id
                .as_ref()
                .is_some_and(|id| units.contains_key(id))
        });
        if spouse_has_parent {
            continue;
        }

        let already_rooted = roots
            .iter()
            .any(|id| id == &person.id || Some(id) == person.spouse_id.as_ref());
        if !already_rooted {
            roots.push(person.id.clone());
        }
    }

    debug!(
        "event=forest_built units={} roots={}",
        units.len(),
        roots.len()
    );
    FamilyForest::from_parts(units, roots)
}

fn attach_child(units: &mut HashMap<PersonId, FamilyUnit>, parent_id: &str, child_id: &str) {
    if let Some(parent) = units.get_mut(parent_id) {
        if !parent.children.iter().any(|id| id == child_id) {
            parent.children.push(child_id.to_string());
        }
    }
}
