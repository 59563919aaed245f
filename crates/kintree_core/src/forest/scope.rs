//! Scoped family selection.
//!
//! # Responsibility
//! - Narrow a snapshot to one couple and its descendants at bounded
//!   depth, as input for the forest builder.
//!
//! # Invariants
//! - An unresolvable start id falls back to the full snapshot.
//! - Depth counts parent hops from the start couple; spouses ride along
//!   at their partner's depth and are not descended from.
//! - No person is selected twice, so descent terminates on any input,
//!   parent cycles included.

use crate::model::person::Person;
use log::debug;

/// Selects `start_id`'s couple and its descendants within `max_depth`
/// parent hops.
///
/// The result keeps discovery order: start person, their spouse if
/// present, then descendants as found. Descent runs once from the start
/// person and once from the spouse reference, so children anchored to
/// either half of the couple are covered.
pub fn select_family(people: &[Person], start_id: &str, max_depth: u32) -> Vec<Person> {
    let Some(start) = people.iter().find(|person| person.id == start_id) else {
        debug!("event=family_scope status=fallback start_id={start_id}");
        return people.to_vec();
    };

    let mut selected: Vec<Person> = vec![start.clone()];
    if let Some(spouse_id) = &start.spouse_id {
        if let Some(spouse) = find_person(people, spouse_id) {
            selected.push(spouse.clone());
        }
    }

    collect_descendants(people, start_id, 1, max_depth, &mut selected);
    if let Some(spouse_id) = &start.spouse_id {
        collect_descendants(people, spouse_id, 1, max_depth, &mut selected);
    }

    debug!(
        "event=family_scope status=scoped start_id={} max_depth={} selected={}",
        start_id,
        max_depth,
        selected.len()
    );
    selected
}

fn collect_descendants(
    people: &[Person],
    parent_id: &str,
    depth: u32,
    max_depth: u32,
    selected: &mut Vec<Person>,
) {
    if depth > max_depth {
        return;
    }
    for child in people
        .iter()
        .filter(|person| person.parent_id.as_deref() == Some(parent_id))
    {
        if contains(selected, &child.id) {
            continue;
        }
        selected.push(child.clone());
        if let Some(spouse_id) = &child.spouse_id {
            if !contains(selected, spouse_id) {
                if let Some(spouse) = find_person(people, spouse_id) {
                    selected.push(spouse.clone());
                }
            }
        }
        collect_descendants(people, &child.id, depth + 1, max_depth, selected);
    }
}

fn find_person<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|person| person.id == id)
}

fn contains(selected: &[Person], id: &str) -> bool {
    selected.iter().any(|person| person.id == id)
}
