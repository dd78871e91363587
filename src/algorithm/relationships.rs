//! Relationship derivation
//!
//! Runs once after parsing completes and fills in the facts the input never
//! states directly: who is married to whom, who is whose sibling, and which
//! individuals are known to be childless. A family whose husband or wife is
//! missing from the record table is skipped silently; that is incomplete
//! data, not an error.

use crate::models::{Offspring, RecordCollection};

/// Derive spouse and sibling relations and resolve the childless sentinel
pub fn derive_relationships(collection: &mut RecordCollection) {
    derive_spouses(collection);
    derive_siblings(collection);
    resolve_childless(collection);
}

/// Link husband and wife of every family that has both recorded
fn derive_spouses(collection: &mut RecordCollection) {
    let pairs: Vec<(String, String)> = collection
        .families_in_order()
        .filter_map(|family| Some((family.husband_id.clone()?, family.wife_id.clone()?)))
        .collect();

    for (husband_id, wife_id) in pairs {
        // Both spouses must be present in the record table.
        if collection.individual(&husband_id).is_none()
            || collection.individual(&wife_id).is_none()
        {
            continue;
        }
        if let Some(husband) = collection.individual_mut(&husband_id) {
            husband.spouse_id = Some(wife_id.clone());
        }
        if let Some(wife) = collection.individual_mut(&wife_id) {
            wife.spouse_id = Some(husband_id.clone());
        }
    }
}

/// Record every ordered pair of distinct children of a family as siblings
fn derive_siblings(collection: &mut RecordCollection) {
    let child_lists: Vec<Vec<String>> = collection
        .families_in_order()
        .map(|family| family.children.clone())
        .collect();

    for children in child_lists {
        for child_id in &children {
            for sibling_id in &children {
                if child_id == sibling_id {
                    continue;
                }
                if let Some(child) = collection.individual_mut(child_id) {
                    child.add_sibling(sibling_id);
                }
            }
        }
    }
}

/// Mark individuals never assigned a children list as known childless
fn resolve_childless(collection: &mut RecordCollection) {
    let ids: Vec<String> = collection.individual_ids().to_vec();
    for id in ids {
        if let Some(individual) = collection.individual_mut(&id) {
            if individual.children == Offspring::Unresolved {
                individual.children = Offspring::Childless;
            }
        }
    }
}
