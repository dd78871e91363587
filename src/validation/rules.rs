//! The individual consistency checks
//!
//! Every check walks the collection in file order and pushes zero or more
//! violations. Missing optional fields make a rule not applicable for that
//! entity; the check moves on without emitting anything.

use crate::config::GedReaderConfig;
use crate::models::{Category, Gender, RecordCollection, RuleCode, Violation};
use crate::utils::date::{format_gedcom_date, months_between};
use chrono::NaiveDate;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::collections::HashMap;

/// US03: an individual's birth date must precede their death date
pub fn birth_before_death(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for individual in collection.individuals_in_order() {
        let (Some(birth), Some(death)) = (individual.birth_date, individual.death_date) else {
            continue;
        };
        if birth > death {
            violations.push(Violation::new(
                Category::Individual,
                RuleCode::Us03,
                vec![individual.id.clone()],
                format!(
                    "Birth date {} occurs after death date {}",
                    format_gedcom_date(birth),
                    format_gedcom_date(death)
                ),
            ));
        }
    }
}

/// US02: an individual must be born before any marriage they take part in
pub fn birth_before_marriage(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for individual in collection.individuals_in_order() {
        let Some(birth) = individual.birth_date else {
            continue;
        };
        for family in collection.families_in_order() {
            if !family.has_spouse(&individual.id) {
                continue;
            }
            let Some(marriage) = family.marriage_date else {
                continue;
            };
            if marriage < birth {
                violations.push(Violation::new(
                    Category::Individual,
                    RuleCode::Us02,
                    vec![individual.id.clone()],
                    format!(
                        "Birth date {} occurs after marriage date {}",
                        format_gedcom_date(birth),
                        format_gedcom_date(marriage)
                    ),
                ));
            }
        }
    }
}

/// US05: an individual cannot marry after their death
pub fn marriage_before_death(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for individual in collection.individuals_in_order() {
        let Some(death) = individual.death_date else {
            continue;
        };
        for family in collection.families_in_order() {
            if !family.has_spouse(&individual.id) {
                continue;
            }
            let Some(marriage) = family.marriage_date else {
                continue;
            };
            if death < marriage {
                violations.push(Violation::new(
                    Category::Individual,
                    RuleCode::Us05,
                    vec![individual.id.clone()],
                    format!(
                        "Died {} before marriage {}",
                        format_gedcom_date(death),
                        format_gedcom_date(marriage)
                    ),
                ));
            }
        }
    }
}

/// US04: a family's marriage date must precede its divorce date
pub fn marriage_before_divorce(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for family in collection.families_in_order() {
        let (Some(marriage), Some(divorce)) = (family.marriage_date, family.divorce_date) else {
            continue;
        };
        if marriage > divorce {
            let husband = member_display(collection, family.husband_id.as_deref());
            let wife = member_display(collection, family.wife_id.as_deref());
            violations.push(Violation::new(
                Category::Family,
                RuleCode::Us04,
                vec![family.id.clone()],
                format!(
                    "{husband} and {wife} married {} after divorce on {}",
                    format_gedcom_date(marriage),
                    format_gedcom_date(divorce)
                ),
            ));
        }
    }
}

/// US08: a child is born after their parents' marriage and no more than
/// nine months (month granularity) after their divorce
pub fn birth_within_wedlock(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for family in collection.families_in_order() {
        for child_id in &family.children {
            let Some(birth) = collection.individual(child_id).and_then(|c| c.birth_date) else {
                continue;
            };

            if let Some(marriage) = family.marriage_date {
                if birth < marriage {
                    violations.push(Violation::new(
                        Category::Family,
                        RuleCode::Us08,
                        vec![child_id.clone()],
                        format!(
                            "Born on {} before the marriage of their parents on {}",
                            format_gedcom_date(birth),
                            format_gedcom_date(marriage)
                        ),
                    ));
                }
            }

            if let Some(divorce) = family.divorce_date {
                if months_between(divorce, birth) > 9 {
                    violations.push(Violation::new(
                        Category::Family,
                        RuleCode::Us08,
                        vec![child_id.clone()],
                        format!(
                            "Born on {} more than 9 months after the divorce of their parents on {}",
                            format_gedcom_date(birth),
                            format_gedcom_date(divorce)
                        ),
                    ));
                }
            }
        }
    }
}

/// US09: a child is born before their mother's death and no more than nine
/// months (month granularity) after their father's death
pub fn birth_before_parent_death(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for family in collection.families_in_order() {
        let mother_death = family
            .wife_id
            .as_deref()
            .and_then(|id| collection.individual(id))
            .and_then(|mother| mother.death_date);
        let father_death = family
            .husband_id
            .as_deref()
            .and_then(|id| collection.individual(id))
            .and_then(|father| father.death_date);

        for child_id in &family.children {
            let Some(birth) = collection.individual(child_id).and_then(|c| c.birth_date) else {
                continue;
            };

            if let Some(death) = mother_death {
                if death < birth {
                    violations.push(Violation::new(
                        Category::Family,
                        RuleCode::Us09,
                        vec![child_id.clone()],
                        format!(
                            "Born on {} after the death of their mother on {}",
                            format_gedcom_date(birth),
                            format_gedcom_date(death)
                        ),
                    ));
                }
            }

            if let Some(death) = father_death {
                if months_between(death, birth) > 9 {
                    violations.push(Violation::new(
                        Category::Family,
                        RuleCode::Us09,
                        vec![child_id.clone()],
                        format!(
                            "Born on {} more than 9 months after the death of their father on {}",
                            format_gedcom_date(birth),
                            format_gedcom_date(death)
                        ),
                    ));
                }
            }
        }
    }
}

/// US23: no two individuals share both name and birth date
///
/// Emits one violation per unordered pair sharing a (name, birth date) key.
pub fn unique_name_and_birth(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    let mut groups: HashMap<(String, NaiveDate), Vec<&str>> = HashMap::new();
    let mut key_order: Vec<(String, NaiveDate)> = Vec::new();

    for individual in collection.individuals_in_order() {
        let Some(birth) = individual.birth_date else {
            continue;
        };
        let key = (individual.name.clone(), birth);
        let entry = groups.entry(key.clone()).or_default();
        if entry.is_empty() {
            key_order.push(key);
        }
        entry.push(&individual.id);
    }

    for key in &key_order {
        let ids = &groups[key];
        for (first, second) in ids.iter().tuple_combinations() {
            violations.push(Violation::new(
                Category::Individual,
                RuleCode::Us23,
                vec![(*first).to_string(), (*second).to_string()],
                format!(
                    "Have the same name and birth date {} - {}",
                    key.0,
                    format_gedcom_date(key.1)
                ),
            ));
        }
    }
}

/// US17: neither spouse of a family may appear in their own descendant chain
///
/// Walks every child's descendants recursively, guarded by a visited set and
/// a depth cap so malformed cyclic data cannot loop forever.
pub fn no_marriage_to_descendant(
    collection: &RecordCollection,
    config: &GedReaderConfig,
    violations: &mut Vec<Violation>,
) {
    for family in collection.families_in_order() {
        let (Some(husband_id), Some(wife_id)) =
            (family.husband_id.as_deref(), family.wife_id.as_deref())
        else {
            continue;
        };

        let mut visited = FxHashSet::default();
        for child_id in &family.children {
            descend(
                collection,
                husband_id,
                wife_id,
                child_id,
                &mut visited,
                config.max_descent_depth,
                violations,
            );
        }
    }
}

fn descend(
    collection: &RecordCollection,
    husband_id: &str,
    wife_id: &str,
    current_id: &str,
    visited: &mut FxHashSet<String>,
    depth: usize,
    violations: &mut Vec<Violation>,
) {
    if depth == 0 || !visited.insert(current_id.to_string()) {
        return;
    }
    let Some(individual) = collection.individual(current_id) else {
        return;
    };

    if individual.gender == Gender::Male && current_id == husband_id {
        violations.push(Violation::new(
            Category::Family,
            RuleCode::Us17,
            vec![current_id.to_string()],
            format!("Married to their female ancestor {wife_id}"),
        ));
        return;
    }
    if individual.gender == Gender::Female && current_id == wife_id {
        violations.push(Violation::new(
            Category::Family,
            RuleCode::Us17,
            vec![current_id.to_string()],
            format!("Married to their male ancestor {husband_id}"),
        ));
        return;
    }
    if individual.children.is_childless() {
        return;
    }

    for child_id in individual.children.ids() {
        // A self-referential child entry must not recurse.
        if child_id == current_id {
            continue;
        }
        descend(
            collection,
            husband_id,
            wife_id,
            child_id,
            visited,
            depth - 1,
            violations,
        );
    }
}

/// US18: an individual's derived spouse must not be one of their siblings
pub fn no_marriage_to_sibling(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for individual in collection.individuals_in_order() {
        let Some(spouse_id) = individual.spouse_id.as_deref() else {
            continue;
        };
        if individual.siblings.iter().any(|id| id == spouse_id) {
            violations.push(Violation::new(
                Category::Individual,
                RuleCode::Us18,
                vec![individual.id.clone()],
                format!("Married to their sibling {spouse_id}"),
            ));
        }
    }
}

/// US21: the recorded husband must be male and the recorded wife female
pub fn correct_gender_for_role(collection: &RecordCollection, violations: &mut Vec<Violation>) {
    for family in collection.families_in_order() {
        if let Some(husband_id) = family.husband_id.as_deref() {
            if collection
                .individual(husband_id)
                .is_some_and(|h| h.gender == Gender::Female)
            {
                violations.push(Violation::new(
                    Category::Family,
                    RuleCode::Us21,
                    vec![family.id.clone()],
                    format!("Husband {husband_id} is not male"),
                ));
            }
        }
        if let Some(wife_id) = family.wife_id.as_deref() {
            if collection
                .individual(wife_id)
                .is_some_and(|w| w.gender == Gender::Male)
            {
                violations.push(Violation::new(
                    Category::Family,
                    RuleCode::Us21,
                    vec![family.id.clone()],
                    format!("Wife {wife_id} is not female"),
                ));
            }
        }
    }
}

/// Render a family member as `id (name)` for messages, falling back to the
/// bare id when the name is unknown
fn member_display(collection: &RecordCollection, id: Option<&str>) -> String {
    match id {
        Some(id) => match collection.individual_name(id) {
            Some(name) if !name.is_empty() => format!("{id} ({name})"),
            _ => id.to_string(),
        },
        None => "unknown".to_string(),
    }
}
