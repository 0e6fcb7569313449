//! Redundancy resolution across the whole migration history
//!
//! A statement is redundant when a strictly later statement undoes it:
//! a CREATE followed by a DROP of the same kind and name, or an added
//! constraint followed by a DROP CONSTRAINT on the same table and name.
//! Only the earlier statement is filtered; the cancelling DROP is kept.
//! Pairs often span migration files, so this runs once over the complete
//! history rather than per file.

use ms_core::{FilterReason, Pipeline};
use ms_sql::{constraint_added, constraint_dropped, create_target, drop_target, ObjectReference};
use std::collections::HashMap;

/// Ascending positions of cancelling statements, keyed by what they drop.
type DropIndex = HashMap<ObjectReference, Vec<usize>>;

/// Mark every not-yet-filtered statement that a later statement undoes.
///
/// When several later statements match, the nearest one is cited.
pub fn resolve_redundancy(mut pipeline: Pipeline) -> Pipeline {
    let mut creates: Vec<(usize, ObjectReference)> = Vec::new();
    let mut adds: Vec<(usize, ObjectReference)> = Vec::new();
    let mut drops = DropIndex::new();
    let mut constraint_drops = DropIndex::new();

    // Statements filtered by an earlier pass take no part in pairing on
    // either side. Everything is recognized before anything is marked.
    for (index, stmt) in pipeline.statements().iter().enumerate() {
        if stmt.is_filtered() {
            continue;
        }
        let sql = stmt.text();
        if let Some(target) = create_target(sql) {
            creates.push((index, target));
        }
        if let Some(target) = drop_target(sql) {
            drops.entry(target).or_default().push(stmt.position());
        }
        if let Some(target) = constraint_added(sql) {
            adds.push((index, target));
        }
        if let Some(target) = constraint_dropped(sql) {
            constraint_drops
                .entry(target)
                .or_default()
                .push(stmt.position());
        }
    }

    let statements = pipeline.statements_mut();
    let mut filtered = 0;

    for (index, target) in creates {
        let position = statements[index].position();
        let Some(dropped_by) = next_after(&drops, &target, position) else {
            continue;
        };
        if let ObjectReference::Object { kind, name } = target {
            log::info!(
                "CREATE {} \"{}\" filtered: dropped later at statement {}",
                kind,
                name,
                dropped_by
            );
            let reason = FilterReason::CreateDropped {
                object_kind: kind,
                name,
                dropped_by,
            };
            if statements[index].mark_filtered(reason) {
                filtered += 1;
            }
        }
    }

    for (index, target) in adds {
        let position = statements[index].position();
        let Some(dropped_by) = next_after(&constraint_drops, &target, position) else {
            continue;
        };
        if let ObjectReference::Constraint { table, name } = target {
            log::info!(
                "ADD CONSTRAINT \"{}\" on \"{}\" filtered: dropped later at statement {}",
                name,
                table,
                dropped_by
            );
            let reason = FilterReason::ConstraintDropped {
                table,
                constraint: name,
                dropped_by,
            };
            if statements[index].mark_filtered(reason) {
                filtered += 1;
            }
        }
    }

    log::debug!("Redundancy resolution filtered {} statements", filtered);
    pipeline
}

/// First cancelling position strictly after `position`.
fn next_after(index: &DropIndex, target: &ObjectReference, position: usize) -> Option<usize> {
    let positions = index.get(target)?;
    let at = positions.partition_point(|&p| p <= position);
    positions.get(at).copied()
}

#[cfg(test)]
#[path = "redundancy_test.rs"]
mod tests;
