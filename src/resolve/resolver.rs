// src/resolve/resolver.rs

use std::collections::{HashMap, VecDeque};

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::parse::RawTaskRecord;
use crate::resolve::fields::{parse_length, StartSpec};
use crate::resolve::graph::DependencyGraph;

/// Maximum depth of an `after` chain that will be resolved through the
/// dependency graph. Records are resolved at an explicit depth: a record
/// whose start is directly determinable has depth 1, and each `after` hop
/// adds 1. Records deeper than this (or on cyclic/dangling chains) take the
/// forced fallback start instead, which guarantees termination and totality.
pub const MAX_RESOLUTION_DEPTH: usize = 10;

/// A concretely dated task, ready for layout. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub section: Option<String>,
    pub start: NaiveDate,
    /// Always >= 1; clamped up when the length field computes to zero,
    /// negative, or nothing parseable.
    pub duration_days: i64,
}

impl Task {
    /// Exclusive end date: `start + duration_days`, exactly.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(self.duration_days)
    }
}

/// End date and resolution depth of a resolved id, for `after` lookups.
#[derive(Debug, Clone, Copy)]
struct ResolvedId {
    end: NaiveDate,
    depth: usize,
}

/// Resolve raw records into dated tasks. Total and terminating for any
/// input: every record yields exactly one task, in resolution order.
///
/// `reference_date` is the injected "current instant" used both for
/// unrecognized start formats and as the last-resort fallback; passing it
/// explicitly keeps resolution deterministic and testable.
///
/// Resolution walks a ready queue over the dependency graph: records whose
/// start is directly determinable seed the queue, and resolving a record
/// enqueues everything waiting on its id. If the same id is declared twice,
/// the later-resolved record overwrites the lookup table, though both still
/// produce a task.
pub fn resolve(records: &[RawTaskRecord], reference_date: NaiveDate) -> Vec<Task> {
    let graph = DependencyGraph::build(records);

    let mut tasks: Vec<Task> = Vec::with_capacity(records.len());
    let mut resolved = vec![false; records.len()];
    let mut id_table: HashMap<String, ResolvedId> = HashMap::new();

    let mut queue: VecDeque<usize> = graph.seeds().collect();

    while let Some(idx) = queue.pop_front() {
        if resolved[idx] {
            continue;
        }

        let (start, depth) = match graph.spec(idx) {
            StartSpec::Date(date) => (*date, 1),
            StartSpec::Fallback => {
                debug!(
                    task = %records[idx].id,
                    start = %records[idx].start_spec,
                    "unrecognized start format; using reference date"
                );
                (reference_date, 1)
            }
            StartSpec::After(Some(ref_id)) => match id_table.get(ref_id) {
                Some(dep) if dep.depth < MAX_RESOLUTION_DEPTH => (dep.end, dep.depth + 1),
                Some(_) => {
                    warn!(
                        task = %records[idx].id,
                        after = %ref_id,
                        "dependency chain exceeds max resolution depth; deferring to fallback"
                    );
                    continue;
                }
                // Not in the table yet; a later resolution of the id will
                // re-enqueue this record.
                None => continue,
            },
            // `after` with no reference id can never resolve here.
            StartSpec::After(None) => continue,
        };

        let record = &records[idx];
        let task = make_task(record, start);
        id_table.insert(
            record.id.clone(),
            ResolvedId {
                end: task.end(),
                depth,
            },
        );
        resolved[idx] = true;

        for &waiter in graph.waiters_on(&record.id) {
            if !resolved[waiter] {
                queue.push_back(waiter);
            }
        }

        tasks.push(task);
    }

    force_unresolved(records, &resolved, reference_date, &mut tasks);

    debug!(tasks = tasks.len(), "dependency resolution complete");
    tasks
}

/// Give every still-unresolved record (cycles, dangling or malformed `after`
/// references, over-deep chains) a fallback start: the earliest start among
/// resolved tasks, or the reference date if nothing resolved.
fn force_unresolved(
    records: &[RawTaskRecord],
    resolved: &[bool],
    reference_date: NaiveDate,
    tasks: &mut Vec<Task>,
) {
    let unresolved: Vec<usize> = (0..records.len()).filter(|&i| !resolved[i]).collect();
    if unresolved.is_empty() {
        return;
    }

    let fallback = tasks
        .iter()
        .map(|t| t.start)
        .min()
        .unwrap_or(reference_date);

    warn!(
        count = unresolved.len(),
        fallback = %fallback,
        "unresolvable `after` references; assigning fallback start"
    );

    for idx in unresolved {
        tasks.push(make_task(&records[idx], fallback));
    }
}

fn make_task(record: &RawTaskRecord, start: NaiveDate) -> Task {
    let duration_days = parse_length(&record.length_spec, start);
    Task {
        id: record.id.clone(),
        name: record.name.clone(),
        section: record.section.clone(),
        start,
        duration_days,
    }
}
