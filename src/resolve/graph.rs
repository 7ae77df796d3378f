// src/resolve/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::parse::RawTaskRecord;
use crate::resolve::fields::StartSpec;

/// Explicit `after` dependency graph over raw records.
///
/// Records are addressed by their index in the input slice, which is also
/// their source order. The graph pre-classifies every start field and keeps,
/// per referenced id, the list of records waiting on it, so the resolver can
/// advance its frontier without rescanning the whole input.
#[derive(Debug)]
pub struct DependencyGraph {
    specs: Vec<StartSpec>,
    waiting_on: HashMap<String, Vec<usize>>,
}

impl DependencyGraph {
    /// Build the graph from raw records.
    ///
    /// Cyclic `after` chains are diagnosed here with a warning; they are not
    /// an error, the affected records simply take the forced fallback start
    /// during resolution.
    pub fn build(records: &[RawTaskRecord]) -> Self {
        let specs: Vec<StartSpec> = records
            .iter()
            .map(|r| StartSpec::classify(&r.start_spec))
            .collect();

        let mut waiting_on: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, spec) in specs.iter().enumerate() {
            if let StartSpec::After(Some(ref_id)) = spec {
                waiting_on.entry(ref_id.clone()).or_default().push(idx);
            }
        }

        report_cycles(records, &specs);

        Self { specs, waiting_on }
    }

    /// Interpreted start field of a record.
    pub fn spec(&self, idx: usize) -> &StartSpec {
        &self.specs[idx]
    }

    /// Records that are resolvable without any dependency, in source order.
    pub fn seeds(&self) -> impl Iterator<Item = usize> + '_ {
        self.specs
            .iter()
            .enumerate()
            .filter(|(_, spec)| matches!(spec, StartSpec::Date(_) | StartSpec::Fallback))
            .map(|(idx, _)| idx)
    }

    /// Records whose start waits on the given id.
    pub fn waiters_on(&self, id: &str) -> &[usize] {
        self.waiting_on.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Detect cycles in the `after` graph and log them.
///
/// Edge direction: referenced record -> waiting record. Duplicate ids add one
/// edge per defining record, which over-approximates but never misses a
/// cycle.
fn report_cycles(records: &[RawTaskRecord], specs: &[StartSpec]) {
    let mut by_id: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        by_id.entry(record.id.as_str()).or_default().push(idx);
    }

    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
    for idx in 0..records.len() {
        graph.add_node(idx);
    }
    for (idx, spec) in specs.iter().enumerate() {
        if let StartSpec::After(Some(ref_id)) = spec {
            if *ref_id == records[idx].id {
                warn!(
                    task = %records[idx].id,
                    "task depends on its own id; it will use a fallback start"
                );
                continue;
            }
            for &dep_idx in by_id.get(ref_id.as_str()).map(Vec::as_slice).unwrap_or(&[]) {
                if dep_idx != idx {
                    graph.add_edge(dep_idx, idx, ());
                }
            }
        }
    }

    if let Err(cycle) = toposort(&graph, None) {
        let idx = cycle.node_id();
        warn!(
            task = %records[idx].id,
            "cycle detected in `after` dependencies; affected tasks will use a fallback start"
        );
    }
}
