// src/parse/scanner.rs

use tracing::{debug, trace};

use crate::parse::grammar::{self, LineClass};

/// One recognized task declaration, tagged with the section that was active
/// when it appeared. Immutable once created; consumed by the resolver.
///
/// `start_spec` and `length_spec` are kept as raw text here: their meaning
/// (date literal, `after <id>` reference, day/week count) is only decided
/// during dependency resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTaskRecord {
    pub name: String,
    pub id: String,
    pub section: Option<String>,
    pub start_spec: String,
    pub length_spec: String,
}

/// Scan source text and collect raw task records in source order.
///
/// Lines before the `gantt` keyword are ignored entirely. Inside the block,
/// blank lines and `%%` comments are skipped, `section <name>` switches the
/// active section, task declarations become records, and anything else is
/// silently dropped. This stage never fails; garbage input yields an empty
/// list, which the layout stage later rejects.
pub fn scan(text: &str) -> Vec<RawTaskRecord> {
    let mut records = Vec::new();
    let mut in_gantt = false;
    let mut current_section: Option<String> = None;

    for line in text.lines() {
        if !in_gantt {
            if grammar::is_gantt_start(line) {
                in_gantt = true;
            }
            continue;
        }

        match grammar::classify(line) {
            LineClass::Skip => {}
            LineClass::Section(name) => {
                trace!(section = %name, "switching active section");
                current_section = Some(name.to_string());
            }
            LineClass::Task(fields) => {
                records.push(RawTaskRecord {
                    name: fields.name.to_string(),
                    id: fields.id.to_string(),
                    section: current_section.clone(),
                    start_spec: fields.start.to_string(),
                    length_spec: fields.length.to_string(),
                });
            }
            LineClass::Other => {
                trace!(line = %line.trim(), "dropping unrecognized line");
            }
        }
    }

    debug!(records = records.len(), in_gantt, "scan complete");
    records
}
