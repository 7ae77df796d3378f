// src/resolve/mod.rs

//! Dependency resolution: raw task records -> concretely dated tasks.
//!
//! `fields` interprets the free-form start/length fields, `graph` holds the
//! explicit `after` dependency graph, and `resolver` runs the queue-based
//! resolution over it.

pub mod fields;
pub mod graph;
pub mod resolver;

pub use fields::StartSpec;
pub use graph::DependencyGraph;
pub use resolver::{resolve, Task, MAX_RESOLUTION_DEPTH};
