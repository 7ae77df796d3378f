// src/parse/mod.rs

//! Line-oriented parsing of the mermaid gantt mini-language.
//!
//! `grammar` recognizes individual lines; `scanner` walks the whole source
//! text and collects raw task records in source order.

pub mod grammar;
pub mod scanner;

pub use grammar::{LineClass, TaskFields};
pub use scanner::{scan, RawTaskRecord};
