// src/errors.rs

//! Hard-failure taxonomy for the conversion pipeline.
//!
//! Parsing and dependency resolution never fail (unrecognized lines are
//! skipped, unparseable fields get defaults). The only hard failures are the
//! two below; everything else degrades to a best-effort task.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input contained no recognizable task lines (or no `gantt` block at
    /// all). A diagram with zero rows is meaningless, so layout refuses to
    /// produce one and no output file is written.
    #[error("no tasks found in input (missing `gantt` block, or no valid task lines)")]
    EmptyInput,

    /// The declared input path does not exist.
    #[error("input file not found: {0}")]
    MissingSource(PathBuf),
}
