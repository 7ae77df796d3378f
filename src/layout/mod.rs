// src/layout/mod.rs

//! Pixel geometry for the diagram: task bars, section backgrounds and
//! labels, timeline ticks and their thinned labels.

pub mod builder;
pub mod model;

pub use builder::layout;
pub use model::{Cell, CellKind, Geometry, Point};
