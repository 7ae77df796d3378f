// src/drawio/mod.rs

//! Serialization of the geometry model into draw.io (mxGraph) XML.

pub mod writer;

pub use writer::serialize;
