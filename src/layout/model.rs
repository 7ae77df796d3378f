// src/layout/model.rs

/// Absolute point in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Geometry of a cell: a rectangle for vertex-shaped cells, a point pair for
/// edge-shaped cells (tick lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    Rect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    Segment {
        source: Point,
        target: Point,
    },
}

/// Role of a cell in the diagram. Rectangle roles that are painted carry
/// their fill color; the serializer turns each role into a concrete mxGraph
/// style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Task { fill: String },
    SectionBackground { fill: String },
    SectionLabel,
    TickLine,
    TickLabel,
}

/// One positioned element of the diagram, produced by the layout builder and
/// consumed only by the serializer.
///
/// Ids are role-prefixed counters (`task1`, `bg1`, `sec_1`, ...) assigned by
/// the builder, so output is stable across repeated runs on identical input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: String,
    pub value: String,
    pub kind: CellKind,
    pub geometry: Geometry,
}
