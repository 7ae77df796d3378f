// src/drawio/writer.rs

use std::fmt::Write;

use anyhow::Result;

use crate::layout::model::{Cell, CellKind, Geometry};

/// Id of the mxGraph root cell every document carries.
const ROOT_CELL: &str = "0";
/// Id of the canvas cell all visual cells are parented to.
const CANVAS_CELL: &str = "1";

/// Render the geometry model into a draw.io XML document.
///
/// The fixed outer tree is `mxfile` -> `diagram` -> `mxGraphModel` -> `root`,
/// with the two implicit structural cells first. Rect-shaped cells become
/// vertex `mxCell`s with an `mxGeometry` rectangle; tick lines become edge
/// `mxCell`s whose geometry is an absolute source/target point pair. Output
/// is deterministic for identical input.
pub fn serialize(cells: &[Cell]) -> Result<String> {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<mxfile host=\"mermaid2drawio\">\n");
    out.push_str("  <diagram name=\"Gantt\" id=\"gantt1\">\n");
    out.push_str("    <mxGraphModel>\n");
    out.push_str("      <root>\n");
    writeln!(out, "        <mxCell id=\"{ROOT_CELL}\" />")?;
    writeln!(
        out,
        "        <mxCell id=\"{CANVAS_CELL}\" parent=\"{ROOT_CELL}\" />"
    )?;

    for cell in cells {
        write_cell(&mut out, cell)?;
    }

    out.push_str("      </root>\n");
    out.push_str("    </mxGraphModel>\n");
    out.push_str("  </diagram>\n");
    out.push_str("</mxfile>\n");

    Ok(out)
}

fn write_cell(out: &mut String, cell: &Cell) -> Result<()> {
    let id = escape_xml(&cell.id);
    let value = escape_xml(&cell.value);
    let style = escape_xml(&style_for(&cell.kind));

    match &cell.geometry {
        Geometry::Rect {
            x,
            y,
            width,
            height,
        } => {
            writeln!(
                out,
                "        <mxCell id=\"{id}\" value=\"{value}\" style=\"{style}\" vertex=\"1\" parent=\"{CANVAS_CELL}\">"
            )?;
            writeln!(
                out,
                "          <mxGeometry x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" as=\"geometry\" />"
            )?;
            out.push_str("        </mxCell>\n");
        }
        Geometry::Segment { source, target } => {
            writeln!(
                out,
                "        <mxCell id=\"{id}\" value=\"{value}\" style=\"{style}\" edge=\"1\" parent=\"{CANVAS_CELL}\">"
            )?;
            out.push_str("          <mxGeometry as=\"geometry\">\n");
            writeln!(
                out,
                "            <mxPoint x=\"{}\" y=\"{}\" as=\"sourcePoint\" />",
                source.x, source.y
            )?;
            writeln!(
                out,
                "            <mxPoint x=\"{}\" y=\"{}\" as=\"targetPoint\" />",
                target.x, target.y
            )?;
            out.push_str("          </mxGeometry>\n");
            out.push_str("        </mxCell>\n");
        }
    }

    Ok(())
}

/// mxGraph style string for each cell role.
fn style_for(kind: &CellKind) -> String {
    match kind {
        CellKind::Task { fill } => format!("rounded=0;whiteSpace=wrap;fillColor={fill}"),
        CellKind::SectionBackground { fill } => {
            format!("rounded=0;fillColor={fill};strokeColor=none;")
        }
        CellKind::SectionLabel | CellKind::TickLabel => {
            "text;verticalAlign=middle;align=center;whiteSpace=wrap;".to_string()
        }
        CellKind::TickLine => "endArrow=none;strokeColor=#000000;dashed=1;".to_string(),
    }
}

/// Escape a value for use inside an XML attribute.
fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
