// src/layout/builder.rs

use chrono::Duration;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::errors::ConvertError;
use crate::layout::model::{Cell, CellKind, Geometry, Point};
use crate::resolve::Task;

/// Narrowest rendered task bar, so zero-width bars stay visible even at tiny
/// day widths.
const MIN_BAR_WIDTH: i64 = 4;

/// Vertical offset of tick labels above the top margin.
const TICK_LABEL_RISE: i64 = 40;

/// Compute absolute pixel geometry for all diagram cells.
///
/// Tasks are grouped by section in first-seen order and stacked contiguously
/// top to bottom; each section gets one background rectangle (palette cycled
/// by section index) and one centered label in the left column. Dashed
/// timeline ticks are drawn every `tick_interval_days`, and tick labels are
/// emitted greedily left to right, skipping any label closer than
/// `min_label_gap_pixels` to the previously emitted one.
///
/// Cell order in the output is backgrounds and section labels first, then
/// task bars, then ticks and tick labels, so ticks paint on top of bars.
///
/// Fails with [`ConvertError::EmptyInput`] when there are no tasks: a
/// diagram with zero rows is meaningless and must not be produced.
pub fn layout(tasks: &[Task], cfg: &LayoutConfig) -> Result<Vec<Cell>, ConvertError> {
    let min_date = tasks
        .iter()
        .map(|t| t.start)
        .min()
        .ok_or(ConvertError::EmptyInput)?;
    let max_date = tasks
        .iter()
        .map(|t| t.end())
        .max()
        .ok_or(ConvertError::EmptyInput)?;
    let total_days = (max_date - min_date).num_days() + 1;

    // Group by section, preserving first-seen order, then flatten to rows.
    let mut section_order: Vec<Option<String>> = Vec::new();
    let mut grouped: Vec<Vec<&Task>> = Vec::new();
    for task in tasks {
        match section_order.iter().position(|s| *s == task.section) {
            Some(si) => grouped[si].push(task),
            None => {
                section_order.push(task.section.clone());
                grouped.push(vec![task]);
            }
        }
    }
    let rows: Vec<&Task> = grouped.iter().flatten().copied().collect();

    let row_height = cfg.row_height();
    let total_rows = rows.len() as i64;
    let rows_height = total_rows * row_height - cfg.row_gap;
    let y_start = cfg.left_margin;
    let timeline_x = cfg.left_margin + cfg.section_column_width;

    debug!(
        tasks = tasks.len(),
        sections = section_order.len(),
        total_days,
        "computing diagram geometry"
    );

    let mut cells = Vec::new();

    // Section backgrounds and one centered label per section block. The
    // background spans the left section column plus the full timeline width.
    let mut row_index: i64 = 0;
    for (si, section) in section_order.iter().enumerate() {
        let tlist = &grouped[si];
        let block_start_y = y_start + row_index * row_height;
        let block_height = tlist.len() as i64 * row_height - cfg.row_gap;

        cells.push(Cell {
            id: format!("bg{}", si + 1),
            value: String::new(),
            kind: CellKind::SectionBackground {
                fill: cfg.section_background(si).to_string(),
            },
            geometry: Geometry::Rect {
                x: cfg.left_margin,
                y: block_start_y,
                width: cfg.section_column_width + total_days * cfg.day_width,
                height: block_height,
            },
        });

        let label_y = block_start_y + (block_height - cfg.task_row_height) / 2;
        cells.push(Cell {
            id: format!("sec_{}", si + 1),
            value: section.clone().unwrap_or_default(),
            kind: CellKind::SectionLabel,
            geometry: Geometry::Rect {
                x: cfg.left_margin,
                y: label_y,
                width: cfg.section_column_width - 8,
                height: cfg.task_row_height,
            },
        });

        row_index += tlist.len() as i64;
    }

    // Task bars, row by row in flattened order.
    for (i, task) in rows.iter().enumerate() {
        let x = timeline_x + (task.start - min_date).num_days() * cfg.day_width;
        let width = (task.duration_days * cfg.day_width).max(MIN_BAR_WIDTH);
        let y = y_start + i as i64 * row_height;

        cells.push(Cell {
            id: format!("task{}", i + 1),
            value: task.name.clone(),
            kind: CellKind::Task {
                fill: cfg.task_fill_color.clone(),
            },
            geometry: Geometry::Rect {
                x,
                y,
                width,
                height: cfg.task_row_height,
            },
        });
    }

    // Dashed vertical ticks spanning the row area, with greedily thinned
    // labels. The first tick's label is always emitted.
    let tick_bottom = y_start
        + if rows_height > 0 {
            rows_height
        } else {
            cfg.task_row_height
        };
    let mut last_label_x: i64 = -1_000_000;
    let mut offset = 0;
    while offset < total_days {
        let day = min_date + Duration::days(offset);
        let x = timeline_x + offset * cfg.day_width;

        cells.push(Cell {
            id: format!("tick{}", offset + 1),
            value: String::new(),
            kind: CellKind::TickLine,
            geometry: Geometry::Segment {
                source: Point { x, y: y_start },
                target: Point { x, y: tick_bottom },
            },
        });

        if x - last_label_x >= cfg.min_label_gap_pixels {
            let label_width = cfg.min_label_gap_pixels.max(40);
            cells.push(Cell {
                id: format!("lbl{}", offset + 1),
                value: day.format("%m/%d").to_string(),
                kind: CellKind::TickLabel,
                geometry: Geometry::Rect {
                    x: x - label_width / 2,
                    y: cfg.left_margin - TICK_LABEL_RISE,
                    width: label_width,
                    height: cfg.task_row_height,
                },
            });
            last_label_x = x;
        }

        offset += cfg.tick_interval_days;
    }

    Ok(cells)
}
