use chrono::NaiveDate;

use mermaid2drawio::config::LayoutConfig;
use mermaid2drawio::errors::ConvertError;
use mermaid2drawio::layout::{layout, Cell, CellKind, Geometry};
use mermaid2drawio::resolve::Task;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn task(id: &str, name: &str, section: Option<&str>, start: NaiveDate, days: i64) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        section: section.map(str::to_string),
        start,
        duration_days: days,
    }
}

fn rect(cell: &Cell) -> (i64, i64, i64, i64) {
    match cell.geometry {
        Geometry::Rect {
            x,
            y,
            width,
            height,
        } => (x, y, width, height),
        Geometry::Segment { .. } => panic!("expected rect geometry for {}", cell.id),
    }
}

#[test]
fn empty_task_list_is_rejected() {
    let err = layout(&[], &LayoutConfig::default()).expect_err("zero rows must not layout");
    assert!(matches!(err, ConvertError::EmptyInput));
}

#[test]
fn single_task_produces_background_label_and_first_tick() {
    let tasks = vec![task("a1", "Only", Some("S1"), date(2024, 1, 1), 3)];
    let cells = layout(&tasks, &LayoutConfig::default()).expect("layout");

    assert!(cells.iter().any(|c| matches!(c.kind, CellKind::SectionBackground { .. })));
    assert!(cells
        .iter()
        .any(|c| c.kind == CellKind::SectionLabel && c.value == "S1"));
    assert!(cells.iter().any(|c| c.id == "tick1"));
    assert!(cells
        .iter()
        .any(|c| c.kind == CellKind::TickLabel && c.value == "01/01"));
}

#[test]
fn sections_render_in_first_seen_order_with_contiguous_rows() {
    let cfg = LayoutConfig::default();
    let tasks = vec![
        task("a1", "A", Some("S1"), date(2024, 1, 1), 2),
        task("b1", "B", Some("S2"), date(2024, 1, 1), 2),
        task("a2", "C", Some("S1"), date(2024, 1, 2), 2),
    ];
    let cells = layout(&tasks, &cfg).expect("layout");

    // S1 declared first, so its label comes first even though its second
    // task was resolved after S2's.
    let labels: Vec<&Cell> = cells
        .iter()
        .filter(|c| c.kind == CellKind::SectionLabel)
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].value, "S1");
    assert_eq!(labels[1].value, "S2");

    // Row order is the flattened section order: A, C, then B; rows stack
    // contiguously with no gaps beyond the configured row gap (zero here).
    let bars: Vec<&Cell> = cells
        .iter()
        .filter(|c| matches!(c.kind, CellKind::Task { .. }))
        .collect();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].value, "A");
    assert_eq!(bars[1].value, "C");
    assert_eq!(bars[2].value, "B");
    for (i, bar) in bars.iter().enumerate() {
        let (_, y, _, h) = rect(bar);
        assert_eq!(y, cfg.left_margin + i as i64 * cfg.row_height());
        assert_eq!(h, cfg.task_row_height);
    }

    // One background per section, spanning the section column plus the
    // whole timeline, heights proportional to row counts.
    let backgrounds: Vec<&Cell> = cells
        .iter()
        .filter(|c| matches!(c.kind, CellKind::SectionBackground { .. }))
        .collect();
    assert_eq!(backgrounds.len(), 2);
    let (bx, by, bw, bh) = rect(backgrounds[0]);
    let total_days = 4; // min start Jan 1, max end Jan 4, inclusive span
    assert_eq!(bx, cfg.left_margin);
    assert_eq!(by, cfg.left_margin);
    assert_eq!(bw, cfg.section_column_width + total_days * cfg.day_width);
    assert_eq!(bh, 2 * cfg.task_row_height);
    let (_, _, _, bh2) = rect(backgrounds[1]);
    assert_eq!(bh2, cfg.task_row_height);
}

#[test]
fn adjacent_sections_alternate_palette_colors() {
    let cfg = LayoutConfig::default();
    let tasks = vec![
        task("a", "A", Some("S1"), date(2024, 1, 1), 1),
        task("b", "B", Some("S2"), date(2024, 1, 1), 1),
        task("c", "C", Some("S3"), date(2024, 1, 1), 1),
    ];
    let cells = layout(&tasks, &cfg).expect("layout");

    let fills: Vec<&str> = cells
        .iter()
        .filter_map(|c| match &c.kind {
            CellKind::SectionBackground { fill } => Some(fill.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 3);
    assert_eq!(fills[0], cfg.section_background_palette[0]);
    assert_eq!(fills[1], cfg.section_background_palette[1]);
    assert_eq!(fills[2], cfg.section_background_palette[0]);
}

#[test]
fn task_bar_positions_follow_day_arithmetic() {
    let cfg = LayoutConfig::default();
    let tasks = vec![
        task("a1", "A", None, date(2024, 1, 1), 5),
        task("a2", "B", None, date(2024, 1, 6), 3),
    ];
    let cells = layout(&tasks, &cfg).expect("layout");

    let bars: Vec<&Cell> = cells
        .iter()
        .filter(|c| matches!(c.kind, CellKind::Task { .. }))
        .collect();
    let timeline_x = cfg.left_margin + cfg.section_column_width;

    let (ax, _, aw, _) = rect(bars[0]);
    assert_eq!(ax, timeline_x);
    assert_eq!(aw, 5 * cfg.day_width);

    let (bx, _, bw, _) = rect(bars[1]);
    assert_eq!(bx, timeline_x + 5 * cfg.day_width);
    assert_eq!(bw, 3 * cfg.day_width);
}

#[test]
fn tiny_bars_keep_a_minimum_width() {
    let mut cfg = LayoutConfig::default();
    cfg.day_width = 1;
    let tasks = vec![task("a1", "A", None, date(2024, 1, 1), 2)];
    let cells = layout(&tasks, &cfg).expect("layout");

    let bar = cells
        .iter()
        .find(|c| matches!(c.kind, CellKind::Task { .. }))
        .expect("task bar");
    let (_, _, w, _) = rect(bar);
    assert_eq!(w, 4);
}

#[test]
fn tick_lines_span_the_row_area() {
    let cfg = LayoutConfig::default();
    let tasks = vec![
        task("a1", "A", None, date(2024, 1, 1), 5),
        task("a2", "B", None, date(2024, 1, 3), 5),
    ];
    let cells = layout(&tasks, &cfg).expect("layout");

    let rows_height = 2 * cfg.row_height() - cfg.row_gap;
    for cell in cells.iter().filter(|c| c.kind == CellKind::TickLine) {
        match &cell.geometry {
            Geometry::Segment { source, target } => {
                assert_eq!(source.x, target.x);
                assert_eq!(source.y, cfg.left_margin);
                assert_eq!(target.y, cfg.left_margin + rows_height);
            }
            Geometry::Rect { .. } => panic!("tick lines must be segments"),
        }
    }
}

#[test]
fn dense_tick_labels_are_thinned_to_the_minimum_gap() {
    let mut cfg = LayoutConfig::default();
    cfg.day_width = 2; // 7-day ticks land every 14px, well under the 48px gap
    let tasks = vec![task("a1", "Long", None, date(2024, 1, 1), 200)];
    let cells = layout(&tasks, &cfg).expect("layout");

    let tick_count = cells.iter().filter(|c| c.kind == CellKind::TickLine).count();
    let label_centers: Vec<i64> = cells
        .iter()
        .filter(|c| c.kind == CellKind::TickLabel)
        .map(|c| {
            let (x, _, w, _) = rect(c);
            x + w / 2
        })
        .collect();

    assert!(!label_centers.is_empty(), "first tick label is always emitted");
    assert!(
        label_centers.len() < tick_count,
        "dense timeline must drop some labels"
    );
    for pair in label_centers.windows(2) {
        assert!(
            pair[1] - pair[0] >= cfg.min_label_gap_pixels,
            "labels at {} and {} are too close",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn spec_scenario_two_tasks_one_section() {
    let cfg = LayoutConfig::default();
    let tasks = vec![
        task("a1", "Task A", Some("S1"), date(2024, 1, 1), 5),
        task("a2", "Task B", Some("S1"), date(2024, 1, 6), 3),
    ];
    let cells = layout(&tasks, &cfg).expect("layout");

    let backgrounds = cells
        .iter()
        .filter(|c| matches!(c.kind, CellKind::SectionBackground { .. }))
        .count();
    assert_eq!(backgrounds, 1, "one shared section background");

    let labels: Vec<&Cell> = cells
        .iter()
        .filter(|c| c.kind == CellKind::SectionLabel)
        .collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].value, "S1");

    // Label is vertically centered within the two-row block.
    let (_, label_y, _, _) = rect(labels[0]);
    let block_height = 2 * cfg.row_height() - cfg.row_gap;
    assert_eq!(
        label_y,
        cfg.left_margin + (block_height - cfg.task_row_height) / 2
    );

    let bars: Vec<&Cell> = cells
        .iter()
        .filter(|c| matches!(c.kind, CellKind::Task { .. }))
        .collect();
    assert_eq!(bars.len(), 2);
    let (_, ay, _, _) = rect(bars[0]);
    let (_, by, _, _) = rect(bars[1]);
    assert_eq!(by - ay, cfg.row_height(), "rows are contiguous");
}
