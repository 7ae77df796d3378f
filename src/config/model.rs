// src/config/model.rs

use serde::Deserialize;

/// Layout configuration as read from an optional TOML file.
///
/// Every field has a default, so the empty document is a valid config and a
/// partial override file only needs to mention the keys it changes:
///
/// ```toml
/// day_width = 30
/// tick_interval_days = 14
/// section_background_palette = ["#FFF8F0", "#F0F8FF"]
/// ```
///
/// The config is passed explicitly into layout and serialization; nothing in
/// the core reads global state.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal pixels per day.
    #[serde(default = "default_day_width")]
    pub day_width: i64,

    /// Height of one task rectangle (and one row) in pixels.
    #[serde(default = "default_task_row_height")]
    pub task_row_height: i64,

    /// Margin on the left of the section column and above the first row.
    #[serde(default = "default_left_margin")]
    pub left_margin: i64,

    /// Vertical gap between consecutive rows.
    #[serde(default = "default_row_gap")]
    pub row_gap: i64,

    /// Fill color for task rectangles (hex).
    #[serde(default = "default_task_fill_color")]
    pub task_fill_color: String,

    /// Days between timeline ticks (default weekly).
    #[serde(default = "default_tick_interval_days")]
    pub tick_interval_days: i64,

    /// Minimal horizontal pixel gap between emitted tick labels.
    ///
    /// Labels closer than this to the previously *emitted* label are dropped
    /// so dense timelines stay readable.
    #[serde(default = "default_min_label_gap_pixels")]
    pub min_label_gap_pixels: i64,

    /// Width reserved at the left for section labels.
    #[serde(default = "default_section_column_width")]
    pub section_column_width: i64,

    /// Background colors for section blocks, cycled by section index so
    /// adjacent sections alternate visually.
    #[serde(default = "default_section_background_palette")]
    pub section_background_palette: Vec<String>,
}

fn default_day_width() -> i64 {
    20
}

fn default_task_row_height() -> i64 {
    20
}

fn default_left_margin() -> i64 {
    40
}

fn default_row_gap() -> i64 {
    0
}

fn default_task_fill_color() -> String {
    "#CDEBFF".to_string()
}

fn default_tick_interval_days() -> i64 {
    7
}

fn default_min_label_gap_pixels() -> i64 {
    48
}

fn default_section_column_width() -> i64 {
    120
}

fn default_section_background_palette() -> Vec<String> {
    vec!["#FBF7F3".to_string(), "#F3F7FB".to_string()]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_width: default_day_width(),
            task_row_height: default_task_row_height(),
            left_margin: default_left_margin(),
            row_gap: default_row_gap(),
            task_fill_color: default_task_fill_color(),
            tick_interval_days: default_tick_interval_days(),
            min_label_gap_pixels: default_min_label_gap_pixels(),
            section_column_width: default_section_column_width(),
            section_background_palette: default_section_background_palette(),
        }
    }
}

impl LayoutConfig {
    /// Vertical distance between the tops of consecutive rows.
    pub fn row_height(&self) -> i64 {
        self.task_row_height + self.row_gap
    }

    /// Background color for the section at `index`, cycling the palette.
    ///
    /// The palette is validated to be non-empty, but fall back to the task
    /// fill rather than panicking if an unvalidated config sneaks through.
    pub fn section_background(&self, index: usize) -> &str {
        if self.section_background_palette.is_empty() {
            return &self.task_fill_color;
        }
        &self.section_background_palette[index % self.section_background_palette.len()]
    }
}
