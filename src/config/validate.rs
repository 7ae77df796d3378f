// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::LayoutConfig;

/// Run basic semantic validation against a loaded layout configuration.
///
/// This checks:
/// - `day_width`, `task_row_height` and `tick_interval_days` are >= 1
///   (a zero scale collapses every bar, a zero tick interval never advances)
/// - `row_gap`, margins and widths are not negative
/// - the section background palette has at least one color
///
/// It does **not** check that color strings are well-formed hex; draw.io
/// tolerates arbitrary style values.
pub fn validate_config(cfg: &LayoutConfig) -> Result<()> {
    ensure_positive_scale(cfg)?;
    ensure_non_negative_metrics(cfg)?;
    ensure_palette(cfg)?;
    Ok(())
}

fn ensure_positive_scale(cfg: &LayoutConfig) -> Result<()> {
    if cfg.day_width < 1 {
        return Err(anyhow!("day_width must be >= 1 (got {})", cfg.day_width));
    }
    if cfg.task_row_height < 1 {
        return Err(anyhow!(
            "task_row_height must be >= 1 (got {})",
            cfg.task_row_height
        ));
    }
    if cfg.tick_interval_days < 1 {
        return Err(anyhow!(
            "tick_interval_days must be >= 1 (got {})",
            cfg.tick_interval_days
        ));
    }
    Ok(())
}

fn ensure_non_negative_metrics(cfg: &LayoutConfig) -> Result<()> {
    if cfg.left_margin < 0 {
        return Err(anyhow!("left_margin must not be negative (got {})", cfg.left_margin));
    }
    if cfg.row_gap < 0 {
        return Err(anyhow!("row_gap must not be negative (got {})", cfg.row_gap));
    }
    if cfg.section_column_width < 0 {
        return Err(anyhow!(
            "section_column_width must not be negative (got {})",
            cfg.section_column_width
        ));
    }
    if cfg.min_label_gap_pixels < 0 {
        return Err(anyhow!(
            "min_label_gap_pixels must not be negative (got {})",
            cfg.min_label_gap_pixels
        ));
    }
    Ok(())
}

fn ensure_palette(cfg: &LayoutConfig) -> Result<()> {
    if cfg.section_background_palette.is_empty() {
        return Err(anyhow!(
            "section_background_palette must contain at least one color"
        ));
    }
    Ok(())
}
