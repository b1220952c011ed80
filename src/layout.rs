//! Hex Grid Layout Engine
//!
//! Partitions a badge count into honeycomb rows (odd rows hold one fewer
//! badge and shift right by half a cell) and assigns pixel placements.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Cannot lay out an empty badge set")]
    EmptyGrid,

    #[error("Grid requires at least 2 columns, got {0}")]
    TooFewColumns(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Square side length of each placed badge, in pixels.
    pub badge_size: u32,
    /// Pixel spacing between adjacent badges.
    pub gap: u32,
    /// Badges per full (even-indexed) row.
    pub columns: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            badge_size: 150,
            gap: 20,
            columns: 5,
        }
    }
}

/// Top-left pixel coordinate of one badge on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Badge count per row, top to bottom. Sizes always sum to the input count.
    pub rows: Vec<usize>,
    /// Canvas width: sized for a full row regardless of actual row fill.
    pub width: u32,
    /// Canvas height: grows with the number of rows only.
    pub height: u32,
    /// One placement per badge, in flattened badge order.
    pub placements: Vec<Placement>,
}

impl GridLayout {
    pub fn compute(count: usize, config: &GridConfig) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        // An offset row with zero capacity would never drain the remainder.
        if config.columns < 2 {
            return Err(LayoutError::TooFewColumns(config.columns));
        }

        let columns = config.columns as usize;
        let mut rows = Vec::new();
        let mut remaining = count;
        while remaining > 0 {
            let capacity = if rows.len() % 2 == 1 {
                columns - 1
            } else {
                columns
            };
            let taken = remaining.min(capacity);
            rows.push(taken);
            remaining -= taken;
        }

        let width = config.columns * config.badge_size + (config.columns - 1) * config.gap;
        let row_count = rows.len() as u32;
        let height = row_count * config.badge_size + (row_count - 1) * config.gap;

        let unit = f64::from(config.badge_size + config.gap);
        let hex_offset = unit / 2.0;

        let mut placements = Vec::with_capacity(count);
        for (r, &in_row) in rows.iter().enumerate() {
            let is_offset_row = r % 2 == 1;
            let row_offset = if is_offset_row { hex_offset } else { 0.0 };
            // A short trailing offset row is centered rather than left-anchored.
            let center_offset = if is_offset_row && in_row < columns - 1 {
                (columns - 1 - in_row) as f64 * unit / 2.0
            } else {
                0.0
            };

            for c in 0..in_row {
                let x = (row_offset + center_offset + c as f64 * unit).round() as u32;
                let y = (r as f64 * unit).round() as u32;
                placements.push(Placement { x, y });
            }
        }

        Ok(Self {
            rows,
            width,
            height,
            placements,
        })
    }
}
