//! Composition Pipeline - Single Entry Point
//!
//! Orders the badges, computes the honeycomb layout, then loads, resizes
//! and composites every badge image into one transparent PNG. Any stage
//! failure aborts the whole run; there is no partial output.

use std::path::{Path, PathBuf};
use std::thread;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{GridConfig, GridLayout, LayoutError};
use crate::ordering::ordered_badge_names;
use crate::records::Certification;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("No eligible badges found in {}", .0.display())]
    NoEligibleBadges(PathBuf),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to load badge {0}: {1}")]
    BadgeLoad(String, #[source] image::ImageError),

    #[error("Badge resize worker panicked for {0}")]
    WorkerPanic(String),

    #[error("Failed to write {}: {}", .0.display(), .1)]
    Encode(PathBuf, #[source] image::ImageError),
}

/// Run report, printed by the CLI after a successful generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub badges: usize,
    pub rows: usize,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

/// The composition pipeline - single entry point for grid generation.
pub struct GridPipeline {
    config: GridConfig,
    badges_dir: PathBuf,
    output: PathBuf,
}

impl GridPipeline {
    pub fn new(config: GridConfig, badges_dir: PathBuf, output: PathBuf) -> Self {
        Self {
            config,
            badges_dir,
            output,
        }
    }

    /// Generate the badge grid image from the given records.
    ///
    /// Fatal when nothing is eligible: an empty grid is a data problem the
    /// caller has to fix, not something to paper over with a blank canvas.
    pub fn generate(&self, certs: &[Certification]) -> Result<GridSummary, GridError> {
        let ordered = ordered_badge_names(certs);
        if ordered.is_empty() {
            return Err(GridError::NoEligibleBadges(self.badges_dir.clone()));
        }
        info!("Found {} badges: {:?}", ordered.len(), ordered);

        let layout = GridLayout::compute(ordered.len(), &self.config)?;
        info!(
            "Creating {}x{} canvas with {} rows",
            layout.width,
            layout.height,
            layout.rows.len()
        );

        let tiles = self.load_and_resize_all(&ordered)?;

        let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, Rgba([0, 0, 0, 0]));
        for (tile, placement) in tiles.iter().zip(&layout.placements) {
            imageops::overlay(&mut canvas, tile, i64::from(placement.x), i64::from(placement.y));
        }

        canvas
            .save(&self.output)
            .map_err(|e| GridError::Encode(self.output.clone(), e))?;

        Ok(GridSummary {
            badges: ordered.len(),
            rows: layout.rows.len(),
            width: layout.width,
            height: layout.height,
            output: self.output.clone(),
        })
    }

    /// Load and resize every badge, one worker thread per badge.
    ///
    /// Handles are joined in spawn order, so tiles come back indexed by
    /// badge position rather than completion order and the badge-to-placement
    /// mapping holds. The first failure aborts the run.
    fn load_and_resize_all(&self, names: &[String]) -> Result<Vec<RgbaImage>, GridError> {
        let size = self.config.badge_size;
        let handles: Vec<_> = names
            .iter()
            .map(|name| {
                let path = self.badges_dir.join(name);
                let name = name.clone();
                thread::spawn(move || load_and_resize(&path, &name, size))
            })
            .collect();

        let mut tiles = Vec::with_capacity(handles.len());
        for (handle, name) in handles.into_iter().zip(names) {
            let tile = handle
                .join()
                .map_err(|_| GridError::WorkerPanic(name.clone()))??;
            tiles.push(tile);
        }
        Ok(tiles)
    }
}

/// Resize a badge onto a transparent square tile, aspect preserved
/// (letterboxed, never cropped).
fn load_and_resize(path: &Path, name: &str, size: u32) -> Result<RgbaImage, GridError> {
    let img = image::open(path).map_err(|e| GridError::BadgeLoad(name.to_string(), e))?;
    let scaled = img.resize(size, size, FilterType::Lanczos3).into_rgba8();

    let mut tile = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let dx = i64::from((size - scaled.width()) / 2);
    let dy = i64::from((size - scaled.height()) / 2);
    imageops::overlay(&mut tile, &scaled, dx, dy);
    Ok(tile)
}
