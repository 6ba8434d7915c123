//! Track geometry and whole-layout bundles handed in by the layout collaborator.

use serde::{Deserialize, Serialize};

use crate::cells::CellTrack;
use crate::error::MotionError;

/// Measurements along the active axis, recomputed by the host on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackGeometry {
    /// Total wrap length of the track.
    pub slideable_extent: f64,
    /// Fixed offset added before rendering (cell alignment within the viewport).
    pub cursor_offset: f64,
    /// Inner size of the viewport. Must be non-zero in percent mode.
    pub viewport_extent: f64,
    /// Total extent covered by slides, the denominator of scroll progress.
    pub slides_extent: f64,
}

/// A group of cells the carousel can select and settle on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Track offset the carousel rests at when this slide is selected (positive).
    pub target: f64,
}

/// Everything the layout collaborator measures, installable in one call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselLayout {
    #[serde(default)]
    pub geometry: TrackGeometry,
    #[serde(default, flatten)]
    pub track: CellTrack,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub selected_index: usize,
}

impl CarouselLayout {
    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        let layout: Self = serde_json::from_str(json).map_err(|e| MotionError::LayoutParse {
            reason: e.to_string(),
        })?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        self.track.validate()?;
        if !self.slides.is_empty() && self.selected_index >= self.slides.len() {
            return Err(MotionError::SlideOutOfRange {
                index: self.selected_index,
                len: self.slides.len(),
            });
        }
        Ok(())
    }
}
