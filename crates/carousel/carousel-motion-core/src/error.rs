//! Error types for host-facing carousel operations.
//!
//! Per-frame physics never fails; these cover configuration and layout
//! handed in by the host.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// A friction coefficient outside the open interval (0, 1).
    #[error("{name} must be within (0, 1), got {value}")]
    InvalidFriction { name: String, value: f64 },

    /// Attraction must be a finite, non-negative coefficient.
    #[error("selected_attraction must be finite and non-negative, got {value}")]
    InvalidAttraction { value: f64 },

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },

    /// Layout JSON could not be parsed.
    #[error("layout parse error: {reason}")]
    LayoutParse { reason: String },

    /// A shift subset references a cell that does not exist.
    #[error("layout references cell {cell} but only {len} cells exist")]
    CellOutOfRange { cell: u32, len: usize },

    /// Slide selection past the end of the slide list.
    #[error("slide {index} is out of range ({len} slides)")]
    SlideOutOfRange { index: usize, len: usize },
}

impl MotionError {
    pub fn friction(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidFriction {
            name: name.into(),
            value,
        }
    }
}
