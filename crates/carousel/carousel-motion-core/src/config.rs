//! Motion configuration.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::MotionError;

/// Tuning knobs and rendering flags for a carousel.
///
/// Every field has a default so hosts may pass partial JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of velocity lost per tick during normal motion.
    pub friction: f64,
    /// Fraction of velocity lost per tick while free scrolling. Usually lower
    /// than `friction` so flicks coast further.
    pub free_scroll_friction: f64,
    /// Spring coefficient pulling toward the selected slide.
    pub selected_attraction: f64,
    /// Loop the track by wrap-shifting boundary cells.
    pub wrap_around: bool,
    /// Render positions as a percentage of the viewport instead of pixels.
    pub percent_position: bool,
    /// Invert rendered offsets for right-to-left layouts.
    pub right_to_left: bool,
    /// Axis cells are laid out along.
    pub axis: Axis,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            friction: 0.28,
            free_scroll_friction: 0.075,
            selected_attraction: 0.025,
            wrap_around: false,
            percent_position: true,
            right_to_left: false,
            axis: Axis::Horizontal,
        }
    }
}

impl MotionConfig {
    /// Parse a (possibly partial) JSON object. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, MotionError> {
        serde_json::from_str(json).map_err(|e| MotionError::ConfigParse {
            reason: e.to_string(),
        })
    }

    /// Check the coefficients the integrator relies on.
    ///
    /// The engine does not call this itself: a friction of exactly 0 makes
    /// [`MotionEngine::get_resting_position`](crate::MotionEngine::get_resting_position)
    /// divide by zero, so adapters should validate before constructing.
    pub fn validate(&self) -> Result<(), MotionError> {
        check_friction("friction", self.friction)?;
        check_friction("free_scroll_friction", self.free_scroll_friction)?;
        if !self.selected_attraction.is_finite() || self.selected_attraction < 0.0 {
            return Err(MotionError::InvalidAttraction {
                value: self.selected_attraction,
            });
        }
        Ok(())
    }

    /// Friction factor applied to velocity after each integration step.
    #[inline]
    pub fn friction_factor(&self, free_scrolling: bool) -> f64 {
        let friction = if free_scrolling {
            self.free_scroll_friction
        } else {
            self.friction
        };
        1.0 - friction
    }
}

fn check_friction(name: &str, value: f64) -> Result<(), MotionError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(MotionError::friction(name, value))
    }
}
