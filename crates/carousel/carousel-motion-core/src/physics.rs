//! Force model and integrator.
//!
//! Explicit Euler with geometric velocity decay:
//!
//! ```text
//! velocity += Σ forces
//! position += velocity
//! velocity *= friction_factor        // friction_factor = 1 - friction
//! ```
//!
//! Stable for the small per-tick forces a carousel produces; not
//! unconditionally stable for arbitrary force magnitudes.

use serde::{Deserialize, Serialize};

/// Mutable motion state, owned by the engine and touched once per tick.
///
/// Pointer and free-scroll flags are written by external input handling and
/// only read during a tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Offset along the active axis. Negative values scroll the track forward.
    pub position: f64,
    /// Signed change of position per tick.
    pub velocity: f64,
    pub is_animating: bool,
    pub is_pointer_down: bool,
    pub is_free_scrolling: bool,
    /// Stable frames observed since the animation started.
    pub resting_frames: u32,
    /// Position the drag force tracks while the pointer is down.
    pub drag_target: f64,
}

impl MotionState {
    #[inline]
    pub fn apply_force(&mut self, force: f64) {
        self.velocity += force;
    }

    /// Critically damped drag tracking: with no friction the next step lands
    /// exactly on `drag_target`.
    pub fn apply_drag_force(&mut self) {
        if !self.is_pointer_down {
            return;
        }
        let drag_velocity = self.drag_target - self.position;
        let drag_force = drag_velocity - self.velocity;
        self.apply_force(drag_force);
    }

    /// Spring pull toward `-selected_target`.
    ///
    /// Skipped while dragging, free scrolling, or when the carousel is empty.
    pub fn apply_selected_attraction(&mut self, selected_target: f64, attraction: f64, has_cells: bool) {
        if self.is_pointer_down || self.is_free_scrolling || !has_cells {
            return;
        }
        let distance = -selected_target - self.position;
        self.apply_force(distance * attraction);
    }

    pub fn integrate(&mut self, friction_factor: f64) {
        self.position += self.velocity;
        self.velocity *= friction_factor;
    }

    /// Where free motion would come to rest: the position plus the sum of the
    /// geometric velocity series, `velocity / (1 - friction_factor)`.
    #[inline]
    pub fn resting_position(&self, friction_factor: f64) -> f64 {
        self.position + self.velocity / (1.0 - friction_factor)
    }
}
