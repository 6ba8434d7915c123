//! Output contracts from the motion engine.
//!
//! Outputs carry what the host must apply after an engine call: the slider
//! transform from the last render, wrap-shift instructions for cells whose
//! shift changed, and the notifications raised along the way. Adapters apply
//! them synchronously and in order.

use serde::{Deserialize, Serialize};

use crate::ids::CellId;
use crate::position::SliderTransform;

/// Relocate `cell` by `shift` whole track lengths (0 cancels a prior shift).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellShift {
    pub cell: CellId,
    pub shift: i32,
}

/// Notifications for the host's event sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum MotionEvent {
    /// Emitted on every render while at least one slide exists.
    /// `position` is the track offset measured from the first slide.
    Scroll { progress: f64, position: f64 },
    /// Emitted once per transition from animating to at rest.
    Settle,
}

/// Outputs returned by engine entry points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    /// Transform from the most recent render during the call, if any.
    #[serde(default)]
    pub transform: Option<SliderTransform>,
    #[serde(default)]
    pub shifts: Vec<CellShift>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.transform = None;
        self.shifts.clear();
        self.events.clear();
    }

    #[inline]
    pub fn set_transform(&mut self, transform: SliderTransform) {
        self.transform = Some(transform);
    }

    #[inline]
    pub fn push_shift(&mut self, shift: CellShift) {
        self.shifts.push(shift);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_none() && self.shifts.is_empty() && self.events.is_empty()
    }

    /// True when a settle notification was raised during the call.
    pub fn settled(&self) -> bool {
        self.events.iter().any(|e| matches!(e, MotionEvent::Settle))
    }
}
