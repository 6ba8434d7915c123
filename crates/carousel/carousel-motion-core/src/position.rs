//! Positioner math: wrap normalization, render units and transforms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Round half toward positive infinity, the way browsers round
/// (`-2.5` becomes `-2`, not `-3` as with [`f64::round`]).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // + 0.0 folds -0.0 into 0.0 so it never renders as "-0px"
    rounded + 0.0
}

/// Euclidean modulo: result carries the sign of `div`.
#[inline]
pub fn modulo(value: f64, div: f64) -> f64 {
    ((value % div) + div) % div
}

/// Fold a track position into `[-slideable_extent, 0)`.
#[inline]
pub fn normalize_wrapped(position: f64, slideable_extent: f64) -> f64 {
    modulo(position, slideable_extent) - slideable_extent
}

/// A rendered offset with its unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum PositionValue {
    /// Percent of the viewport, already rounded to two decimals.
    Percent(f64),
    /// Whole pixels.
    Px(f64),
}

impl PositionValue {
    /// Convert a raw offset into a renderable value.
    ///
    /// Percent mode divides by `viewport_extent`; callers guarantee it is
    /// non-zero.
    pub fn from_offset(value: f64, viewport_extent: f64, percent: bool) -> Self {
        if percent {
            PositionValue::Percent(round_half_up(value / viewport_extent * 10000.0) / 100.0)
        } else {
            PositionValue::Px(round_half_up(value))
        }
    }

    #[inline]
    pub fn amount(self) -> f64 {
        match self {
            PositionValue::Percent(v) | PositionValue::Px(v) => v,
        }
    }
}

impl fmt::Display for PositionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PositionValue::Percent(v) => write!(f, "{v:.2}%"),
            PositionValue::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Translation to write onto the slider element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderTransform {
    pub axis: Axis,
    pub value: PositionValue,
    /// `translate3d` while animating, single-axis translate once settled.
    pub accelerated: bool,
}

impl SliderTransform {
    /// CSS `transform` property value.
    pub fn css(&self) -> String {
        let value = self.value.to_string();
        if self.accelerated {
            self.axis.translate3d(&value)
        } else {
            self.axis.translate(&value)
        }
    }
}

impl fmt::Display for SliderTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
