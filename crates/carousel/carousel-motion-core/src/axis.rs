//! Active axis abstraction.
//!
//! Horizontal and vertical carousels share every formula; only the
//! transform function names and the slot the offset lands in differ.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Hardware-accelerated form used while animating, e.g. `translate3d(12px,0,0)`.
    pub fn translate3d(self, value: &str) -> String {
        match self {
            Axis::Horizontal => format!("translate3d({value},0,0)"),
            Axis::Vertical => format!("translate3d(0,{value},0)"),
        }
    }

    /// Single-axis form used once settled, e.g. `translateX(12px)`.
    pub fn translate(self, value: &str) -> String {
        match self {
            Axis::Horizontal => format!("translateX({value})"),
            Axis::Vertical => format!("translateY({value})"),
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}
