//! Metrics for host-owned cells.
//!
//! The host keeps the real cell objects (DOM nodes, widgets). The engine only
//! mirrors each cell's extent along the active axis and the wrap shift it last
//! instructed, so it can decide which cells to relocate and report changes.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::ids::CellId;

/// One cell as seen by the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Outer size along the active axis.
    pub extent: f64,
    /// Current wrap shift in whole track lengths: -1, 0 or 1.
    #[serde(default)]
    pub shift: i32,
}

impl Cell {
    pub fn new(extent: f64) -> Self {
        Self { extent, shift: 0 }
    }
}

/// Ordered cells plus the two boundary subsets used for wrap-around.
///
/// `before_shift_cells` are the cells at the end of the track that may be
/// moved in front of the first cell, ordered from the track end inward.
/// `after_shift_cells` are the cells at the start that may be moved past the
/// last cell, ordered from the track start inward.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellTrack {
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub before_shift_cells: Vec<CellId>,
    #[serde(default)]
    pub after_shift_cells: Vec<CellId>,
}

impl CellTrack {
    /// Track of cells with the given extents and no boundary subsets.
    pub fn from_extents(extents: impl IntoIterator<Item = f64>) -> Self {
        Self {
            cells: extents.into_iter().map(Cell::new).collect(),
            ..Self::default()
        }
    }

    /// Builder: set both boundary subsets.
    #[must_use]
    pub fn with_shift_cells(mut self, before: Vec<CellId>, after: Vec<CellId>) -> Self {
        self.before_shift_cells = before;
        self.after_shift_cells = after;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Ids of every cell in track order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cells.len()).map_while(|i| CellId::try_from(i).ok())
    }

    /// Record a shift for `id`. Returns true when the stored shift changed.
    pub(crate) fn set_shift(&mut self, id: CellId, shift: i32) -> bool {
        match self.cells.get_mut(id.index()) {
            Some(cell) if cell.shift != shift => {
                cell.shift = shift;
                true
            }
            _ => false,
        }
    }

    /// Keep the shifts recorded in `previous` for cells that still exist, so
    /// a re-measured track still resets cells the host has relocated.
    pub(crate) fn inherit_shifts(&mut self, previous: &CellTrack) {
        for (cell, old) in self.cells.iter_mut().zip(&previous.cells) {
            cell.shift = old.shift;
        }
    }

    /// Ensure every subset entry names an existing cell.
    pub fn validate(&self) -> Result<(), MotionError> {
        let len = self.cells.len();
        self.before_shift_cells
            .iter()
            .chain(self.after_shift_cells.iter())
            .find(|id| id.index() >= len)
            .map_or(Ok(()), |id| Err(MotionError::CellOutOfRange { cell: id.0, len }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_shift_reports_changes_only() {
        let mut track = CellTrack::from_extents([100.0, 100.0]);
        assert!(track.set_shift(CellId(1), -1));
        assert!(!track.set_shift(CellId(1), -1));
        assert!(track.set_shift(CellId(1), 0));
        // unknown cells are ignored
        assert!(!track.set_shift(CellId(9), 1));
    }

    #[test]
    fn inherit_shifts_keeps_surviving_cells() {
        let mut old = CellTrack::from_extents([100.0, 100.0, 100.0]);
        old.set_shift(CellId(0), 1);
        old.set_shift(CellId(2), -1);

        let mut track = CellTrack::from_extents([120.0, 120.0]);
        track.inherit_shifts(&old);
        assert_eq!(track.cells[0].shift, 1);
        assert_eq!(track.cells[1].shift, 0);
        assert_eq!(track.cells[0].extent, 120.0);
    }

    #[test]
    fn validate_flags_dangling_subset_ids() {
        let track = CellTrack::from_extents([100.0, 100.0])
            .with_shift_cells(vec![CellId(1)], vec![CellId(2)]);
        assert_eq!(
            track.validate(),
            Err(MotionError::CellOutOfRange { cell: 2, len: 2 })
        );
    }
}
