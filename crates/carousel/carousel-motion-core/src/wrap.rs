//! Wrap shifter: relocates boundary cells so a looping track never shows a gap.
//!
//! After the position is folded into `[-slideable_extent, 0)`, the viewport may
//! show empty space before the first cell or after the last one. Cells from the
//! opposite end are shifted by one track length to fill it, and shifted back
//! once the gap closes.

use crate::cells::CellTrack;
use crate::ids::CellId;
use crate::layout::TrackGeometry;
use crate::outputs::{CellShift, Outputs};

/// Shift boundary cells for a normalized position.
pub fn shift_wrap_cells(
    track: &mut CellTrack,
    geometry: &TrackGeometry,
    normalized: f64,
    out: &mut Outputs,
) {
    let before_gap = geometry.cursor_offset + normalized;
    let before = std::mem::take(&mut track.before_shift_cells);
    shift_cells(track, &before, before_gap, -1, out);
    track.before_shift_cells = before;

    let after_gap =
        geometry.viewport_extent - (normalized + geometry.slideable_extent + geometry.cursor_offset);
    let after = std::mem::take(&mut track.after_shift_cells);
    shift_cells(track, &after, after_gap, 1, out);
    track.after_shift_cells = after;
}

/// Walk `cells` in order, shifting each while `gap` is still open and
/// consuming the gap by each cell's extent. Only changed shifts are reported.
fn shift_cells(track: &mut CellTrack, cells: &[CellId], mut gap: f64, shift: i32, out: &mut Outputs) {
    for &id in cells {
        let cell_shift = if gap > 0.0 { shift } else { 0 };
        if track.set_shift(id, cell_shift) {
            out.push_shift(CellShift {
                cell: id,
                shift: cell_shift,
            });
        }
        if let Some(cell) = track.get(id) {
            gap -= cell.extent;
        }
    }
}

/// Reset the given cells to their natural place. Every cell is reported, even
/// if the engine believed it was unshifted, so stale host state is cleared.
pub fn unshift_cells(track: &mut CellTrack, cells: &[CellId], out: &mut Outputs) {
    for &id in cells {
        track.set_shift(id, 0);
        out.push_shift(CellShift { cell: id, shift: 0 });
    }
}
