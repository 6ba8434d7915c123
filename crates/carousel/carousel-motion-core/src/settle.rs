//! Settle detection.
//!
//! A frame counts as resting when the pointer is up and the position did not
//! move at two-decimal precision. More than [`RESTING_FRAME_LIMIT`] resting
//! frames end the animation. The counter is never reset here, only when an
//! animation starts.

use crate::physics::MotionState;
use crate::position::round_half_up;

/// Resting frames tolerated before the animation stops (stops on the 3rd).
pub const RESTING_FRAME_LIMIT: u32 = 2;

/// Positions equal at two-decimal precision.
#[inline]
pub fn is_stable(position: f64, previous: f64) -> bool {
    round_half_up(position * 100.0) == round_half_up(previous * 100.0)
}

/// Count this frame and report whether motion has settled.
pub fn observe_frame(state: &mut MotionState, previous: f64) -> bool {
    if !state.is_pointer_down && is_stable(state.position, previous) {
        state.resting_frames += 1;
    }
    state.resting_frames > RESTING_FRAME_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_below_precision_is_stable() {
        assert!(is_stable(10.001, 10.004));
        assert!(!is_stable(10.0, 10.01));
    }

    #[test]
    fn pointer_down_never_counts() {
        let mut s = MotionState {
            is_pointer_down: true,
            ..MotionState::default()
        };
        for _ in 0..5 {
            assert!(!observe_frame(&mut s, 0.0));
        }
        assert_eq!(s.resting_frames, 0);
    }

    #[test]
    fn movement_does_not_reset_counter() {
        let mut s = MotionState::default();
        assert!(!observe_frame(&mut s, 0.0));
        assert!(!observe_frame(&mut s, 0.0));
        s.position = 5.0;
        assert!(!observe_frame(&mut s, 0.0));
        assert_eq!(s.resting_frames, 2);
        assert!(observe_frame(&mut s, 5.0));
    }
}
