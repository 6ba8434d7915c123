//! Frame scheduling port.
//!
//! The engine never owns a clock. Each tick that ends with the carousel still
//! animating asks the injected [`FrameScheduler`] for exactly one more frame,
//! and the host calls [`MotionEngine::on_frame`](crate::MotionEngine::on_frame)
//! when it fires. Stopping is simply not asking again.

/// Capability to request one callback on the next display frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Manually stepped frame source for tests and headless hosts.
///
/// ```
/// use carousel_motion_core::{ManualFrames, MotionConfig, MotionEngine};
///
/// let mut engine = MotionEngine::new(MotionConfig::default());
/// let mut frames = ManualFrames::default();
/// engine.start_animation(&mut frames);
/// while frames.take_pending() {
///     engine.on_frame(&mut frames);
/// }
/// assert!(!engine.is_animating());
/// ```
#[derive(Debug, Default)]
pub struct ManualFrames {
    pending: usize,
    requested: usize,
}

impl ManualFrames {
    /// Consume one pending request. Returns false when none is outstanding.
    pub fn take_pending(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    /// Outstanding requests not yet fired.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Requests received over the scheduler's lifetime.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.requested += 1;
    }
}

/// Nominal frame interval used when no display refresh signal exists.
pub const FALLBACK_FRAME_MS: f64 = 16.0;

/// Timer pacing for hosts without a refresh-rate callback.
///
/// Each delay is chosen so consecutive callbacks land about
/// [`FALLBACK_FRAME_MS`] apart regardless of how long the tick took.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackPacer {
    last_time: f64,
}

impl FallbackPacer {
    /// Delay in milliseconds before the next callback, given the current time
    /// in milliseconds.
    pub fn next_delay(&mut self, now_ms: f64) -> f64 {
        let delay = (FALLBACK_FRAME_MS - (now_ms - self.last_time)).max(0.0);
        self.last_time = now_ms + delay;
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_keeps_sixteen_ms_cadence() {
        let mut pacer = FallbackPacer::default();
        // first call long after the epoch fires immediately
        assert_eq!(pacer.next_delay(1000.0), 0.0);
        // 4ms later: wait out the rest of the frame
        assert_eq!(pacer.next_delay(1004.0), 12.0);
        // slow tick past the slot: no delay
        assert_eq!(pacer.next_delay(1040.0), 0.0);
    }

    #[test]
    fn manual_frames_counts_requests() {
        let mut frames = ManualFrames::default();
        frames.request_frame();
        frames.request_frame();
        assert_eq!(frames.pending(), 2);
        assert!(frames.take_pending());
        assert!(frames.take_pending());
        assert!(!frames.take_pending());
        assert_eq!(frames.requested(), 2);
    }
}
