//! Engine: motion state ownership, the tick loop, and the host-facing API.
//!
//! Per tick:
//! drag force → selected attraction → integrate → position slider (+ wrap
//! shift) → settle check → request the next frame only if still animating.
//!
//! Methods that render or tick clear the previous [`Outputs`] and return the
//! new ones; adapters apply them before the next call.

use log::{debug, trace};

use crate::cells::CellTrack;
use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::ids::CellId;
use crate::layout::{CarouselLayout, Slide, TrackGeometry};
use crate::outputs::{MotionEvent, Outputs};
use crate::physics::MotionState;
use crate::position::{normalize_wrapped, PositionValue, SliderTransform};
use crate::scheduler::FrameScheduler;
use crate::{settle, wrap};

/// One carousel's motion engine.
#[derive(Debug)]
pub struct MotionEngine {
    cfg: MotionConfig,
    state: MotionState,
    geometry: TrackGeometry,
    track: CellTrack,
    slides: Vec<Slide>,
    selected_index: usize,

    // Per-call outputs
    outputs: Outputs,
}

impl MotionEngine {
    /// Create an idle engine at position 0 with no cells.
    ///
    /// The config is taken as-is; see [`MotionConfig::validate`].
    pub fn new(cfg: MotionConfig) -> Self {
        Self {
            cfg,
            state: MotionState::default(),
            geometry: TrackGeometry::default(),
            track: CellTrack::default(),
            slides: Vec::new(),
            selected_index: 0,
            outputs: Outputs::default(),
        }
    }

    // ----- configuration & layout -----

    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    pub fn set_config(&mut self, cfg: MotionConfig) {
        self.cfg = cfg;
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
    }

    pub fn cells(&self) -> &CellTrack {
        &self.track
    }

    /// Replace the cell metrics. Wrap shifts already sent for cells that
    /// still exist are remembered, so the next render moves them back when
    /// their gap has closed.
    pub fn set_cells(&mut self, mut track: CellTrack) -> Result<(), MotionError> {
        track.validate()?;
        track.inherit_shifts(&self.track);
        self.track = track;
        Ok(())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Replace the slide list, keeping the selection in range.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.selected_index = self.selected_index.min(slides.len().saturating_sub(1));
        self.slides = slides;
    }

    /// Install geometry, cells, slides and selection at once.
    pub fn set_layout(&mut self, layout: CarouselLayout) -> Result<(), MotionError> {
        layout.validate()?;
        let mut track = layout.track;
        track.inherit_shifts(&self.track);
        self.geometry = layout.geometry;
        self.track = track;
        self.slides = layout.slides;
        self.selected_index = layout.selected_index;
        Ok(())
    }

    /// Select the slide the attraction force pulls toward.
    pub fn select(&mut self, index: usize) -> Result<(), MotionError> {
        if index >= self.slides.len() {
            return Err(MotionError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.selected_index = index;
        Ok(())
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Target of the selected slide, if any slide exists.
    pub fn selected_target(&self) -> Option<f64> {
        self.slides.get(self.selected_index).map(|s| s.target)
    }

    // ----- host input -----

    pub fn set_pointer_down(&mut self, down: bool) {
        self.state.is_pointer_down = down;
    }

    pub fn set_drag_target(&mut self, target: f64) {
        self.state.drag_target = target;
    }

    pub fn set_free_scrolling(&mut self, free: bool) {
        self.state.is_free_scrolling = free;
    }

    /// Move without integrating (e.g. restoring a saved scroll offset).
    pub fn set_position(&mut self, position: f64) {
        self.state.position = position;
    }

    // ----- state accessors -----

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Owned copy of the motion state, for serialization to hosts.
    pub fn snapshot(&self) -> MotionState {
        self.state.clone()
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.state.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    #[inline]
    pub fn resting_frames(&self) -> u32 {
        self.state.resting_frames
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Move the outputs of the last call out of the engine.
    pub fn take_outputs(&mut self) -> Outputs {
        std::mem::take(&mut self.outputs)
    }

    // ----- frame loop -----

    /// Start the frame loop. Idempotent: while already animating this is a
    /// no-op and the resting counter keeps its value.
    ///
    /// Otherwise the first tick runs synchronously before returning.
    pub fn start_animation(&mut self, scheduler: &mut dyn FrameScheduler) -> &Outputs {
        self.outputs.clear();
        if self.state.is_animating {
            return &self.outputs;
        }
        debug!("carousel animation started at {}", self.state.position);
        self.state.is_animating = true;
        self.state.resting_frames = 0;
        self.animate(scheduler);
        &self.outputs
    }

    /// Host callback for a frame requested through `scheduler`.
    /// A frame delivered while idle is ignored.
    pub fn on_frame(&mut self, scheduler: &mut dyn FrameScheduler) -> &Outputs {
        self.outputs.clear();
        if self.state.is_animating {
            self.animate(scheduler);
        } else {
            trace!("frame delivered while idle; ignored");
        }
        &self.outputs
    }

    fn animate(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.apply_drag_force();
        self.apply_selected_attraction();

        let previous = self.state.position;
        self.integrate_physics();
        self.render();
        self.settle(previous);
        trace!(
            "tick position={} velocity={} resting={}",
            self.state.position,
            self.state.velocity,
            self.state.resting_frames
        );

        if self.state.is_animating {
            scheduler.request_frame();
        }
    }

    // ----- force model & integrator -----

    pub fn apply_force(&mut self, force: f64) {
        self.state.apply_force(force);
    }

    pub fn apply_drag_force(&mut self) {
        self.state.apply_drag_force();
    }

    pub fn apply_selected_attraction(&mut self) {
        let has_cells = !self.track.is_empty();
        if let Some(target) = self.selected_target() {
            self.state
                .apply_selected_attraction(target, self.cfg.selected_attraction, has_cells);
        }
    }

    pub fn integrate_physics(&mut self) {
        let factor = self.friction_factor();
        self.state.integrate(factor);
    }

    /// `1 - friction`, using the free-scroll friction while free scrolling.
    pub fn friction_factor(&self) -> f64 {
        self.cfg.friction_factor(self.state.is_free_scrolling)
    }

    /// Where the carousel would stop if no further force were applied.
    pub fn get_resting_position(&self) -> f64 {
        self.state.resting_position(self.friction_factor())
    }

    // ----- positioner -----

    /// Render the current position. Returns the outputs of this render only.
    pub fn position_slider(&mut self) -> &Outputs {
        self.outputs.clear();
        self.render();
        &self.outputs
    }

    /// Jump straight to the selected slide without integrating.
    /// No-op when there are no cells.
    pub fn position_slider_at_selected(&mut self) -> &Outputs {
        self.outputs.clear();
        if self.track.is_empty() {
            return &self.outputs;
        }
        if let Some(target) = self.selected_target() {
            self.state.position = -target;
            self.render();
        }
        &self.outputs
    }

    pub fn get_position_value(&self, value: f64) -> PositionValue {
        PositionValue::from_offset(value, self.geometry.viewport_extent, self.cfg.percent_position)
    }

    fn render(&mut self) {
        let mut offset = self.state.position;
        if self.cfg.wrap_around && self.track.len() > 1 {
            offset = normalize_wrapped(offset, self.geometry.slideable_extent);
            self.shift_wrap_cells(offset);
        }

        offset += self.geometry.cursor_offset;
        if self.cfg.right_to_left {
            offset = -offset;
        }

        let transform = SliderTransform {
            axis: self.cfg.axis,
            value: self.get_position_value(offset),
            accelerated: self.state.is_animating,
        };
        self.outputs.set_transform(transform);

        if let Some(first) = self.slides.first() {
            let position = -self.state.position - first.target;
            let progress = position / self.geometry.slides_extent;
            self.outputs
                .push_event(MotionEvent::Scroll { progress, position });
        }
    }

    // ----- wrap shifter -----

    fn shift_wrap_cells(&mut self, normalized: f64) {
        wrap::shift_wrap_cells(&mut self.track, &self.geometry, normalized, &mut self.outputs);
    }

    /// Reset the wrap shift of the given cells, e.g. after wrap-around is
    /// turned off or the cell set changes.
    pub fn unshift_cells(&mut self, cells: &[CellId]) -> &Outputs {
        self.outputs.clear();
        wrap::unshift_cells(&mut self.track, cells, &mut self.outputs);
        &self.outputs
    }

    /// Reset both boundary subsets.
    pub fn unshift_boundary_cells(&mut self) -> &Outputs {
        let cells: Vec<CellId> = self
            .track
            .before_shift_cells
            .iter()
            .chain(self.track.after_shift_cells.iter())
            .copied()
            .collect();
        self.unshift_cells(&cells)
    }

    // ----- settle detector -----

    fn settle(&mut self, previous: f64) {
        if !settle::observe_frame(&mut self.state, previous) {
            return;
        }
        self.state.is_animating = false;
        self.state.is_free_scrolling = false;
        // static transform once at rest
        self.render();
        self.outputs.push_event(MotionEvent::Settle);
        debug!("carousel settled at {}", self.state.position);
    }
}
