//! Carousel Motion Core (host-agnostic)
//!
//! One-dimensional physics for a scrolling cell carousel. Drag input and a
//! spring-like pull toward the selected slide are integrated into a single
//! scalar position once per display frame; the position is mapped into a
//! translate transform, boundary cells are wrap-shifted for looping tracks,
//! and the loop stops itself once motion settles.
//!
//! The crate never touches a platform API. Frames are requested through the
//! [`FrameScheduler`] port and every render is reported through [`Outputs`],
//! which adapters (web/wasm, native toolkits) apply to the host.

pub mod axis;
pub mod cells;
pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod layout;
pub mod outputs;
pub mod physics;
pub mod position;
pub mod scheduler;
pub mod settle;
pub mod wrap;

// Re-exports for consumers (adapters)
pub use axis::Axis;
pub use cells::{Cell, CellTrack};
pub use config::MotionConfig;
pub use engine::MotionEngine;
pub use error::MotionError;
pub use ids::CellId;
pub use layout::{CarouselLayout, Slide, TrackGeometry};
pub use outputs::{CellShift, MotionEvent, Outputs};
pub use physics::MotionState;
pub use position::{PositionValue, SliderTransform};
pub use scheduler::{FallbackPacer, FrameScheduler, ManualFrames};
