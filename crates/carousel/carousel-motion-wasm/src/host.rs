//! Applies engine outputs to the page: slider transform plus JS callbacks.

use js_sys::Function;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use carousel_motion_core::{MotionEvent, Outputs};

/// JS callbacks registered by the page. All optional.
#[derive(Clone, Default)]
pub(crate) struct Callbacks {
    /// `(cellIndex: number, shift: number)`
    pub wrap_shift: Option<Function>,
    /// `(progress: number, position: number)`
    pub scroll: Option<Function>,
    /// `()`
    pub settle: Option<Function>,
}

/// Everything needed to apply outputs once the engine borrow is released.
#[derive(Clone)]
pub(crate) struct Host {
    pub slider: HtmlElement,
    pub callbacks: Callbacks,
}

impl Host {
    pub fn new(slider: HtmlElement) -> Self {
        Self {
            slider,
            callbacks: Callbacks::default(),
        }
    }

    /// Apply in order: cell shifts, slider transform, then notifications.
    pub fn apply(&self, outputs: &Outputs) {
        if let Some(f) = &self.callbacks.wrap_shift {
            for s in &outputs.shifts {
                let cell = JsValue::from(s.cell.0);
                let shift = JsValue::from(s.shift);
                if let Err(e) = f.call2(&JsValue::UNDEFINED, &cell, &shift) {
                    warn!("wrap shift callback failed: {e:?}");
                }
            }
        }

        if let Some(t) = &outputs.transform {
            if let Err(e) = self.slider.style().set_property("transform", &t.css()) {
                warn!("failed to write slider transform: {e:?}");
            }
        }

        for event in &outputs.events {
            let result = match event {
                MotionEvent::Scroll { progress, position } => match &self.callbacks.scroll {
                    Some(f) => f.call2(
                        &JsValue::UNDEFINED,
                        &JsValue::from_f64(*progress),
                        &JsValue::from_f64(*position),
                    ),
                    None => continue,
                },
                MotionEvent::Settle => match &self.callbacks.settle {
                    Some(f) => f.call0(&JsValue::UNDEFINED),
                    None => continue,
                },
                _ => continue,
            };
            if let Err(e) = result {
                warn!("event callback failed: {e:?}");
            }
        }
    }
}
