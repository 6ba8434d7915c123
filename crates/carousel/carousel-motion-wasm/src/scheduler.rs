//! `requestAnimationFrame` implementation of the frame scheduling port.
//!
//! Each request registers a one-shot callback that re-enters the shared
//! engine, runs one frame, and applies its outputs. When the page has no
//! `requestAnimationFrame`, a `setTimeout` paced to ~16ms stands in.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{trace, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use carousel_motion_core::{FallbackPacer, FrameScheduler};

use crate::Shared;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameSource {
    AnimationFrame,
    Timer,
}

impl FrameSource {
    /// Probe the global window once.
    pub fn detect() -> Self {
        let has_raf = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("requestAnimationFrame")).ok())
            .map(|f| f.is_function())
            .unwrap_or(false);
        if has_raf {
            FrameSource::AnimationFrame
        } else {
            warn!("requestAnimationFrame unavailable; falling back to a 16ms timer");
            FrameSource::Timer
        }
    }
}

#[derive(Clone)]
pub(crate) struct RafScheduler {
    pub shared: Weak<RefCell<Shared>>,
    pub source: FrameSource,
    pub pacer: Rc<Cell<FallbackPacer>>,
}

impl RafScheduler {
    fn request_timer(&self, callback: &JsValue) {
        let Some(window) = web_sys::window() else {
            warn!("no window; frame dropped");
            return;
        };
        let mut pacer = self.pacer.get();
        let delay = pacer.next_delay(js_sys::Date::now());
        self.pacer.set(pacer);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay as i32,
        ) {
            warn!("setTimeout failed; frame dropped: {e:?}");
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let next = self.clone();
        let callback = Closure::once_into_js(move || run_frame(next));

        match self.source {
            FrameSource::AnimationFrame => {
                let requested = web_sys::window()
                    .map(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
                    .unwrap_or(false);
                if !requested {
                    self.request_timer(&callback);
                }
            }
            FrameSource::Timer => self.request_timer(&callback),
        }
    }
}

fn run_frame(mut scheduler: RafScheduler) {
    let Some(shared) = scheduler.shared.upgrade() else {
        trace!("carousel dropped before its frame fired");
        return;
    };
    let (outputs, host) = {
        let Ok(mut inner) = shared.try_borrow_mut() else {
            // re-entered from a callback; retry on the next frame
            scheduler.request_frame();
            return;
        };
        inner.engine.on_frame(&mut scheduler);
        inner.drain()
    };
    host.apply(&outputs);
}
