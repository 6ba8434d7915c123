//! Browser adapter for carousel motion.
//!
//! Owns one [`MotionEngine`] per slider element, drives it from
//! `requestAnimationFrame`, writes the slider `transform`, and forwards wrap
//! shifts and scroll/settle notifications to JS callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use carousel_motion_core::{CarouselLayout, CellId, MotionConfig, MotionEngine, Outputs};

mod host;
mod scheduler;

use host::Host;
use scheduler::{FrameSource, RafScheduler};

pub(crate) struct Shared {
    pub engine: MotionEngine,
    pub host: Host,
    /// Outputs most recently applied to the page.
    pub last: Outputs,
}

impl Shared {
    /// Move the engine outputs out for applying once the borrow is released.
    pub fn drain(&mut self) -> (Outputs, Host) {
        let outputs = self.engine.take_outputs();
        if !outputs.is_empty() {
            self.last = outputs.clone();
        }
        (outputs, self.host.clone())
    }
}

#[wasm_bindgen]
pub struct CarouselMotion {
    shared: Rc<RefCell<Shared>>,
    source: FrameSource,
    pacer: Rc<Cell<carousel_motion_core::FallbackPacer>>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

impl CarouselMotion {
    fn scheduler(&self) -> RafScheduler {
        RafScheduler {
            shared: Rc::downgrade(&self.shared),
            source: self.source,
            pacer: Rc::clone(&self.pacer),
        }
    }

    /// Run `f` against the engine, then apply its outputs with the borrow released
    /// so callbacks may call back into this object.
    fn with_engine<R>(&self, f: impl FnOnce(&mut MotionEngine, &mut RafScheduler) -> R) -> R {
        let mut sched = self.scheduler();
        let (result, (outputs, host)) = {
            let mut inner = self.shared.borrow_mut();
            let result = f(&mut inner.engine, &mut sched);
            (result, inner.drain())
        };
        host.apply(&outputs);
        result
    }

    fn read<R>(&self, f: impl FnOnce(&MotionEngine) -> R) -> R {
        f(&self.shared.borrow().engine)
    }
}

#[wasm_bindgen]
impl CarouselMotion {
    /// Create a carousel driving `slider`. Pass a config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new CarouselMotion(sliderEl, { wrap_around: true, friction: 0.2 })
    #[wasm_bindgen(constructor)]
    pub fn new(slider: HtmlElement, config: JsValue) -> Result<CarouselMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: MotionConfig = if jsvalue_is_undefined_or_null(&config) {
            MotionConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(CarouselMotion {
            shared: Rc::new(RefCell::new(Shared {
                engine: MotionEngine::new(cfg),
                host: Host::new(slider),
                last: Outputs::default(),
            })),
            source: FrameSource::detect(),
            pacer: Rc::new(Cell::new(Default::default())),
        })
    }

    /// Install geometry, cells, shift subsets and slides measured by the page.
    #[wasm_bindgen(js_name = set_layout)]
    pub fn set_layout(&self, layout: JsValue) -> Result<(), JsError> {
        let layout: CarouselLayout = swb::from_value(layout)
            .map_err(|e| JsError::new(&format!("layout parse error: {e}")))?;
        self.shared
            .borrow_mut()
            .engine
            .set_layout(layout)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// `callback(cellIndex, shift)` relocates a cell by `shift` track lengths.
    #[wasm_bindgen(js_name = on_wrap_shift)]
    pub fn on_wrap_shift(&self, callback: Function) {
        self.shared.borrow_mut().host.callbacks.wrap_shift = Some(callback);
    }

    /// `callback(progress, position)` on every render.
    #[wasm_bindgen(js_name = on_scroll)]
    pub fn on_scroll(&self, callback: Function) {
        self.shared.borrow_mut().host.callbacks.scroll = Some(callback);
    }

    /// `callback()` once each time motion comes to rest.
    #[wasm_bindgen(js_name = on_settle)]
    pub fn on_settle(&self, callback: Function) {
        self.shared.borrow_mut().host.callbacks.settle = Some(callback);
    }

    #[wasm_bindgen(js_name = start_animation)]
    pub fn start_animation(&self) {
        self.with_engine(|eng, sched| {
            eng.start_animation(sched);
        });
    }

    #[wasm_bindgen(js_name = position_slider)]
    pub fn position_slider(&self) {
        self.with_engine(|eng, _| {
            eng.position_slider();
        });
    }

    #[wasm_bindgen(js_name = position_slider_at_selected)]
    pub fn position_slider_at_selected(&self) {
        self.with_engine(|eng, _| {
            eng.position_slider_at_selected();
        });
    }

    #[wasm_bindgen(js_name = unshift_cells)]
    pub fn unshift_cells(&self, cells: Vec<u32>) {
        let ids: Vec<CellId> = cells.into_iter().map(CellId).collect();
        self.with_engine(|eng, _| {
            eng.unshift_cells(&ids);
        });
    }

    #[wasm_bindgen(js_name = apply_force)]
    pub fn apply_force(&self, force: f64) {
        self.shared.borrow_mut().engine.apply_force(force);
    }

    #[wasm_bindgen(js_name = get_resting_position)]
    pub fn get_resting_position(&self) -> f64 {
        self.read(|eng| eng.get_resting_position())
    }

    /// Select the slide attraction pulls toward. Does not start animating.
    #[wasm_bindgen]
    pub fn select(&self, index: usize) -> Result<(), JsError> {
        self.shared
            .borrow_mut()
            .engine
            .select(index)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = set_pointer_down)]
    pub fn set_pointer_down(&self, down: bool) {
        self.shared.borrow_mut().engine.set_pointer_down(down);
    }

    #[wasm_bindgen(js_name = set_drag_target)]
    pub fn set_drag_target(&self, target: f64) {
        self.shared.borrow_mut().engine.set_drag_target(target);
    }

    #[wasm_bindgen(js_name = set_free_scrolling)]
    pub fn set_free_scrolling(&self, free: bool) {
        self.shared.borrow_mut().engine.set_free_scrolling(free);
    }

    #[wasm_bindgen(getter)]
    pub fn position(&self) -> f64 {
        self.read(|eng| eng.position())
    }

    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> f64 {
        self.read(|eng| eng.velocity())
    }

    #[wasm_bindgen(getter, js_name = is_animating)]
    pub fn is_animating(&self) -> bool {
        self.read(|eng| eng.is_animating())
    }

    /// Motion state snapshot as a plain object.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsError> {
        let snapshot = self.read(|eng| eng.snapshot());
        swb::to_value(&snapshot).map_err(|e| JsError::new(&format!("state error: {e}")))
    }

    /// Last non-empty outputs applied to the page, for debugging hosts.
    #[wasm_bindgen(js_name = last_outputs)]
    pub fn last_outputs(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.shared.borrow().last)
            .map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
