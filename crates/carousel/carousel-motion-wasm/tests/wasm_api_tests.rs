#![cfg(target_arch = "wasm32")]
use carousel_motion_wasm::{abi_version, CarouselMotion};
use js_sys::{Function, Promise};
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn slider() -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn to_js(value: serde_json::Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap()
}

// Three 300px cells in a 300px viewport.
fn layout() -> JsValue {
    to_js(json!({
        "geometry": {
            "slideable_extent": 900.0,
            "cursor_offset": 0.0,
            "viewport_extent": 300.0,
            "slides_extent": 900.0
        },
        "cells": [
            { "extent": 300.0, "shift": 0 },
            { "extent": 300.0, "shift": 0 },
            { "extent": 300.0, "shift": 0 }
        ],
        "before_shift_cells": [2, 1],
        "after_shift_cells": [0, 1],
        "slides": [{ "target": 0.0 }, { "target": 300.0 }, { "target": 600.0 }],
        "selected_index": 1
    }))
}

fn pixel_config() -> JsValue {
    to_js(json!({ "percent_position": false }))
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(CarouselMotion::new(slider(), JsValue::UNDEFINED).is_ok());
    assert!(CarouselMotion::new(slider(), JsValue::NULL).is_ok());
}

#[wasm_bindgen_test]
fn invalid_friction_is_rejected() {
    let cfg = to_js(json!({ "friction": 1.5 }));
    assert!(CarouselMotion::new(slider(), cfg).is_err());
}

#[wasm_bindgen_test]
fn position_at_selected_writes_transform() {
    let el = slider();
    let motion = CarouselMotion::new(el.clone(), pixel_config()).unwrap();
    motion.set_layout(layout()).unwrap();
    motion.position_slider_at_selected();

    assert_eq!(motion.position(), -300.0);
    let transform = el.style().get_property_value("transform").unwrap();
    assert_eq!(transform, "translateX(-300px)");
}

#[wasm_bindgen_test]
fn select_out_of_range_errors() {
    let motion = CarouselMotion::new(slider(), JsValue::UNDEFINED).unwrap();
    motion.set_layout(layout()).unwrap();
    assert!(motion.select(2).is_ok());
    assert!(motion.select(3).is_err());
}

#[wasm_bindgen_test]
fn drag_keeps_animating() {
    let motion = CarouselMotion::new(slider(), pixel_config()).unwrap();
    motion.set_layout(layout()).unwrap();
    motion.set_pointer_down(true);
    motion.set_drag_target(-40.0);
    motion.start_animation();
    assert!(motion.is_animating());
    motion.set_pointer_down(false);
}

#[wasm_bindgen_test]
fn state_snapshot_is_plain_object() {
    let motion = CarouselMotion::new(slider(), JsValue::UNDEFINED).unwrap();
    motion.apply_force(12.0);
    let state = motion.state().unwrap();
    let velocity = js_sys::Reflect::get(&state, &JsValue::from_str("velocity")).unwrap();
    assert_eq!(velocity.as_f64(), Some(12.0));
}

#[wasm_bindgen_test]
async fn settles_and_notifies() {
    let motion = CarouselMotion::new(slider(), pixel_config()).unwrap();
    motion.set_layout(layout()).unwrap();
    motion.select(0).unwrap();

    let mut resolve_settle: Option<Function> = None;
    let settled = Promise::new(&mut |resolve, _reject| resolve_settle = Some(resolve));
    motion.on_settle(resolve_settle.unwrap());

    motion.start_animation();
    JsFuture::from(settled).await.unwrap();

    assert!(!motion.is_animating());
    assert_eq!(motion.position(), 0.0);
}

#[wasm_bindgen_test]
fn last_outputs_reports_applied_transform() {
    let motion = CarouselMotion::new(slider(), pixel_config()).unwrap();
    motion.set_layout(layout()).unwrap();
    motion.position_slider_at_selected();

    let outputs = motion.last_outputs().unwrap();
    let transform = js_sys::Reflect::get(&outputs, &JsValue::from_str("transform")).unwrap();
    assert!(transform.is_object());
    let value = js_sys::Reflect::get(&transform, &JsValue::from_str("value")).unwrap();
    let unit = js_sys::Reflect::get(&value, &JsValue::from_str("unit")).unwrap();
    let amount = js_sys::Reflect::get(&value, &JsValue::from_str("value")).unwrap();
    assert_eq!(unit.as_string().as_deref(), Some("px"));
    assert_eq!(amount.as_f64(), Some(-300.0));

    // reading does not consume
    let again = motion.last_outputs().unwrap();
    let transform = js_sys::Reflect::get(&again, &JsValue::from_str("transform")).unwrap();
    assert!(transform.is_object());
}
