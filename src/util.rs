// Console logging and small browser helpers

use std::cell::Cell;
use wasm_bindgen::JsValue;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(on: bool) {
    DEBUG.with(|d| d.set(on));
}

pub fn clog(msg: &str) {
    if DEBUG.with(|d| d.get()) {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Value of `name` in the current page's query string.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|v| !v.is_empty())
}

/// Current layout viewport width in CSS pixels.
pub fn viewport_width(window: &web_sys::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}
