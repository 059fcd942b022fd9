//! Mobile input helpers: double-tap zoom suppression on the document and
//! scroll-into-view for focused form fields on narrow viewports.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, EventTarget, FocusEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, TouchEvent, Window,
};
use yew::prelude::*;

use crate::config::UxConfig;
use crate::error::UxError;
use crate::state::{DoubleTapGuard, FocusScroll};
use crate::util::{clog, cwarn, viewport_width};

const FIELD_SELECTOR: &str = "input, select, textarea";
/// Set on a field while its scroll-into-view timer is pending.
pub const SCROLL_PENDING_ATTR: &str = "data-scroll-pending";
/// Set on the root by the hook to the number of fields it watches.
pub const WATCHED_FIELDS_ATTR: &str = "data-mobile-ux-fields";

/// Live listeners. Call [`MobileInputUx::detach`] to remove them.
pub struct MobileInputUx {
    window: Window,
    document: Document,
    fields: Vec<Element>,
    scroll: Rc<RefCell<FocusScroll>>,
    touch_end_cb: Closure<dyn FnMut(TouchEvent)>,
    focus_cb: Closure<dyn FnMut(FocusEvent)>,
    blur_cb: Option<Closure<dyn FnMut(FocusEvent)>>,
}

impl MobileInputUx {
    /// Attaches the touch-end listener to `document` and a focus listener to
    /// every field under `root` (the whole document when `root` is `None`).
    /// Fields that refuse a listener are skipped.
    pub fn attach(
        window: Window,
        document: Document,
        root: Option<Element>,
        config: &UxConfig,
    ) -> Result<Self, UxError> {
        let touch_end_cb = {
            let mut guard = DoubleTapGuard::new(config.double_tap_window_ms);
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if guard.on_touch_end(js_sys::Date::now()) {
                    e.prevent_default();
                    clog("double tap suppressed");
                }
            }) as Box<dyn FnMut(_)>)
        };
        document
            .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())?;

        let scroll = Rc::new(RefCell::new(FocusScroll::new(
            config.mobile_breakpoint_px,
            config.scroll_delay_ms,
            config.cancel_scroll_on_blur,
        )));

        let focus_cb = {
            let window = window.clone();
            let scroll = scroll.clone();
            Closure::wrap(Box::new(move |e: FocusEvent| {
                let Some(field) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let Some(width) = viewport_width(&window) else {
                    return;
                };
                let Some(delay) = scroll.borrow().delay_for(width) else {
                    return;
                };
                if let Err(err) = schedule_scroll(&window, field, delay, scroll.clone()) {
                    cwarn(&format!("scroll into view not scheduled: {err}"));
                }
            }) as Box<dyn FnMut(_)>)
        };

        let blur_cb = config.cancel_scroll_on_blur.then(|| {
            let window = window.clone();
            let scroll = scroll.clone();
            Closure::wrap(Box::new(move |e: FocusEvent| {
                if let Some(handle) = scroll.borrow_mut().take_cancellable() {
                    window.clear_timeout_with_handle(handle);
                    if let Some(field) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                        let _ = field.remove_attribute(SCROLL_PENDING_ATTR);
                    }
                    clog("pending scroll cancelled on blur");
                }
            }) as Box<dyn FnMut(_)>)
        });

        let list = match &root {
            Some(root) => root.query_selector_all(FIELD_SELECTOR)?,
            None => document.query_selector_all(FIELD_SELECTOR)?,
        };
        let mut fields = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(field) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let target: &EventTarget = field.as_ref();
            if let Err(err) =
                target.add_event_listener_with_callback("focus", focus_cb.as_ref().unchecked_ref())
            {
                cwarn(&format!("focus listener skipped: {}", UxError::from(err)));
                continue;
            }
            if let Some(blur_cb) = &blur_cb {
                if let Err(err) = target
                    .add_event_listener_with_callback("blur", blur_cb.as_ref().unchecked_ref())
                {
                    cwarn(&format!("blur listener skipped: {}", UxError::from(err)));
                }
            }
            fields.push(field);
        }
        clog(&format!("mobile input helpers attached to {} fields", fields.len()));

        Ok(Self {
            window,
            document,
            fields,
            scroll,
            touch_end_cb,
            focus_cb,
            blur_cb,
        })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn detach(self) {
        let _ = self.document.remove_event_listener_with_callback(
            "touchend",
            self.touch_end_cb.as_ref().unchecked_ref(),
        );
        for field in &self.fields {
            let _ = field
                .remove_event_listener_with_callback("focus", self.focus_cb.as_ref().unchecked_ref());
            if let Some(blur_cb) = &self.blur_cb {
                let _ = field
                    .remove_event_listener_with_callback("blur", blur_cb.as_ref().unchecked_ref());
            }
            let _ = field.remove_attribute(SCROLL_PENDING_ATTR);
        }
        if let Some(handle) = self.scroll.borrow_mut().take_cancellable() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

fn schedule_scroll(
    window: &Window,
    field: Element,
    delay_ms: i32,
    scroll: Rc<RefCell<FocusScroll>>,
) -> Result<(), UxError> {
    let marked = field.clone();
    let handle_slot = Rc::new(Cell::new(None::<i32>));
    let cb = {
        let handle_slot = handle_slot.clone();
        let scroll = scroll.clone();
        Closure::once_into_js(move || {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Center);
            field.scroll_into_view_with_scroll_into_view_options(&opts);
            let _ = field.remove_attribute(SCROLL_PENDING_ATTR);
            if let Some(handle) = handle_slot.get() {
                scroll.borrow_mut().fired(handle);
            }
        })
    };
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)?;
    // The timer cannot fire before this returns, so marking afterwards is safe.
    marked.set_attribute(SCROLL_PENDING_ATTR, "")?;
    handle_slot.set(Some(handle));
    scroll.borrow_mut().track(handle);
    Ok(())
}

/// Attaches the mobile helpers once, after the first render has put the
/// fields under `root` into the page. Removes them on unmount.
#[hook]
pub fn use_mobile_input_ux(root: NodeRef, config: UxConfig) {
    use_effect_with((), move |_| {
        let attached = web_sys::window()
            .ok_or(UxError::NoWindow)
            .and_then(|window| {
                let document = window.document().ok_or(UxError::NoDocument)?;
                MobileInputUx::attach(window, document, root.cast::<Element>(), &config)
            });
        let attached = match attached {
            Ok(ux) => {
                if let Some(root) = root.cast::<Element>() {
                    let _ = root.set_attribute(WATCHED_FIELDS_ATTR, &ux.field_count().to_string());
                }
                Some(ux)
            }
            Err(err) => {
                cwarn(&format!("mobile input helpers disabled: {err}"));
                None
            }
        };
        move || {
            if let Some(ux) = attached {
                ux.detach();
            }
        }
    });
}
