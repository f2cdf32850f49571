use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::contact::Scheduler;
use crate::core::scroll_lock::ScrollLock;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn window_inner_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn window_inner_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn window_scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    pub fn on_window<E>(event: &'static str, handler: impl FnMut(E) + 'static) -> Option<Self>
    where
        E: JsCast + 'static,
    {
        web::window().map(|w| Self::new(&w, event, handler))
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Some(Listener::new(&el, "click", move |ev: web::MouseEvent| handler(ev)))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Scroll lock bound to `<body>`'s overflow.
pub fn body_scroll_lock(document: &web::Document) -> ScrollLock {
    let body = document.body();
    ScrollLock::new(move |locked| {
        if let Some(body) = &body {
            let style = body.style();
            _ = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
        log::debug!("[scroll-lock] locked={}", locked);
    })
}

/// `setTimeout`-backed scheduler. Pending timers can be cancelled in bulk
/// when the owning component is torn down.
#[derive(Default)]
pub struct TimeoutScheduler {
    pending: Rc<RefCell<Vec<i32>>>,
}

impl TimeoutScheduler {
    pub fn cancel_all(&self) {
        let ids: Vec<i32> = self.pending.borrow_mut().drain(..).collect();
        if let Some(w) = web::window() {
            for id in ids {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let Some(window) = web::window() else {
            log::warn!("[timer] no window; dropping task");
            return;
        };
        let pending = self.pending.clone();
        let id_cell = Rc::new(Cell::new(0));
        let id_for_cb = id_cell.clone();
        let callback = Closure::once_into_js(move || {
            pending.borrow_mut().retain(|id| *id != id_for_cb.get());
            task();
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(id) => {
                id_cell.set(id);
                self.pending.borrow_mut().push(id);
            }
            Err(e) => log::warn!("[timer] setTimeout failed: {:?}", e),
        }
    }
}
