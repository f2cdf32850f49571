use crate::core::camera::client_to_ndc;
use crate::core::hero::parallax_offset;
use crate::dom::{self, Listener};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Normalized device coordinates, y up.
    pub ndc: Vec2,
}

/// Keep `state` in sync with the pointer anywhere over the window. The
/// backdrop itself ignores pointer events, so the window is the source.
pub fn track_window_pointer(state: Rc<RefCell<PointerState>>) -> Option<Listener> {
    Listener::on_window("pointermove", move |ev: web::PointerEvent| {
        state.borrow_mut().ndc = client_to_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            dom::window_inner_width() as f32,
            dom::window_inner_height() as f32,
        );
    })
}

/// Hero content drifts with the mouse on wide viewports.
pub fn wire_hero_parallax(document: &web::Document) -> Option<Listener> {
    let el = document
        .get_element_by_id(crate::constants::HERO_PARALLAX_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Listener::on_window("mousemove", move |ev: web::MouseEvent| {
        let style = el.style();
        match parallax_offset(
            ev.client_x() as f64,
            ev.client_y() as f64,
            dom::window_inner_width(),
            dom::window_inner_height(),
        ) {
            Some((x, y)) => {
                _ = style.set_property("transform", &format!("translate({:.1}px, {:.1}px)", x, y));
            }
            None => {
                _ = style.remove_property("transform");
            }
        }
    })
}
