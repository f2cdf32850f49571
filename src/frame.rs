use crate::core::{Camera, ParticleField};
use crate::events::pointer::PointerState;
use crate::render::{FrameError, GpuState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the particle backdrop touches once per animation frame.
pub struct BackdropFrame {
    pub field: ParticleField,
    pub gpu: GpuState,
    pub camera: Camera,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub started: Instant,
}

impl BackdropFrame {
    pub fn frame(&mut self) -> Result<(), FrameError> {
        if self.gpu.is_lost() {
            return Err(FrameError::DeviceLost);
        }
        let elapsed = self.started.elapsed().as_secs_f32();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport(w, h);
        self.gpu.resize_if_needed(w, h);

        let ndc = self.pointer.borrow().ndc;
        let cursor = self.camera.cursor_on_target_plane(ndc);
        self.field.step(elapsed, cursor);

        let model_view = self.camera.view_matrix() * self.field.model_matrix(elapsed);
        self.gpu.render(
            self.field.positions(),
            model_view,
            self.camera.projection_matrix(),
        )
    }
}

struct LoopInner {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// `requestAnimationFrame` loop. `tick` receives the frame timestamp (ms) and
/// returns whether to keep going. Dropping the loop cancels the pending
/// frame; it must not be dropped from inside its own `tick`.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if tick(ts) {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(closure);
        inner.request();
        Self { inner }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.inner.handle.take(), web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}
