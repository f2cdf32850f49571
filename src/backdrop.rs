use crate::constants::{
    BACKDROP_CANVAS_ID, BACKDROP_FALLBACK_CLASS, BACKDROP_ID, BACKDROP_PARTICLES_CLASS,
};
use crate::core::{BackdropMode, Camera, ParticleField, ParticleParams};
use crate::dom::{self, Listener};
use crate::events::{self, PointerState};
use crate::frame::{AnimationLoop, BackdropFrame};
use crate::render::{self, GpuState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct BackdropState {
    mode: BackdropMode,
    host: web::Element,
    frame_loop: Option<AnimationLoop>,
}

impl BackdropState {
    fn apply_mode(&mut self, mode: BackdropMode) {
        self.mode = mode;
        dom::set_class(&self.host, BACKDROP_PARTICLES_CLASS, mode == BackdropMode::Particles);
        dom::set_class(&self.host, BACKDROP_FALLBACK_CLASS, mode == BackdropMode::Fallback);
    }
}

/// Animated particle cloud behind the page, or a CSS gradient when the
/// browser cannot give us a GPU context.
pub struct Backdrop {
    state: Rc<RefCell<BackdropState>>,
    _listeners: Vec<Listener>,
}

impl Backdrop {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let host = dom::element_by_id(document, BACKDROP_ID)?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, BACKDROP_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let state = Rc::new(RefCell::new(BackdropState {
            mode: BackdropMode::Pending,
            host,
            frame_loop: None,
        }));

        let mut listeners = Vec::new();
        dom::sync_canvas_backing_size(&canvas);
        let canvas_resize = canvas.clone();
        listeners.extend(Listener::on_window("resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        }));
        let pointer = Rc::new(RefCell::new(PointerState::default()));
        listeners.extend(events::track_window_pointer(pointer.clone()));

        // Decided once: either we end up with a GPU context or we fall back.
        if !render::webgpu_exposed() {
            log::warn!("[backdrop] WebGPU unavailable; using CSS fallback");
            state.borrow_mut().apply_mode(BackdropMode::Pending.resolve(false));
        } else {
            let weak = Rc::downgrade(&state);
            spawn_local(async move {
                let params = ParticleParams::default();
                let gpu = GpuState::new(&canvas, params.count).await;
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match gpu {
                    Ok(gpu) => start_particles(&state, gpu, params, canvas, pointer),
                    Err(e) => {
                        log::warn!("[backdrop] {}; using CSS fallback", e);
                        let mut s = state.borrow_mut();
                        let next = s.mode.resolve(false);
                        s.apply_mode(next);
                    }
                }
            });
        }

        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    pub fn mode(&self) -> BackdropMode {
        self.state.borrow().mode
    }
}

fn start_particles(
    state: &Rc<RefCell<BackdropState>>,
    gpu: GpuState,
    params: ParticleParams,
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let camera = Camera::with_viewport(canvas.width(), canvas.height());
    let mut frame = BackdropFrame {
        field: ParticleField::new(params, seed),
        gpu,
        camera,
        canvas,
        pointer,
        started: Instant::now(),
    };
    let weak: Weak<RefCell<BackdropState>> = Rc::downgrade(state);
    let frame_loop = AnimationLoop::start(move |_ts| match frame.frame() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[backdrop] {}; switching to CSS fallback", e);
            if let Some(state) = weak.upgrade() {
                let mut s = state.borrow_mut();
                let next = s.mode.context_lost();
                s.apply_mode(next);
            }
            false
        }
    });

    let mut s = state.borrow_mut();
    let next = s.mode.resolve(true);
    s.apply_mode(next);
    s.frame_loop = Some(frame_loop);
    log::info!("[backdrop] particles running");
}
