#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod render;
mod showcase;

use backdrop::Backdrop;
use contact::ContactSection;
use nav::Navigation;
use showcase::ShowcaseSection;

/// Mount a component, or log and carry on when its markup is missing.
fn mount_optional<T>(name: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(component) => Some(component),
        Err(e) => {
            log::warn!("[app] {} skipped: {:#}", name, e);
            None
        }
    }
}

/// Everything the page owns. Dropping it removes every listener, stops
/// every animation loop, cancels pending timers and releases the scroll
/// lock.
struct App {
    // Field order is drop order: the keydown hook goes before the
    // components it calls into, the shared lock goes last.
    _keys: Option<dom::Listener>,
    _showcase: Option<Rc<ShowcaseSection>>,
    _nav: Option<Rc<Navigation>>,
    _contact: Option<ContactSection>,
    _backdrop: Option<Backdrop>,
    _hero: Option<dom::Listener>,
    _lock: crate::core::scroll_lock::ScrollLock,
}

impl App {
    fn mount(document: &web::Document) -> Self {
        let lock = dom::body_scroll_lock(document);

        let backdrop = mount_optional("backdrop", Backdrop::mount(document));
        let nav = mount_optional("nav", Navigation::mount(document, &lock)).map(Rc::new);
        let showcase =
            mount_optional("showcase", ShowcaseSection::mount(document, &lock)).map(Rc::new);
        let contact = mount_optional("contact", ContactSection::mount(document));
        let hero = events::wire_hero_parallax(document);
        set_footer_year(document);

        // The modal sits above the mobile menu, so it sees Escape first.
        let keys = {
            let showcase = showcase.clone();
            let nav = nav.clone();
            events::wire_window_keydown(move |key| {
                showcase.as_ref().is_some_and(|s| s.handle_key(key))
                    || nav.as_ref().is_some_and(|n| n.handle_key(key))
            })
        };

        if let Some(b) = &backdrop {
            log::info!("[app] backdrop mode at mount: {:?}", b.mode());
        }

        Self {
            _keys: keys,
            _showcase: showcase,
            _nav: nav,
            _contact: contact,
            _backdrop: backdrop,
            _hero: hero,
            _lock: lock,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        log::info!("[app] unmounting");
    }
}

fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    // A second start tears the earlier mount down first.
    unmount();
    let app = App::mount(&document);
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear the page down: listeners, animation loops, timers and the scroll
/// lock all go with it.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}
