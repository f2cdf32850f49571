use crate::constants::{
    ACTIVE_CLASS, MENU_PANEL_ID, MENU_SCRIM_ID, MENU_TOGGLE_ID, NAV_ID, NAV_LINK_SELECTOR,
    NAV_SCROLLED_CLASS, OPEN_CLASS,
};
use crate::core::navigation::{
    anchor_target, scroll_target, MobileMenu, NavState, ScrollTween, Section, TweenStep,
};
use crate::core::scroll_lock::ScrollLock;
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Top of `el` in document coordinates.
fn document_top(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + dom::window_scroll_y()
}

fn max_scroll(document: &web::Document) -> f64 {
    let height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (height - dom::window_inner_height()).max(0.0)
}

fn section_offsets(document: &web::Document) -> [(Section, Option<f64>); 4] {
    Section::ALL.map(|s| {
        let top = document.get_element_by_id(s.anchor()).map(|el| document_top(&el));
        (s, top)
    })
}

struct NavView {
    nav: web::Element,
    links: Vec<web::Element>,
    state: NavState,
}

impl NavView {
    fn render(&self) {
        dom::set_class(&self.nav, NAV_SCROLLED_CLASS, self.state.scrolled);
        let active = self.state.active.anchor();
        for link in &self.links {
            let is_active = link
                .get_attribute("href")
                .as_deref()
                .and_then(anchor_target)
                .is_some_and(|id| id == active);
            dom::set_class(link, ACTIVE_CLASS, is_active);
        }
    }

    fn sync(&mut self, document: &web::Document) {
        let changed = self
            .state
            .update(dom::window_scroll_y(), section_offsets(document));
        if changed {
            log::debug!(
                "[nav] scrolled={} active={:?}",
                self.state.scrolled,
                self.state.active
            );
            self.render();
        }
    }
}

struct MenuView {
    menu: MobileMenu,
    toggle: Option<web::Element>,
    panel: Option<web::Element>,
    scrim: Option<web::Element>,
}

impl MenuView {
    fn render(&self) {
        let open = self.menu.is_open();
        for el in [&self.panel, &self.scrim].into_iter().flatten() {
            dom::set_class(el, OPEN_CLASS, open);
        }
        if let Some(toggle) = &self.toggle {
            dom::set_class(toggle, OPEN_CLASS, open);
            _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }
}

/// In-flight smooth scroll. A new request replaces the running one.
#[derive(Default)]
struct SmoothScroll {
    running: Option<AnimationLoop>,
}

fn now_sec() -> f64 {
    instant::now() / 1000.0
}

fn start_smooth_scroll(scroll: &Rc<RefCell<SmoothScroll>>, to: f64) {
    let from = dom::window_scroll_y();
    let mut tween = ScrollTween::new(from, to, now_sec());
    log::debug!("[nav] smooth scroll {:.0} -> {:.0}", from, tween.target());
    let frame_loop = AnimationLoop::start(move |_ts| {
        let Some(window) = web::window() else {
            return false;
        };
        match tween.step(now_sec(), dom::window_scroll_y()) {
            TweenStep::Continue(y) => {
                window.scroll_to_with_x_and_y(0.0, y);
                true
            }
            TweenStep::Done(y) => {
                window.scroll_to_with_x_and_y(0.0, y);
                false
            }
            TweenStep::Aborted => {
                log::debug!("[nav] smooth scroll interrupted");
                false
            }
        }
    });
    // Replacing drops the previous loop, which cancels its pending frame.
    scroll.borrow_mut().running = Some(frame_loop);
}

/// Sticky top bar, scroll-spy highlighting, mobile menu and smooth in-page
/// anchor scrolling.
pub struct Navigation {
    menu: Rc<RefCell<MenuView>>,
    _scroll: Rc<RefCell<SmoothScroll>>,
    _listeners: Vec<Listener>,
}

impl Navigation {
    pub fn mount(document: &web::Document, lock: &ScrollLock) -> anyhow::Result<Self> {
        let nav_el = dom::element_by_id(document, NAV_ID)?;
        let links = document
            .document_element()
            .map(|root| dom::query_all(&root, NAV_LINK_SELECTOR))
            .unwrap_or_default();

        let view = Rc::new(RefCell::new(NavView {
            nav: nav_el,
            links,
            state: NavState::default(),
        }));
        view.borrow().render();
        view.borrow_mut().sync(document);

        let menu = Rc::new(RefCell::new(MenuView {
            menu: MobileMenu::default(),
            toggle: document.get_element_by_id(MENU_TOGGLE_ID),
            panel: document.get_element_by_id(MENU_PANEL_ID),
            scrim: document.get_element_by_id(MENU_SCRIM_ID),
        }));
        menu.borrow().render();

        let scroll = Rc::new(RefCell::new(SmoothScroll::default()));
        let mut listeners = Vec::new();

        {
            let view = view.clone();
            let document = document.clone();
            listeners.extend(Listener::on_window("scroll", move |_: web::Event| {
                view.borrow_mut().sync(&document);
            }));
        }
        {
            let view = view.clone();
            let document = document.clone();
            listeners.extend(Listener::on_window("resize", move |_: web::Event| {
                view.borrow_mut().sync(&document);
            }));
        }
        {
            let menu = menu.clone();
            let lock = lock.clone();
            listeners.extend(dom::add_click_listener(document, MENU_TOGGLE_ID, move |_| {
                let mut m = menu.borrow_mut();
                let open = m.menu.toggle(&lock);
                log::debug!("[nav] mobile menu open={}", open);
                m.render();
            }));
        }
        {
            let menu = menu.clone();
            listeners.extend(dom::add_click_listener(document, MENU_SCRIM_ID, move |_| {
                let mut m = menu.borrow_mut();
                if m.menu.close() {
                    m.render();
                }
            }));
        }
        {
            // Any in-page anchor, wherever it lives, scrolls smoothly to its
            // section and closes the mobile menu.
            let menu = menu.clone();
            let scroll = scroll.clone();
            let document = document.clone();
            listeners.extend(Listener::on_window("click", move |ev: web::MouseEvent| {
                let Some(link) = dom::closest_from_event(&ev, "a[href^=\"#\"]") else {
                    return;
                };
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(id) = anchor_target(&href) else {
                    return;
                };
                let Some(target) = document.get_element_by_id(id) else {
                    return;
                };
                ev.prevent_default();
                {
                    let mut m = menu.borrow_mut();
                    if m.menu.close() {
                        m.render();
                    }
                }
                let to = scroll_target(document_top(&target), dom::window_inner_width())
                    .min(max_scroll(&document));
                start_smooth_scroll(&scroll, to);
            }));
        }

        log::info!("[nav] mounted");
        Ok(Self {
            menu,
            _scroll: scroll,
            _listeners: listeners,
        })
    }

    /// Escape closes the mobile menu.
    pub fn handle_key(&self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        let mut m = self.menu.borrow_mut();
        let closed = m.menu.close();
        if closed {
            m.render();
        }
        closed
    }
}
