use crate::constants::{
    ACTIVE_CLASS, CAROUSEL_CARD_ID, CAROUSEL_CONTROL_SELECTOR, CAROUSEL_DOTS_ID, FILTERS_ID,
    HIDDEN_CLASS, MODAL_ID, MODAL_PANEL_ID,
};
use crate::core::navigation::Section;
use crate::core::projects::PROJECTS;
use crate::core::scroll_lock::ScrollLock;
use crate::core::showcase::Showcase;
use crate::core::views;
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ShowcaseView {
    model: Showcase,
    lock: ScrollLock,
    section: web::Element,
    filters: web::Element,
    card: web::Element,
    dots: web::Element,
    modal: web::Element,
    modal_panel: web::Element,
}

impl ShowcaseView {
    fn render_filters(&self) {
        self.filters.set_inner_html(&views::filter_bar(
            self.model.categories(),
            self.model.category(),
        ));
    }

    fn render_carousel(&self) {
        self.card
            .set_inner_html(&views::carousel_card(self.model.current()));
        self.dots.set_inner_html(&views::pagination_dots(
            self.model.filtered_len(),
            self.model.cursor(),
        ));
        let enabled = self.model.can_navigate();
        for control in dom::query_all(&self.section, CAROUSEL_CONTROL_SELECTOR) {
            _ = if enabled {
                control.remove_attribute("disabled")
            } else {
                control.set_attribute("disabled", "")
            };
        }
    }

    fn render_modal(&self) {
        match self.model.selected() {
            Some(project) => {
                self.modal_panel
                    .set_inner_html(&views::project_modal(project));
                dom::set_class(&self.modal, HIDDEN_CLASS, false);
                dom::set_class(&self.modal, ACTIVE_CLASS, true);
                _ = self.modal.set_attribute("aria-hidden", "false");
            }
            None => {
                dom::set_class(&self.modal, ACTIVE_CLASS, false);
                dom::set_class(&self.modal, HIDDEN_CLASS, true);
                _ = self.modal.set_attribute("aria-hidden", "true");
                self.modal_panel.set_inner_html("");
            }
        }
    }

    fn on_section_click(&mut self, ev: &web::MouseEvent) {
        if let Some(chip) = dom::closest_from_event(ev, "[data-category]") {
            let label = chip.get_attribute("data-category").unwrap_or_default();
            if self.model.set_category(&label) {
                log::debug!(
                    "[showcase] filter={} ({} projects)",
                    label,
                    self.model.filtered_len()
                );
                self.render_filters();
                self.render_carousel();
            }
            return;
        }
        if let Some(control) = dom::closest_from_event(ev, CAROUSEL_CONTROL_SELECTOR) {
            match control.get_attribute("data-carousel").as_deref() {
                Some("next") => self.model.next(),
                Some("prev") => self.model.prev(),
                _ => return,
            }
            self.render_carousel();
            return;
        }
        if let Some(dot) = dom::closest_from_event(ev, "[data-index]") {
            let index = dot
                .get_attribute("data-index")
                .and_then(|v| v.parse::<usize>().ok());
            if let Some(index) = index {
                if self.model.go_to(index) {
                    self.render_carousel();
                }
            }
            return;
        }
        if dom::closest_from_event(ev, "[data-action=\"details\"]").is_some() {
            if let Some(project) = self.model.open_current(&self.lock) {
                log::info!("[showcase] details: {}", project.title);
                self.render_modal();
            }
        }
    }

    fn on_modal_click(&mut self, ev: &web::MouseEvent) {
        let on_close = dom::closest_from_event(ev, "[data-action=\"close\"]").is_some();
        let inside_panel = dom::closest_from_event(ev, &format!("#{}", MODAL_PANEL_ID)).is_some();
        if (on_close || !inside_panel) && self.model.close() {
            self.render_modal();
        }
    }

    fn open_by_id(&mut self, id: u32) {
        match self.model.open_by_id(id, &self.lock) {
            Some(project) => {
                log::info!("[showcase] details: {}", project.title);
                self.render_modal();
            }
            None => log::warn!("[showcase] no project with id {}", id),
        }
    }
}

/// Category filter, carousel and project detail modal.
pub struct ShowcaseSection {
    view: Rc<RefCell<ShowcaseView>>,
    _listeners: Vec<Listener>,
}

impl ShowcaseSection {
    pub fn mount(document: &web::Document, lock: &ScrollLock) -> anyhow::Result<Self> {
        let view = Rc::new(RefCell::new(ShowcaseView {
            model: Showcase::new(PROJECTS),
            lock: lock.clone(),
            section: dom::element_by_id(document, Section::Portfolio.anchor())?,
            filters: dom::element_by_id(document, FILTERS_ID)?,
            card: dom::element_by_id(document, CAROUSEL_CARD_ID)?,
            dots: dom::element_by_id(document, CAROUSEL_DOTS_ID)?,
            modal: dom::element_by_id(document, MODAL_ID)?,
            modal_panel: dom::element_by_id(document, MODAL_PANEL_ID)?,
        }));
        {
            let v = view.borrow();
            v.render_filters();
            v.render_carousel();
            v.render_modal();
        }

        let mut listeners = Vec::new();
        {
            let v = view.clone();
            let section = view.borrow().section.clone();
            listeners.push(Listener::new(&section, "click", move |ev: web::MouseEvent| {
                v.borrow_mut().on_section_click(&ev);
            }));
        }
        {
            let v = view.clone();
            let modal = view.borrow().modal.clone();
            listeners.push(Listener::new(&modal, "click", move |ev: web::MouseEvent| {
                v.borrow_mut().on_modal_click(&ev);
            }));
        }
        {
            // Featured-project buttons elsewhere on the page carry the record id.
            let v = view.clone();
            listeners.extend(Listener::on_window("click", move |ev: web::MouseEvent| {
                let Some(el) = dom::closest_from_event(&ev, "[data-project-id]") else {
                    return;
                };
                if let Some(id) = el
                    .get_attribute("data-project-id")
                    .and_then(|v| v.parse::<u32>().ok())
                {
                    ev.prevent_default();
                    v.borrow_mut().open_by_id(id);
                }
            }));
        }

        log::info!(
            "[showcase] mounted with {} projects in {} categories",
            PROJECTS.len(),
            view.borrow().model.categories().len() - 1
        );
        Ok(Self {
            view,
            _listeners: listeners,
        })
    }

    pub fn handle_key(&self, key: &str) -> bool {
        let mut v = self.view.borrow_mut();
        let handled = v.model.handle_key(key);
        if handled {
            v.render_modal();
        }
        handled
    }
}
