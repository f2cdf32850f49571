use crate::constants::{
    CONTACT_FORM_ID, CONTACT_SUBMIT_ID, CONTACT_SUCCESS_ID, FIELD_INVALID_CLASS, HIDDEN_CLASS,
    SUBMITTING_CLASS,
};
use crate::core::contact::{self, ContactForm, Field, Scheduler, SubmitOutcome};
use crate::dom::{self, Listener, TimeoutScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Control {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
}

impl Control {
    fn from_element(el: web::Element) -> Option<Self> {
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => Some(Control::Input(input)),
            Err(el) => el.dyn_into::<web::HtmlTextAreaElement>().ok().map(Control::TextArea),
        }
    }

    fn element(&self) -> &web::Element {
        match self {
            Control::Input(el) => el.as_ref(),
            Control::TextArea(el) => el.as_ref(),
        }
    }

    fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Control::Input(el) => el.set_value(value),
            Control::TextArea(el) => el.set_value(value),
        }
    }
}

/// Field named by an event's target control.
fn event_field(ev: &web::Event) -> Option<(Field, Control)> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    let field = Field::from_name(&el.get_attribute("name")?)?;
    Some((field, Control::from_element(el)?))
}

fn error_slot_id(field: Field) -> String {
    format!("contact-{}-error", field.name())
}

struct FormView {
    controls: Vec<(Field, Control)>,
    errors: Vec<(Field, web::Element)>,
    submit: Option<web::HtmlButtonElement>,
    success: Option<web::Element>,
}

impl FormView {
    fn mount(document: &web::Document, form: &web::Element) -> Self {
        let controls = Field::ALL
            .into_iter()
            .filter_map(|f| {
                let el = form
                    .query_selector(&format!("[name=\"{}\"]", f.name()))
                    .ok()
                    .flatten()?;
                Some((f, Control::from_element(el)?))
            })
            .collect();
        let errors = Field::ALL
            .into_iter()
            .filter_map(|f| Some((f, document.get_element_by_id(&error_slot_id(f))?)))
            .collect();
        let submit = document
            .get_element_by_id(CONTACT_SUBMIT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        Self {
            controls,
            errors,
            submit,
            success: document.get_element_by_id(CONTACT_SUCCESS_ID),
        }
    }

    fn render(&self, form: &ContactForm) {
        for (field, control) in &self.controls {
            let value = form.value(*field);
            // Only write on divergence so the caret does not jump while typing.
            if control.value() != value {
                control.set_value(value);
            }
            let invalid = form.visible_error(*field).is_some();
            dom::set_class(control.element(), FIELD_INVALID_CLASS, invalid);
            _ = control
                .element()
                .set_attribute("aria-invalid", if invalid { "true" } else { "false" });
        }
        for (field, slot) in &self.errors {
            slot.set_text_content(form.visible_error(*field));
        }
        if let Some(button) = &self.submit {
            button.set_disabled(form.is_submitting());
            dom::set_class(button, SUBMITTING_CLASS, form.is_submitting());
        }
        if let Some(success) = &self.success {
            dom::set_class(success, HIDDEN_CLASS, !form.show_success());
        }
    }
}

/// Contact form with inline validation and a simulated send.
pub struct ContactSection {
    scheduler: Rc<TimeoutScheduler>,
    _listeners: Vec<Listener>,
}

impl ContactSection {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let form_el = dom::element_by_id(document, CONTACT_FORM_ID)?;
        let state = Rc::new(RefCell::new(ContactForm::default()));
        let view = Rc::new(FormView::mount(document, &form_el));
        if view.controls.len() < Field::ALL.len() {
            log::warn!(
                "[contact] only {} of {} fields found",
                view.controls.len(),
                Field::ALL.len()
            );
        }
        view.render(&state.borrow());

        let scheduler = Rc::new(TimeoutScheduler::default());
        let mut listeners = Vec::new();

        {
            let state = state.clone();
            let view = view.clone();
            listeners.push(Listener::new(&form_el, "input", move |ev: web::Event| {
                if let Some((field, control)) = event_field(&ev) {
                    state.borrow_mut().change(field, control.value());
                    view.render(&state.borrow());
                }
            }));
        }
        {
            let state = state.clone();
            let view = view.clone();
            listeners.push(Listener::new(&form_el, "focusout", move |ev: web::FocusEvent| {
                if let Some((field, _)) = event_field(&ev) {
                    state.borrow_mut().blur(field);
                    view.render(&state.borrow());
                }
            }));
        }
        {
            let state = state.clone();
            let view = view.clone();
            let scheduler: Rc<dyn Scheduler> = scheduler.clone();
            listeners.push(Listener::new(&form_el, "submit", move |ev: web::Event| {
                ev.prevent_default();
                let on_update: Rc<dyn Fn()> = {
                    let state = state.clone();
                    let view = view.clone();
                    Rc::new(move || view.render(&state.borrow()))
                };
                match contact::submit(&state, &scheduler, on_update) {
                    SubmitOutcome::Started => log::info!("[contact] sending message"),
                    SubmitOutcome::Rejected(invalid) => {
                        log::debug!("[contact] rejected: {:?}", invalid.as_slice())
                    }
                    SubmitOutcome::Busy => return,
                }
                view.render(&state.borrow());
            }));
        }

        log::info!("[contact] mounted");
        Ok(Self {
            scheduler,
            _listeners: listeners,
        })
    }
}

impl Drop for ContactSection {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}
