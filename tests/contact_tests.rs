// Host-side tests for contact form validation and the simulated submission.
// Timers run on a virtual clock so the whole flow is synchronous.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn fill(f: &mut ContactForm) {
    f.change(Field::Name, "Ada Lovelace");
    f.change(Field::Email, "ada@example.com");
    f.change(Field::Subject, "Project enquiry");
    f.change(Field::Message, "I would like to talk about a project.");
}

fn filled_form() -> ContactForm {
    let mut f = ContactForm::default();
    fill(&mut f);
    f
}

struct Harness {
    form: Rc<RefCell<ContactForm>>,
    clock: Rc<ManualScheduler>,
    scheduler: Rc<dyn Scheduler>,
    updates: Rc<Cell<u32>>,
}

impl Harness {
    fn new(form: ContactForm) -> Self {
        let clock = Rc::new(ManualScheduler::default());
        let scheduler: Rc<dyn Scheduler> = clock.clone();
        Self {
            form: Rc::new(RefCell::new(form)),
            clock,
            scheduler,
            updates: Rc::new(Cell::new(0)),
        }
    }

    fn submit(&self) -> SubmitOutcome {
        let updates = self.updates.clone();
        submit(
            &self.form,
            &self.scheduler,
            Rc::new(move || updates.set(updates.get() + 1)),
        )
    }
}

#[test]
fn name_rules() {
    assert_eq!(validate_field(Field::Name, ""), Some("Name is required"));
    assert_eq!(validate_field(Field::Name, "   "), Some("Name is required"));
    assert_eq!(
        validate_field(Field::Name, "A"),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        validate_field(Field::Name, " A "),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(validate_field(Field::Name, "Al"), None);
}

#[test]
fn email_rules() {
    assert_eq!(validate_field(Field::Email, ""), Some("Email is required"));
    assert_eq!(
        validate_field(Field::Email, "not-an-email"),
        Some("Please enter a valid email address")
    );
    assert_eq!(validate_field(Field::Email, "a@b.co"), None);
}

#[test]
fn email_shape() {
    for ok in ["a@b.co", "first.last@sub.domain.org", "x@y.z.w"] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in [
        "a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", "a@b .co", "",
    ] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn subject_and_message_lengths() {
    assert_eq!(validate_field(Field::Subject, ""), Some("Subject is required"));
    assert_eq!(
        validate_field(Field::Subject, "Hey"),
        Some("Subject must be at least 5 characters")
    );
    assert_eq!(validate_field(Field::Subject, "Hello"), None);

    assert_eq!(validate_field(Field::Message, ""), Some("Message is required"));
    assert_eq!(
        validate_field(Field::Message, "Too short"),
        Some("Message must be at least 10 characters")
    );
    assert_eq!(validate_field(Field::Message, "Long enough"), None);
}

#[test]
fn lengths_count_characters_not_bytes() {
    assert_eq!(
        validate_field(Field::Name, "é"),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(validate_field(Field::Name, "Zoë"), None);
}

#[test]
fn errors_hidden_until_touched() {
    let mut f = ContactForm::default();
    f.change(Field::Name, "A");
    assert!(!f.is_touched(Field::Name));
    assert_eq!(f.visible_error(Field::Name), None);

    f.blur(Field::Name);
    assert_eq!(
        f.visible_error(Field::Name),
        Some("Name must be at least 2 characters")
    );

    // Once touched, edits re-validate live.
    f.change(Field::Name, "Al");
    assert_eq!(f.visible_error(Field::Name), None);
    f.change(Field::Name, "");
    assert_eq!(f.visible_error(Field::Name), Some("Name is required"));
}

#[test]
fn field_names_round_trip() {
    for f in Field::ALL {
        assert_eq!(Field::from_name(f.name()), Some(f));
    }
    assert_eq!(Field::from_name("phone"), None);
}

#[test]
fn invalid_submit_touches_everything_and_does_not_start() {
    let mut form = ContactForm::default();
    form.change(Field::Name, "Ada");
    form.change(Field::Email, "ada@nowhere");
    let h = Harness::new(form);

    let outcome = h.submit();
    let expected: Vec<Field> = vec![Field::Email, Field::Subject, Field::Message];
    match outcome {
        SubmitOutcome::Rejected(invalid) => assert_eq!(invalid.to_vec(), expected),
        other => panic!("expected rejection, got {other:?}"),
    }

    let f = h.form.borrow();
    assert!(!f.is_submitting());
    for field in Field::ALL {
        assert!(f.is_touched(field));
    }
    assert_eq!(f.visible_error(Field::Name), None);
    assert_eq!(
        f.visible_error(Field::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(f.visible_error(Field::Subject), Some("Subject is required"));
    assert_eq!(f.visible_error(Field::Message), Some("Message is required"));
    assert_eq!(f.value(Field::Name), "Ada");
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn valid_submit_resets_then_shows_and_clears_success() {
    let h = Harness::new(filled_form());
    assert_eq!(h.submit(), SubmitOutcome::Started);
    assert!(h.form.borrow().is_submitting());
    assert!(!h.form.borrow().show_success());

    h.clock.advance(1999);
    assert!(h.form.borrow().is_submitting());
    assert_eq!(h.updates.get(), 0);

    h.clock.advance(1);
    {
        let f = h.form.borrow();
        assert!(!f.is_submitting());
        assert!(f.show_success());
        for field in Field::ALL {
            assert_eq!(f.value(field), "");
            assert!(!f.is_touched(field));
            assert_eq!(f.error(field), None);
        }
    }
    assert_eq!(h.updates.get(), 1);

    h.clock.advance(SUCCESS_DISPLAY_MS as u64 - 1);
    assert!(h.form.borrow().show_success());
    h.clock.advance(1);
    assert!(!h.form.borrow().show_success());
    assert_eq!(h.updates.get(), 2);
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn second_submit_while_sending_is_ignored() {
    let h = Harness::new(filled_form());
    assert_eq!(h.submit(), SubmitOutcome::Started);
    assert_eq!(h.submit(), SubmitOutcome::Busy);
    assert_eq!(h.clock.pending(), 1);
}

#[test]
fn stale_hide_timer_keeps_newer_banner() {
    let h = Harness::new(filled_form());
    h.submit();
    h.clock.advance(SUBMIT_LATENCY_MS as u64);
    assert!(h.form.borrow().show_success());

    // Send again while the first banner is still up; its hide timer is due
    // at 6000 ms, after the second send lands at 5000 ms.
    h.clock.advance(1000);
    fill(&mut h.form.borrow_mut());
    assert_eq!(h.submit(), SubmitOutcome::Started);
    h.clock.advance(SUBMIT_LATENCY_MS as u64);
    assert_eq!(h.clock.now_ms(), 5000);
    assert!(h.form.borrow().show_success());

    h.clock.advance(1000);
    assert!(h.form.borrow().show_success());

    h.clock.advance(2999);
    assert!(h.form.borrow().show_success());
    h.clock.advance(1);
    assert!(!h.form.borrow().show_success());
}
