use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Pretend network latency of a submission.
pub const SUBMIT_LATENCY_MS: u32 = 2000;
/// How long the thank-you banner stays up.
pub const SUCCESS_DISPLAY_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    /// Value of the `name` attribute on the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // Needs a dot with at least one character on either side.
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

fn min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Error message for `value` in `field`, `None` when valid.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    match field {
        Field::Name if blank => Some("Name is required"),
        Field::Name if !min_len(value, 2) => Some("Name must be at least 2 characters"),
        Field::Email if blank => Some("Email is required"),
        Field::Email if !is_valid_email(value) => Some("Please enter a valid email address"),
        Field::Subject if blank => Some("Subject is required"),
        Field::Subject if !min_len(value, 5) => Some("Subject must be at least 5 characters"),
        Field::Message if blank => Some("Message is required"),
        Field::Message if !min_len(value, 10) => Some("Message must be at least 10 characters"),
        _ => None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    values: [String; 4],
    errors: [Option<&'static str>; 4],
    touched: [bool; 4],
    submitting: bool,
    success: bool,
    // Bumped on every successful submission so a stale hide timer
    // cannot clear a newer banner.
    success_epoch: u64,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    /// The error the UI should show: only for touched fields.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn show_success(&self) -> bool {
        self.success
    }

    /// Input event. Re-validates only fields that were already touched.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let i = field.index();
        self.values[i] = value.into();
        if self.touched[i] {
            self.errors[i] = validate_field(field, &self.values[i]);
        }
    }

    /// Focus left the field.
    pub fn blur(&mut self, field: Field) {
        let i = field.index();
        self.touched[i] = true;
        self.errors[i] = validate_field(field, &self.values[i]);
    }

    /// Validate every field, then mark every field touched. Returns the
    /// fields that failed.
    pub fn validate_all(&mut self) -> SmallVec<[Field; 4]> {
        let mut invalid = SmallVec::new();
        for field in Field::ALL {
            let i = field.index();
            self.errors[i] = validate_field(field, &self.values[i]);
            if self.errors[i].is_some() {
                invalid.push(field);
            }
        }
        self.touched = [true; 4];
        invalid
    }

    fn finish_submission(&mut self) -> u64 {
        self.submitting = false;
        self.success = true;
        self.success_epoch += 1;
        self.values = Default::default();
        self.errors = [None; 4];
        self.touched = [false; 4];
        self.success_epoch
    }

    fn expire_success(&mut self, epoch: u64) -> bool {
        if self.success && self.success_epoch == epoch {
            self.success = false;
            true
        } else {
            false
        }
    }
}

/// Deferred execution used for the simulated submission delay. The browser
/// implementation is backed by `setTimeout`; tests drive a manual clock.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(SmallVec<[Field; 4]>),
    Started,
    /// A submission is already in flight.
    Busy,
}

/// Submit handler. `on_update` is invoked after every deferred state change
/// so the view can re-render.
pub fn submit(
    form: &Rc<RefCell<ContactForm>>,
    scheduler: &Rc<dyn Scheduler>,
    on_update: Rc<dyn Fn()>,
) -> SubmitOutcome {
    {
        let mut f = form.borrow_mut();
        if f.submitting {
            return SubmitOutcome::Busy;
        }
        let invalid = f.validate_all();
        if !invalid.is_empty() {
            return SubmitOutcome::Rejected(invalid);
        }
        f.submitting = true;
    }

    let form_done = form.clone();
    let scheduler_done = scheduler.clone();
    scheduler.schedule(
        SUBMIT_LATENCY_MS,
        Box::new(move || {
            let epoch = form_done.borrow_mut().finish_submission();
            on_update();
            let form_expire = form_done.clone();
            scheduler_done.schedule(
                SUCCESS_DISPLAY_MS,
                Box::new(move || {
                    if form_expire.borrow_mut().expire_success(epoch) {
                        on_update();
                    }
                }),
            );
        }),
    );
    SubmitOutcome::Started
}

/// Virtual-time scheduler: tasks run synchronously from `advance`.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: std::cell::Cell<u64>,
    queue: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that falls due, including
    /// tasks scheduled by tasks run during this call.
    pub fn advance(&self, ms: u64) {
        let end = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut q = self.queue.borrow_mut();
                let due = q
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= end)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| q.remove(i))
            };
            match next {
                Some((at, task)) => {
                    self.now_ms.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now_ms.set(end);
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now_ms.get() + delay_ms as u64;
        self.queue.borrow_mut().push((at, task));
    }
}
