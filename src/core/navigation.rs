use super::scroll_lock::{ScrollLock, ScrollLockGuard};

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Sections count as reached this far before their top edge.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 120.0;
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const NAV_OFFSET_NARROW_PX: f64 = 70.0;
pub const NAV_OFFSET_WIDE_PX: f64 = 90.0;
pub const SMOOTH_SCROLL_DURATION_SEC: f64 = 1.2;
/// Drift between the position we wrote and the one observed that counts
/// as the user scrolling.
pub const MANUAL_SCROLL_TOLERANCE_PX: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Portfolio => "Work",
            Section::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Last section (document order) whose lookahead-adjusted top has been
/// reached. Sections without a measured offset are skipped.
pub fn active_section(
    scroll_y: f64,
    offsets: impl IntoIterator<Item = (Section, Option<f64>)>,
) -> Section {
    let mut current = Section::Home;
    for (section, top) in offsets {
        if let Some(top) = top {
            if scroll_y >= top - ACTIVE_LOOKAHEAD_PX {
                current = section;
            }
        }
    }
    current
}

#[inline]
pub fn nav_offset(viewport_width: f64) -> f64 {
    if viewport_width < NARROW_VIEWPORT_PX {
        NAV_OFFSET_NARROW_PX
    } else {
        NAV_OFFSET_WIDE_PX
    }
}

/// Element id addressed by an in-page link, `None` for external links and
/// for the bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[inline]
pub fn scroll_target(element_top_in_document: f64, viewport_width: f64) -> f64 {
    (element_top_in_document - nav_offset(viewport_width)).max(0.0)
}

/// Scroll-derived nav state. `update` reports whether anything changed so
/// the DOM is only touched on transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub active: Section,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active: Section::Home,
        }
    }
}

impl NavState {
    pub fn update(
        &mut self,
        scroll_y: f64,
        offsets: impl IntoIterator<Item = (Section, Option<f64>)>,
    ) -> bool {
        let next = NavState {
            scrolled: is_scrolled(scroll_y),
            active: active_section(scroll_y, offsets),
        };
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// Mobile overlay menu. Holds the page scroll lock while expanded.
#[derive(Default)]
pub struct MobileMenu {
    lock: Option<ScrollLockGuard>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn open(&mut self, lock: &ScrollLock) {
        if self.lock.is_none() {
            self.lock = Some(lock.acquire());
        }
    }

    pub fn close(&mut self) -> bool {
        self.lock.take().is_some()
    }

    pub fn toggle(&mut self, lock: &ScrollLock) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open(lock);
        }
        self.is_open()
    }
}

/// `power4.inOut`: quintic ease in/out.
pub fn ease_power4_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep {
    /// Write this scroll position and keep going.
    Continue(f64),
    /// Final position; the tween is over.
    Done(f64),
    /// The user scrolled on their own; stop without writing.
    Aborted,
}

/// Window scroll animation from the current position to `to`.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    started_at: f64,
    duration: f64,
    last_written: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, now_sec: f64) -> Self {
        Self::with_duration(from, to, now_sec, SMOOTH_SCROLL_DURATION_SEC)
    }

    pub fn with_duration(from: f64, to: f64, now_sec: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            started_at: now_sec,
            duration: duration.max(1e-6),
            last_written: from,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// `observed_y` is the scroll position the page reports right now.
    pub fn step(&mut self, now_sec: f64, observed_y: f64) -> TweenStep {
        if (observed_y - self.last_written).abs() > MANUAL_SCROLL_TOLERANCE_PX {
            return TweenStep::Aborted;
        }
        let t = ((now_sec - self.started_at) / self.duration).clamp(0.0, 1.0);
        let y = self.from + (self.to - self.from) * ease_power4_in_out(t);
        self.last_written = y;
        if t >= 1.0 {
            TweenStep::Done(self.to)
        } else {
            TweenStep::Continue(y)
        }
    }
}
