use super::projects::{categories, Categories, Project, ALL_CATEGORY};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Filter + carousel + detail overlay state for the project showcase.
///
/// The detail overlay is bound to a project record rather than to the
/// carousel cursor, so filtering or paging behind an open overlay never
/// changes what it shows.
pub struct Showcase {
    projects: &'static [Project],
    categories: Categories,
    category: &'static str,
    cursor: usize,
    selected: Option<&'static Project>,
    overlay_lock: Option<ScrollLockGuard>,
}

impl Showcase {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            categories: categories(projects),
            category: ALL_CATEGORY,
            cursor: 0,
            selected: None,
            overlay_lock: None,
        }
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Apply a filter. Known labels always reset the cursor, even when the
    /// label is already active. Unknown labels are ignored.
    pub fn set_category(&mut self, label: &str) -> bool {
        match self.categories.iter().copied().find(|c| *c == label) {
            Some(c) => {
                self.category = c;
                self.cursor = 0;
                true
            }
            None => false,
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &'static Project> + '_ {
        let all = self.category == ALL_CATEGORY;
        self.projects
            .iter()
            .filter(move |p| all || p.category == self.category)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&'static Project> {
        self.filtered().nth(self.cursor)
    }

    /// Prev/next controls are only enabled with more than one record.
    pub fn can_navigate(&self) -> bool {
        self.filtered_len() > 1
    }

    pub fn next(&mut self) {
        let n = self.filtered_len();
        if n > 1 {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.filtered_len();
        if n > 1 {
            self.cursor = (self.cursor + n - 1) % n;
        }
    }

    /// Jump straight to a filtered index (pagination dots).
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.filtered_len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    pub fn is_overlay_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the overlay on the record under the cursor.
    pub fn open_current(&mut self, lock: &ScrollLock) -> Option<&'static Project> {
        let project = self.current()?;
        self.open(project, lock);
        Some(project)
    }

    pub fn open_by_id(&mut self, id: u32, lock: &ScrollLock) -> Option<&'static Project> {
        let project = self.projects.iter().find(|p| p.id == id)?;
        self.open(project, lock);
        Some(project)
    }

    pub fn open(&mut self, project: &'static Project, lock: &ScrollLock) {
        self.selected = Some(project);
        if self.overlay_lock.is_none() {
            self.overlay_lock = Some(lock.acquire());
        }
    }

    /// Returns true when an open overlay was closed.
    pub fn close(&mut self) -> bool {
        self.overlay_lock = None;
        self.selected.take().is_some()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" => self.close(),
            _ => false,
        }
    }
}
