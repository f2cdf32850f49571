// Host-side tests for the project showcase: filtering, carousel paging and
// the detail overlay. The main crate is wasm-only, so the pure modules are
// pulled in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod site;

use site::projects::{categories, Project, ALL_CATEGORY, PROJECTS};
use site::scroll_lock::ScrollLock;
use site::showcase::Showcase;
use std::cell::RefCell;
use std::rc::Rc;

fn counting_lock() -> (ScrollLock, Rc<RefCell<Vec<bool>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (ScrollLock::new(move |locked| sink.borrow_mut().push(locked)), calls)
}

#[test]
fn categories_start_with_all_and_are_unique_in_order() {
    let cats = categories(PROJECTS);
    assert_eq!(
        cats.as_slice(),
        &[
            ALL_CATEGORY,
            "Full Stack",
            "Web App",
            "AI/ML",
            "Frontend",
            "Management System",
            "Game Development",
        ]
    );
}

#[test]
fn every_filter_resets_cursor_to_zero() {
    let mut s = Showcase::new(PROJECTS);
    let labels: Vec<&str> = s.categories().to_vec();
    for label in labels {
        s.set_category(ALL_CATEGORY);
        s.next();
        s.next();
        assert!(s.set_category(label));
        assert_eq!(s.cursor(), 0, "cursor after filter {label}");
    }
}

#[test]
fn reapplying_active_filter_still_resets_cursor() {
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Frontend");
    s.next();
    assert_eq!(s.cursor(), 1);
    assert!(s.set_category("Frontend"));
    assert_eq!(s.cursor(), 0);
}

#[test]
fn unknown_filter_is_ignored() {
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Web App");
    s.next();
    assert!(!s.set_category("Blockchain"));
    assert_eq!(s.category(), "Web App");
    assert_eq!(s.cursor(), 1);
}

#[test]
fn filter_keeps_matching_records_in_order() {
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Frontend");
    let ids: Vec<u32> = s.filtered().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 11, 12]);

    s.set_category(ALL_CATEGORY);
    assert_eq!(s.filtered_len(), PROJECTS.len());
}

#[test]
fn single_record_sets_do_not_navigate() {
    let mut s = Showcase::new(PROJECTS);
    for label in ["Full Stack", "AI/ML", "Game Development"] {
        s.set_category(label);
        assert_eq!(s.filtered_len(), 1);
        assert!(!s.can_navigate());
        s.next();
        assert_eq!(s.cursor(), 0);
        s.prev();
        assert_eq!(s.cursor(), 0);
    }
}

#[test]
fn empty_set_has_no_current_record() {
    static NONE: [Project; 0] = [];
    let mut s = Showcase::new(&NONE);
    assert_eq!(s.filtered_len(), 0);
    assert!(s.current().is_none());
    s.next();
    s.prev();
    assert_eq!(s.cursor(), 0);
    let (lock, _) = counting_lock();
    assert!(s.open_current(&lock).is_none());
    assert!(!lock.is_locked());
}

#[test]
fn next_and_prev_wrap_after_n_steps() {
    let mut s = Showcase::new(PROJECTS);
    for label in ["All", "Web App", "Frontend", "Management System"] {
        s.set_category(label);
        let n = s.filtered_len();
        assert!(n > 1);
        s.next();
        let start = s.cursor();
        for _ in 0..n {
            s.next();
        }
        assert_eq!(s.cursor(), start, "next wrap for {label}");
        for _ in 0..n {
            s.prev();
        }
        assert_eq!(s.cursor(), start, "prev wrap for {label}");
    }
}

#[test]
fn prev_from_first_goes_to_last() {
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Frontend");
    s.prev();
    assert_eq!(s.cursor(), 2);
    assert_eq!(s.current().map(|p| p.id), Some(12));
}

#[test]
fn go_to_rejects_out_of_range() {
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Management System");
    assert!(s.go_to(1));
    assert_eq!(s.current().map(|p| p.id), Some(10));
    assert!(!s.go_to(2));
    assert_eq!(s.cursor(), 1);
}

#[test]
fn overlay_stays_on_record_when_filter_changes() {
    let (lock, _) = counting_lock();
    let mut s = Showcase::new(PROJECTS);
    s.set_category("Frontend");
    s.next();
    let opened = s.open_current(&lock).map(|p| p.id);
    assert_eq!(opened, Some(11));

    s.set_category("AI/ML");
    s.next();
    assert_eq!(s.selected().map(|p| p.id), Some(11));

    s.set_category(ALL_CATEGORY);
    s.prev();
    assert_eq!(s.selected().map(|p| p.title), Some("Ping Coming landingpage"));
}

#[test]
fn overlay_holds_one_lock_and_escape_closes() {
    let (lock, calls) = counting_lock();
    let mut s = Showcase::new(PROJECTS);
    s.open_current(&lock);
    assert!(lock.is_locked());

    // Reopening rebinds the record without stacking locks.
    s.open_by_id(9, &lock);
    assert_eq!(s.selected().map(|p| p.id), Some(9));
    assert_eq!(lock.holders(), 1);

    assert!(!s.handle_key("Enter"));
    assert!(s.handle_key("Escape"));
    assert!(!s.is_overlay_open());
    assert!(!lock.is_locked());
    assert_eq!(*calls.borrow(), vec![true, false]);

    assert!(!s.handle_key("Escape"));
    assert!(!s.close());
}

#[test]
fn open_by_unknown_id_leaves_overlay_closed() {
    let (lock, _) = counting_lock();
    let mut s = Showcase::new(PROJECTS);
    assert!(s.open_by_id(7, &lock).is_none());
    assert!(!s.is_overlay_open());
    assert!(!lock.is_locked());
}
