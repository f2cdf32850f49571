// Host-side tests for the HTML fragments rendered into the showcase and the
// hero parallax helper.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod site;

use site::hero::parallax_offset;
use site::projects::{categories, Project, PROJECTS};
use site::views::*;

fn project(id: u32) -> &'static Project {
    PROJECTS.iter().find(|p| p.id == id).expect("seed project")
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn filter_bar_marks_active_chip() {
    let cats = categories(PROJECTS);
    let html = filter_bar(&cats, "AI/ML");
    assert_eq!(html.matches("<button").count(), cats.len());
    assert_eq!(html.matches("is-active").count(), 1);
    assert!(html.contains(
        "class=\"filter-chip is-active\" data-category=\"AI/ML\" aria-pressed=\"true\""
    ));
    assert!(html.contains("data-category=\"All\" aria-pressed=\"false\""));
}

#[test]
fn carousel_card_shows_record() {
    let p = project(4);
    let html = carousel_card(Some(p));
    assert!(html.contains(p.title));
    assert!(html.contains("data-action=\"details\""));
    for t in p.tech {
        assert!(html.contains(&escape_html(t)), "missing tech {t}");
    }
    assert!(html.contains(&format!("href=\"{}\"", escape_html(p.repo_url))));
}

#[test]
fn carousel_card_escapes_urls() {
    // Image URLs carry query strings with '&'.
    let p = PROJECTS
        .iter()
        .find(|p| p.image.contains('&'))
        .expect("project with query string image");
    let html = carousel_card(Some(p));
    assert!(!html.contains(p.image));
    assert!(html.contains(&escape_html(p.image)));
}

#[test]
fn empty_carousel_has_placeholder() {
    let html = carousel_card(None);
    assert!(html.contains("carousel-empty"));
    assert!(!html.contains("data-action"));
}

#[test]
fn dots_match_filtered_count() {
    let html = pagination_dots(3, 1);
    assert_eq!(html.matches("data-index=").count(), 3);
    assert!(html.contains("class=\"dot is-active\" data-index=\"1\""));
    assert!(pagination_dots(0, 0).is_empty());
}

#[test]
fn modal_lists_long_description_and_links() {
    let p = project(6);
    let html = project_modal(p);
    assert!(html.contains("data-action=\"close\""));
    assert!(html.contains("Tech Stack"));
    assert!(html.contains(&escape_html(p.long_description)));
    assert!(html.contains("Live Demo"));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn parallax_only_on_wide_viewports() {
    assert_eq!(parallax_offset(100.0, 100.0, 1024.0, 768.0), None);
    assert_eq!(parallax_offset(640.0, 400.0, 1280.0, 800.0), Some((0.0, 0.0)));
    assert_eq!(parallax_offset(0.0, 0.0, 1280.0, 800.0), Some((-15.0, -15.0)));
    assert_eq!(parallax_offset(1280.0, 800.0, 1280.0, 800.0), Some((15.0, 15.0)));
}
