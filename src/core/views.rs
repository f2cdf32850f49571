use super::projects::Project;
use std::fmt::Write;

// HTML fragments for the dynamic parts of the showcase. Everything coming
// from project data goes through `escape_html`.

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tech_tags(out: &mut String, tech: &[&str], class: &str) {
    for t in tech {
        _ = write!(out, "<span class=\"{}\">{}</span>", class, escape_html(t));
    }
}

pub fn filter_bar(categories: &[&str], active: &str) -> String {
    let mut out = String::new();
    for cat in categories {
        let state = if *cat == active { " is-active" } else { "" };
        _ = write!(
            out,
            "<button type=\"button\" class=\"filter-chip{}\" data-category=\"{}\" aria-pressed=\"{}\">{}</button>",
            state,
            escape_html(cat),
            *cat == active,
            escape_html(cat)
        );
    }
    out
}

/// Carousel slide for `project`, or an empty-state message.
pub fn carousel_card(project: Option<&Project>) -> String {
    let Some(p) = project else {
        return "<p class=\"carousel-empty\">No projects in this category yet.</p>".to_string();
    };
    let mut out = String::new();
    _ = write!(
        out,
        "<div class=\"carousel-media\"><img src=\"{img}\" alt=\"{title}\" loading=\"lazy\">\
         <button type=\"button\" class=\"carousel-zoom\" data-action=\"details\" aria-label=\"View details\">+</button></div>\
         <div class=\"carousel-body\"><span class=\"carousel-category\">{cat}</span>\
         <h3 class=\"carousel-title\">{title}</h3><p class=\"carousel-desc\">{desc}</p><div class=\"tech-list\">",
        img = escape_html(p.image),
        title = escape_html(p.title),
        cat = escape_html(p.category),
        desc = escape_html(p.description),
    );
    tech_tags(&mut out, p.tech, "tech-tag");
    _ = write!(
        out,
        "</div><div class=\"carousel-actions\">\
         <button type=\"button\" class=\"btn btn-primary\" data-action=\"details\">Details</button>\
         <a class=\"icon-link\" href=\"{repo}\" aria-label=\"GitHub\">GitHub</a>\
         <a class=\"icon-link\" href=\"{live}\" aria-label=\"Live Demo\">Live</a></div></div>",
        repo = escape_html(p.repo_url),
        live = escape_html(p.live_url),
    );
    out
}

pub fn pagination_dots(count: usize, current: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let state = if i == current { " is-active" } else { "" };
        _ = write!(
            out,
            "<button type=\"button\" class=\"dot{}\" data-index=\"{}\" aria-label=\"Go to project {}\"></button>",
            state,
            i,
            i + 1
        );
    }
    out
}

pub fn project_modal(project: &Project) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        "<button type=\"button\" class=\"modal-close\" data-action=\"close\" aria-label=\"Close\">&times;</button>\
         <div class=\"modal-media\"><img src=\"{img}\" alt=\"{title}\"></div>\
         <div class=\"modal-body\"><span class=\"carousel-category\">{cat}</span>\
         <h3 class=\"modal-title\">{title}</h3><p class=\"modal-desc\">{long}</p>\
         <h4 class=\"modal-subhead\">Tech Stack</h4><div class=\"tech-list\">",
        img = escape_html(project.image),
        title = escape_html(project.title),
        cat = escape_html(project.category),
        long = escape_html(project.long_description),
    );
    tech_tags(&mut out, project.tech, "tech-tag tech-tag--lg");
    _ = write!(
        out,
        "</div><div class=\"modal-actions\">\
         <a class=\"btn btn-primary\" href=\"{live}\" target=\"_blank\" rel=\"noopener noreferrer\">Live Demo</a>\
         <a class=\"btn btn-ghost\" href=\"{repo}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a></div></div>",
        live = escape_html(project.live_url),
        repo = escape_html(project.repo_url),
    );
    out
}
