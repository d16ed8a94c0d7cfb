//! Whole-page assembly.
//!
//! # Responsibility
//! - Assemble the final HTML document from profile content, the filtered
//!   project view and best-effort extras.
//! - Own the theme flag and the per-render page state.
//!
//! # Invariants
//! - Rendering is pure apart from log output: the same profile, catalog,
//!   state and extras always produce the same document.
//! - Styling is inlined, so the output is one self-contained file.

use super::markdown::escape_html;
use super::sections;
use crate::assets::ResumeSlot;
use crate::catalog::Catalog;
use crate::filter::pipeline::{filter_projects, FilterQuery};
use crate::model::site::{PageMeta, SiteProfile};
use log::info;
use std::time::Instant;

static STYLES: &str = include_str!("styles.css");

/// Page color scheme. Dark is the default; light is an explicit opt-in that
/// adds the `light-theme` class to `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Class list for `<body>`; empty for the default scheme.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "",
            Self::Light => "light-theme",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

/// Per-render page state: the theme flag plus the active filter query.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub theme: Theme,
    pub query: FilterQuery,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Best-effort page inputs gathered outside the render: remote fetches and
/// embedded documents. Every field may be absent without failing the render.
#[derive(Debug, Clone, Default)]
pub struct PageExtras {
    /// Hero animation JSON, already fetched.
    pub animation: Option<serde_json::Value>,
    /// Visit count, already fetched; `None` renders the placeholder.
    pub visits: Option<u64>,
    /// Resume documents in configured order.
    pub resumes: Vec<ResumeSlot>,
}

impl PageExtras {
    pub fn new() -> Self {
        Self::default()
    }
}

fn head_html(meta: &PageMeta) -> String {
    let title = if meta.icon.trim().is_empty() {
        escape_html(&meta.title)
    } else {
        format!("{} {}", escape_html(meta.icon.trim()), escape_html(&meta.title))
    };

    let mut out = String::new();
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    if !meta.description.trim().is_empty() {
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(&meta.description)
        ));
        out.push_str(&format!(
            "<meta property=\"og:description\" content=\"{}\">\n",
            escape_html(&meta.description)
        ));
    }
    if !meta.keywords.trim().is_empty() {
        out.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape_html(&meta.keywords)
        ));
    }
    out.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&meta.title)
    ));
    if !meta.canonical_url.trim().is_empty() {
        out.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_html(&meta.canonical_url)
        ));
        out.push_str(&format!(
            "<meta property=\"og:url\" content=\"{}\">\n",
            escape_html(&meta.canonical_url)
        ));
    }
    out.push_str(&format!("<style>\n{STYLES}</style>\n"));
    out
}

/// Renders the complete document.
///
/// The project view is derived here by running the filter pipeline over the
/// catalog with the state's query, so callers hand over source data and a
/// query rather than a pre-filtered list.
pub fn render_page(
    profile: &SiteProfile,
    catalog: &Catalog,
    state: &PageState,
    extras: &PageExtras,
) -> String {
    let started_at = Instant::now();
    let outcome = filter_projects(catalog.projects(), &state.query);

    let mut body = String::new();
    body.push_str(&sections::nav(&profile.meta));
    body.push_str(&sections::hero(
        &profile.hero,
        extras.animation.as_ref(),
        extras.visits,
    ));
    body.push_str("<main>\n");
    body.push_str(&sections::about(&profile.about));
    body.push_str(&sections::projects(&outcome, &state.query, catalog.len()));
    body.push_str(&sections::experience(&profile.experience));
    body.push_str(&sections::resumes(&extras.resumes));
    body.push_str(&sections::contact(&profile.contact));
    body.push_str(&sections::now(&profile.now));
    body.push_str("</main>\n");
    body.push_str(&sections::footer(&profile.footer));

    let body_tag = match state.theme.css_class() {
        "" => "<body>".to_string(),
        class => format!("<body class=\"{class}\">"),
    };
    let html = format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n{}</head>\n{}\n{}</body>\n</html>\n",
        head_html(&profile.meta),
        body_tag,
        body
    );

    info!(
        "event=render_page module=render status=ok duration_ms={} shown={} total={} bytes={}",
        started_at.elapsed().as_millis(),
        outcome.len(),
        catalog.len(),
        html.len()
    );
    html
}

#[cfg(test)]
mod tests {
    use super::{render_page, PageExtras, PageState, Theme};
    use crate::catalog::Catalog;

    #[test]
    fn rendering_is_deterministic() {
        let profile = crate::catalog::bundled_site_profile();
        let catalog = Catalog::bundled();
        let state = PageState::new();
        let extras = PageExtras::new();

        let first = render_page(profile, catalog, &state, &extras);
        let second = render_page(profile, catalog, &state, &extras);
        assert_eq!(first, second);
    }

    #[test]
    fn light_theme_opts_into_the_body_class() {
        let profile = crate::catalog::bundled_site_profile();
        let catalog = Catalog::bundled();
        let extras = PageExtras::new();

        let mut state = PageState::new();
        assert!(!render_page(profile, catalog, &state, &extras).contains("light-theme\""));

        state.theme = Theme::Light;
        assert!(render_page(profile, catalog, &state, &extras)
            .contains("<body class=\"light-theme\">"));
    }
}
