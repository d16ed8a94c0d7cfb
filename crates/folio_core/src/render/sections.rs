//! Section renderers for the page body.
//!
//! # Responsibility
//! - Emit each page section (nav, hero, about, projects, experience,
//!   resumes, contact, now, footer) as an HTML fragment.
//!
//! # Invariants
//! - Record order is presentation order: cards, badges and bullets are
//!   emitted exactly as the source lists them.
//! - Optional content (tagline, buttons, whole sections) is omitted, never
//!   rendered blank.

use super::markdown::{block_html, escape_html, inline_html};
use crate::assets::ResumeSlot;
use crate::filter::pipeline::{FilterOutcome, FilterQuery};
use crate::model::project::{Category, ProjectRecord};
use crate::model::site::{
    AboutBlock, ContactBlock, ExperienceBlock, HeroBlock, LinkRef, NowBlock, PageMeta,
};

/// Shown in place of the card grid when the filter pipeline returns no rows.
pub(crate) const NO_MATCHES_MESSAGE: &str =
    "No projects match your filters — clear filters to see all.";

fn link_buttons(links: &[LinkRef]) -> String {
    let mut out = String::new();
    for link in links {
        out.push_str(&format!(
            "<a class=\"link-btn\" href=\"{}\">{}</a>",
            escape_html(&link.href),
            escape_html(&link.label)
        ));
    }
    out
}

fn bullet_list(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("<ul class=\"{class}\">\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", inline_html(item)));
    }
    out.push_str("</ul>\n");
    out
}

pub(crate) fn nav(meta: &PageMeta) -> String {
    format!(
        "<nav><span class=\"brand\">{}</span><div class=\"nav-links\">\
         <a href=\"#about\">About</a>\
         <a href=\"#projects\">Projects</a>\
         <a href=\"#experience\">Experience</a>\
         <a href=\"#resumes\">Resumes</a>\
         <a href=\"#contact\">Contact</a>\
         <a href=\"#now\">Now</a>\
         </div></nav>\n",
        escape_html(&meta.title)
    )
}

pub(crate) fn hero(
    hero: &HeroBlock,
    animation: Option<&serde_json::Value>,
    visits: Option<u64>,
) -> String {
    let mut out = String::from("<header class=\"hero\" id=\"top\">\n<div class=\"hero-copy\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", inline_html(&hero.headline)));
    if !hero.tagline.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"tagline\">{}</p>\n",
            inline_html(&hero.tagline)
        ));
    }
    if !hero.links.is_empty() {
        out.push_str(&format!(
            "<div class=\"hero-links\">{}</div>\n",
            link_buttons(&hero.links)
        ));
    }
    if !hero.announcement.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"announcement\">{}</p>\n",
            inline_html(&hero.announcement)
        ));
    }
    let visits_text = match visits {
        Some(count) => count.to_string(),
        None => "—".to_string(),
    };
    out.push_str(&format!("<p class=\"visits\">👀 Visits: {visits_text}</p>\n"));
    out.push_str("</div>\n");

    if let Some(animation) = animation {
        // `</` must not appear verbatim inside an inline script element.
        let payload = serde_json::to_string(animation)
            .unwrap_or_default()
            .replace("</", "<\\/");
        if !payload.is_empty() {
            out.push_str("<div class=\"hero-art\" id=\"hero-art\"></div>\n");
            out.push_str(&format!(
                "<script id=\"hero-animation\" type=\"application/json\">{payload}</script>\n"
            ));
            out.push_str(
                "<script src=\"https://unpkg.com/lottie-web@5.12.2/build/player/lottie.min.js\"></script>\n\
                 <script>lottie.loadAnimation({container:document.getElementById(\"hero-art\"),\
                 renderer:\"svg\",loop:true,autoplay:true,\
                 animationData:JSON.parse(document.getElementById(\"hero-animation\").textContent)});</script>\n",
            );
        }
    }
    out.push_str("</header>\n");
    out
}

pub(crate) fn about(about: &AboutBlock) -> String {
    if about.body.trim().is_empty() && about.facts.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section id=\"about\">\n<h2>About</h2>\n");
    out.push_str(&block_html(&about.body));
    out.push_str(&bullet_list(&about.facts, "facts"));
    out.push_str("</section>\n");
    out
}

/// Renders the search box and category set as inert controls that mirror
/// the query the page was produced with.
fn filter_summary(query: &FilterQuery, shown: usize, total: usize) -> String {
    let mut out = String::from("<div class=\"filter-controls\">\n");
    out.push_str(&format!(
        "<input class=\"search-box\" type=\"search\" value=\"{}\" \
         placeholder=\"Search title or stack\" readonly>\n",
        escape_html(query.search.trim())
    ));
    out.push_str("<div class=\"category-set\">");
    for category in Category::ALL {
        let class = if query.categories.contains(&category) {
            "badge badge-active"
        } else {
            "badge"
        };
        out.push_str(&format!("<span class=\"{class}\">{category}</span>"));
    }
    out.push_str("</div>\n</div>\n");
    if query.is_unconstrained() {
        out.push_str(&format!(
            "<p class=\"section-note\">Showing all {total} projects.</p>\n"
        ));
    } else {
        out.push_str(&format!(
            "<p class=\"section-note\">Showing {shown} of {total} projects.</p>\n"
        ));
    }
    out
}

fn project_card(record: &ProjectRecord) -> String {
    let mut out = String::from("<article class=\"card\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", escape_html(&record.title)));

    let meta = if record.year.is_empty() {
        escape_html(record.category.as_str())
    } else {
        format!(
            "{} • {}",
            escape_html(record.category.as_str()),
            escape_html(record.year.as_str())
        )
    };
    out.push_str(&format!("<p class=\"card-meta\">{meta}</p>\n"));

    if !record.stack.is_empty() {
        out.push_str("<div class=\"badges\">");
        for tag in &record.stack {
            out.push_str(&format!("<span class=\"badge\">{}</span>", escape_html(tag)));
        }
        out.push_str("</div>\n");
    }

    out.push_str(&bullet_list(&record.highlights, "card-highlights"));

    let mut buttons = String::new();
    if let Some(github) = &record.github {
        buttons.push_str(&format!(
            "<a class=\"link-btn\" href=\"{}\">Source</a>",
            escape_html(github)
        ));
    }
    if let Some(link) = &record.link {
        buttons.push_str(&format!(
            "<a class=\"link-btn\" href=\"{}\">Live</a>",
            escape_html(link)
        ));
    }
    if !buttons.is_empty() {
        out.push_str(&format!("<div class=\"card-links\">{buttons}</div>\n"));
    }
    out.push_str("</article>\n");
    out
}

pub(crate) fn projects(outcome: &FilterOutcome, query: &FilterQuery, total: usize) -> String {
    let mut out = String::from("<section id=\"projects\">\n<h2>Projects</h2>\n");
    out.push_str(&filter_summary(query, outcome.len(), total));
    match outcome {
        FilterOutcome::NoMatches => {
            out.push_str(&format!("<p class=\"empty-note\">{NO_MATCHES_MESSAGE}</p>\n"));
        }
        FilterOutcome::Matches(records) => {
            out.push_str("<div class=\"cards\">\n");
            for record in records {
                out.push_str(&project_card(record));
            }
            out.push_str("</div>\n");
        }
    }
    out.push_str("</section>\n");
    out
}

pub(crate) fn experience(experience: &ExperienceBlock) -> String {
    if experience.entries.is_empty() && experience.achievements.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for entry in &experience.entries {
        out.push_str("<div class=\"entry\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&entry.role)));
        let meta = [entry.organization.as_str(), entry.period.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| escape_html(part))
            .collect::<Vec<_>>()
            .join(" · ");
        if !meta.is_empty() {
            out.push_str(&format!("<p class=\"entry-meta\">{meta}</p>\n"));
        }
        out.push_str(&bullet_list(&entry.bullets, "entry-bullets"));
        out.push_str("</div>\n");
    }
    if !experience.achievements.is_empty() {
        out.push_str("<h3>Achievements</h3>\n");
        out.push_str(&bullet_list(&experience.achievements, "achievements"));
    }
    out.push_str("</section>\n");
    out
}

pub(crate) fn resumes(slots: &[ResumeSlot]) -> String {
    if slots.is_empty() {
        return String::new();
    }
    let mut out =
        String::from("<section id=\"resumes\">\n<h2>Resumes</h2>\n<div class=\"resume-grid\">\n");
    for slot in slots {
        out.push_str("<div class=\"resume-slot\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&slot.label)));
        match &slot.data_uri {
            Some(uri) => {
                let file_name = escape_html(&slot.file_name);
                out.push_str(&format!(
                    "<iframe class=\"pdf-frame\" title=\"{}\" src=\"{uri}\"></iframe>\n",
                    escape_html(&slot.label)
                ));
                out.push_str(&format!(
                    "<a class=\"link-btn\" href=\"{uri}\" download=\"{file_name}\">Download {file_name}</a>\n"
                ));
            }
            None => out.push_str(&format!(
                "<p class=\"empty-note\">{} is not available right now.</p>\n",
                escape_html(&slot.file_name)
            )),
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
    out
}

pub(crate) fn contact(contact: &ContactBlock) -> String {
    if contact.lead.trim().is_empty() && contact.links.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section id=\"contact\">\n<h2>Contact</h2>\n");
    if !contact.lead.trim().is_empty() {
        out.push_str(&format!("<p>{}</p>\n", inline_html(&contact.lead)));
    }
    if !contact.links.is_empty() {
        out.push_str(&format!(
            "<div class=\"hero-links\">{}</div>\n",
            link_buttons(&contact.links)
        ));
    }
    out.push_str("</section>\n");
    out
}

pub(crate) fn now(now: &NowBlock) -> String {
    if now.focus.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section id=\"now\">\n<h2>Now</h2>\n");
    out.push_str(&bullet_list(&now.focus, "now-focus"));
    if !now.updated.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"section-note\">{}</p>\n",
            escape_html(&now.updated)
        ));
    }
    out.push_str("</section>\n");
    out
}

pub(crate) fn footer(footer: &str) -> String {
    if footer.trim().is_empty() {
        return String::new();
    }
    format!(
        "<footer class=\"footer\">\n<p>{}</p>\n</footer>\n",
        inline_html(footer)
    )
}

#[cfg(test)]
mod tests {
    use super::{filter_summary, footer, hero, project_card, projects, NO_MATCHES_MESSAGE};
    use crate::filter::pipeline::{FilterOutcome, FilterQuery};
    use crate::model::project::{Category, ProjectRecord, YearLabel};
    use crate::model::site::HeroBlock;

    fn sample_record() -> ProjectRecord {
        let mut record = ProjectRecord::new("EV Dashboard", Category::EvSystems);
        record.year = YearLabel::from("2024");
        record.stack = vec!["React".to_string(), "MQTT".to_string()];
        record.github = Some("https://github.com/asha-iyer/ev-dashboard".to_string());
        record
    }

    #[test]
    fn card_keeps_badge_order_and_skips_absent_live_button() {
        let html = project_card(&sample_record());
        let react = html.find("React").unwrap();
        let mqtt = html.find("MQTT").unwrap();
        assert!(react < mqtt);
        assert!(html.contains("EV Systems • 2024"));
        assert!(html.contains(">Source</a>"));
        assert!(!html.contains(">Live</a>"));
    }

    #[test]
    fn no_matches_renders_the_clear_filters_line() {
        let query = FilterQuery {
            search: "zzz".to_string(),
            ..FilterQuery::new()
        };
        let html = projects(&FilterOutcome::NoMatches, &query, 6);
        assert!(html.contains(NO_MATCHES_MESSAGE));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn filter_controls_mirror_search_text_and_mark_active_categories() {
        let mut query = FilterQuery::new();
        query.search = "  mqtt ".to_string();
        query.categories.insert(Category::EvSystems);
        let html = filter_summary(&query, 1, 6);
        assert!(html.contains("value=\"mqtt\""));
        assert!(html.contains("<span class=\"badge badge-active\">EV Systems</span>"));
        assert!(html.contains("<span class=\"badge\">Web / AI</span>"));
        assert!(html.contains("Showing 1 of 6 projects."));
    }

    #[test]
    fn hero_escapes_injected_markup() {
        let block = HeroBlock {
            headline: "Hi <script>".to_string(),
            ..HeroBlock::default()
        };
        let html = hero(&block, None, None);
        assert!(html.contains("Hi &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn hero_shows_placeholder_without_visit_count() {
        let block = HeroBlock::default();
        assert!(hero(&block, None, None).contains("👀 Visits: —"));
        assert!(hero(&block, None, Some(42)).contains("👀 Visits: 42"));
    }

    #[test]
    fn footer_is_omitted_when_blank() {
        assert!(footer("  ").is_empty());
        assert!(footer("© 2026").contains("© 2026"));
    }
}
