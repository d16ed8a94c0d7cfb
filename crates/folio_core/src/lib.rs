//! Core domain logic for Folio, a single-file portfolio page generator.
//! This crate is the single source of truth for catalog, filter and render
//! invariants; the CLI is a thin shell around it.

pub mod assets;
pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;
pub mod remote;
pub mod render;

pub use assets::{embed_resume, embed_resumes, ResumeSlot};
pub use catalog::{
    bundled_site_profile, load_site_profile, parse_site_profile, Catalog, CatalogError,
    CatalogResult, ProfileError, ProfileResult,
};
pub use filter::pipeline::{filter_projects, FilterOutcome, FilterQuery};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Category, CategoryLabel, ProjectRecord, ProjectValidationError};
pub use model::site::{SiteProfile, SiteValidationError};
pub use remote::{fetch_animation, HttpVisitSource, VisitCounter, VisitSource};
pub use render::{render_page, PageExtras, PageState, Theme};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
