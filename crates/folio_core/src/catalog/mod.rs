//! Static source loading for the page.
//!
//! # Responsibility
//! - Load and validate the project catalog and the site profile from their
//!   JSON sources (or the bundled defaults).
//! - Keep source order intact; it is the canonical display order.
//!
//! # Invariants
//! - A malformed source fails the whole load. A partial catalog is worse
//!   than a visible failure, so no entry is ever silently dropped.
//! - Loaded data is immutable; downstream layers only derive views from it.

mod profile;
mod projects;

pub use profile::{
    bundled_site_profile, load_site_profile, parse_site_profile, ProfileError, ProfileResult,
};
pub use projects::{Catalog, CatalogError, CatalogResult};
