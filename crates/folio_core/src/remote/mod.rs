//! Remote page collaborators.
//!
//! # Responsibility
//! - Fetch the hero animation and the visit count from their endpoints.
//!
//! # Invariants
//! - Collaborators are best-effort: any failure degrades the page content
//!   and never fails the render.

mod animation;
mod visits;

pub use animation::{fetch_animation, ANIMATION_TIMEOUT};
pub use visits::{HttpVisitSource, VisitCounter, VisitSource, VISIT_MEMO_WINDOW};
