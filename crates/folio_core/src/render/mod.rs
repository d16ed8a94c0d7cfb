//! Static page rendering.
//!
//! # Responsibility
//! - Turn profile content plus a filtered project view into one
//!   self-contained HTML document with inlined styling.
//!
//! # See also
//! - `filter::pipeline` for how the project view is derived.

mod markdown;
mod page;
mod sections;

pub use page::{render_page, PageExtras, PageState, Theme};
