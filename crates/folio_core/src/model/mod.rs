//! Domain model for the portfolio page.
//!
//! # Responsibility
//! - Define the project catalog record and the fixed category set.
//! - Define the declarative site profile consumed by the renderer.
//!
//! # Invariants
//! - Model types are plain data with validation hooks; no I/O lives here.
//! - Source order of sequences is display order throughout.

pub mod project;
pub mod site;
