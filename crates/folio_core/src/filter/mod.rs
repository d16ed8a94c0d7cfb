//! Project filtering entry points.
//!
//! # Responsibility
//! - Expose the search + category filter applied to the loaded catalog.
//! - Keep result shaping (including the no-matches state) inside core.

pub mod pipeline;
