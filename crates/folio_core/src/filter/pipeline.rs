//! Search + category filter over the project catalog.
//!
//! # Responsibility
//! - Normalize raw user filter input.
//! - Apply the search and category predicates as one conjunction.
//! - Distinguish an empty result from an error: no matches is a first-class
//!   outcome the page renders guidance for.
//!
//! # Invariants
//! - The result is an order-preserving subsequence of the input; filtering
//!   never reorders.
//! - Filtering is deterministic and idempotent for fixed inputs.
//! - This layer has no failure modes; malformed catalogs are rejected by
//!   the loader before they reach it.

use crate::model::project::{Category, ProjectRecord};
use std::collections::BTreeSet;

/// User filter state for one render.
///
/// `search` is kept raw (mixed case, padding and all); normalization is
/// this module's job, not the input surface's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Free-text search over title and stack tags.
    pub search: String,
    /// Category selection; empty means no category constraint.
    pub categories: BTreeSet<Category>,
}

impl FilterQuery {
    /// Creates an unconstrained query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search text after trim + lowercase; empty means no search constraint.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Whether this query constrains nothing (full catalog passes).
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_empty() && self.categories.is_empty()
    }
}

/// Filter result: either the ordered matching records or the distinguished
/// no-matches state.
///
/// `NoMatches` is not an error; the Projects section renders a guidance
/// line for it instead of an empty region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Non-empty ordered subsequence of the input catalog.
    Matches(Vec<ProjectRecord>),
    /// Nothing satisfied the query (or the catalog was empty).
    NoMatches,
}

impl FilterOutcome {
    /// Matching records in catalog order; empty for [`FilterOutcome::NoMatches`].
    pub fn records(&self) -> &[ProjectRecord] {
        match self {
            Self::Matches(records) => records,
            Self::NoMatches => &[],
        }
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether this is the distinguished empty-result state.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    pub fn is_empty(&self) -> bool {
        self.is_no_matches()
    }
}

/// Applies the filter query to an ordered record sequence.
///
/// # Contract
/// - A record is included iff it satisfies the search predicate AND the
///   category predicate.
/// - Search predicate: empty normalized search passes everything; otherwise
///   the lowercased `title` + stack haystack must contain the normalized
///   search as a plain substring (no tokenization, word order as typed).
/// - Category predicate: empty selection passes everything; otherwise the
///   record's label must resolve to a selected [`Category`]. Unlisted
///   labels never pass a non-empty selection.
/// - Output preserves input order; an empty result is reported as
///   [`FilterOutcome::NoMatches`].
pub fn filter_projects(records: &[ProjectRecord], query: &FilterQuery) -> FilterOutcome {
    let search = query.normalized_search();

    let matches: Vec<ProjectRecord> = records
        .iter()
        .filter(|record| satisfies(record, &search, &query.categories))
        .cloned()
        .collect();

    if matches.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches(matches)
    }
}

fn satisfies(record: &ProjectRecord, search: &str, categories: &BTreeSet<Category>) -> bool {
    if !search.is_empty() && !search_haystack(record).contains(search) {
        return false;
    }

    if !categories.is_empty() {
        return match record.category.category() {
            Some(known) => categories.contains(&known),
            None => false,
        };
    }

    true
}

/// Lowercased searchable text for one record: the title and every stack tag
/// joined with single spaces, so a query can span the title/tag boundary
/// the way the rendered card reads.
fn search_haystack(record: &ProjectRecord) -> String {
    let mut haystack = String::with_capacity(
        record.title.len() + record.stack.iter().map(|tag| tag.len() + 1).sum::<usize>(),
    );
    haystack.push_str(&record.title);
    for tag in &record.stack {
        haystack.push(' ');
        haystack.push_str(tag);
    }
    haystack.to_lowercase()
}
