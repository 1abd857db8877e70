//! Filter-query construction: typed clauses, the clause builder, and the
//! OR-wrapping post-pass.

pub mod builder;
pub mod clause;

pub use builder::build_clauses;
pub use clause::{Clause, FilterOperator, Predicate, ValueJoin, escape_term};

use crate::errors::AppResult;
use crate::models::filter::{FilterMode, FilterSet};

/// Wrap every rendered clause in `or(...)` when the mode is OR; AND mode
/// returns the array unchanged, same order. A post-processing pass over
/// the full array, not per-filter.
pub fn wrap_or(rendered: Vec<String>, mode: FilterMode) -> Vec<String> {
    match mode {
        FilterMode::Any => rendered.into_iter().map(|c| format!("or({})", c)).collect(),
        FilterMode::All => rendered,
    }
}

/// Build the final ordered list of `filter[]` values: typed clauses,
/// serialized at the boundary, OR-wrapped per the set's mode.
pub fn build_query(
    set: &FilterSet,
    term: Option<&str>,
    searchable_fields: &[&str],
) -> AppResult<Vec<String>> {
    let clauses = build_clauses(set, term, searchable_fields)?;
    let rendered = clauses.iter().map(Clause::to_query_str).collect();
    Ok(wrap_or(rendered, set.mode))
}
