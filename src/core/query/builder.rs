//! Folds a `FilterSet` plus an optional free-text term into an ordered list
//! of typed clauses.
//!
//! Filters are evaluated independently, in insertion order; the term is
//! appended last. Malformed shapes fail loudly: a silently wrong clause
//! fetches the wrong data with no visible error.

use crate::core::query::clause::{Clause, Predicate, ValueJoin, escape_term};
use crate::errors::{AppError, AppResult};
use crate::models::filter::{ALL, Filter, FilterSet};
use crate::models::selection::SelectionStatus;

pub fn build_clauses(
    set: &FilterSet,
    term: Option<&str>,
    searchable_fields: &[&str],
) -> AppResult<Vec<Clause>> {
    let mut clauses: Vec<Clause> = Vec::new();

    for filter in &set.filters {
        match filter {
            Filter::Scalar { field, value } => {
                check_field(field)?;
                if value.is_empty() || value == ALL {
                    continue;
                }
                clauses.push(Clause::Single(Predicate::equals_one(
                    field.clone(),
                    value.as_str(),
                )));
            }

            Filter::IdList { field, options } => {
                check_field(field)?;
                if options.is_empty() {
                    continue;
                }
                let ids: Vec<String> = options.iter().map(|o| o.id.clone()).collect();
                if ids.iter().any(String::is_empty) {
                    return Err(AppError::InvalidFilter(format!(
                        "option without id in filter '{}'",
                        field
                    )));
                }
                clauses.push(Clause::Single(Predicate::equals(field.clone(), ids)));
            }

            Filter::WithOperator {
                field,
                operator,
                values,
                match_all,
            } => {
                check_field(field)?;
                if values.is_empty() {
                    continue;
                }
                let join = if *match_all {
                    ValueJoin::All
                } else {
                    ValueJoin::Any
                };
                clauses.push(Clause::Single(Predicate {
                    field: field.clone(),
                    operator: *operator,
                    values: values.clone(),
                    join,
                }));
            }

            Filter::SelectionStatus { statuses } => {
                if statuses.is_empty() {
                    continue;
                }
                clauses.extend(selection_status_clauses(statuses));
            }

            Filter::DateFrom { field, value } => {
                check_field(field)?;
                clauses.push(Clause::Single(Predicate::at_least(
                    field.clone(),
                    value.to_string(),
                )));
            }

            Filter::DateTo { field, value } => {
                check_field(field)?;
                clauses.push(Clause::Single(Predicate::at_most(
                    field.clone(),
                    value.to_string(),
                )));
            }
        }
    }

    if let Some(raw) = term {
        let raw = raw.trim();
        if !raw.is_empty() {
            if searchable_fields.is_empty() {
                return Err(AppError::InvalidFilter(
                    "search term given but the entity has no searchable fields".to_string(),
                ));
            }
            // Escaped exactly once, here; callers hand over the raw term.
            let escaped = escape_term(raw);
            let preds: Vec<Predicate> = searchable_fields
                .iter()
                .map(|f| Predicate::contains(*f, escaped.clone()))
                .collect();
            clauses.push(Clause::Grouped(preds));
        }
    }

    Ok(clauses)
}

/// Expand a selection-status filter.
///
/// Exactly one composite value goes through the fixed lookup table and
/// yields three separate boolean clauses. Everything else degrades to one
/// comma-grouped clause of `has_<value>_presentations==true` predicates in
/// input order.
fn selection_status_clauses(statuses: &[SelectionStatus]) -> Vec<Clause> {
    if let [single] = statuses
        && let Some(flags) = single.composite_flags()
    {
        return flags
            .iter()
            .map(|(field, value)| Clause::Single(Predicate::equals_one(*field, value.to_string())))
            .collect();
    }

    let preds: Vec<Predicate> = statuses
        .iter()
        .map(|s| Predicate::equals_one(s.flag_field(), "true"))
        .collect();
    vec![Clause::Grouped(preds)]
}

fn check_field(field: &str) -> AppResult<()> {
    if field.trim().is_empty() {
        return Err(AppError::InvalidFilter(
            "filter with empty field name".to_string(),
        ));
    }
    Ok(())
}
