//! Typed filter model: one variant per filter kind instead of an untyped
//! bag of keys. A `FilterSet` keeps its insertion order; the clause builder
//! never sorts.

use crate::core::query::clause::FilterOperator;
use crate::models::selection::SelectionStatus;
use serde::{Deserialize, Serialize};

/// Sentinel value meaning "do not filter on this dimension".
pub const ALL: &str = "ALL";

/// How independent clauses combine: implicit AND, or each wrapped in
/// `or(...)` to signal OR to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Any,
}

impl FilterMode {
    pub fn as_param(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Any => "any",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(FilterMode::All),
            "any" => Some(FilterMode::Any),
            _ => None,
        }
    }
}

/// A selectable option as the admin UI hands it over; only `id` reaches
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FilterOption {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// One logical filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Single-choice filter; the ALL sentinel (or an empty value) disables it.
    Scalar { field: String, value: String },

    /// Multi-choice filter over option ids, ORed inside one clause.
    IdList {
        field: String,
        options: Vec<FilterOption>,
    },

    /// Filter carrying its own operator (media upload type). Values join
    /// with `&&` when `match_all`, `||` otherwise.
    WithOperator {
        field: String,
        operator: FilterOperator,
        values: Vec<String>,
        match_all: bool,
    },

    /// Speaker selection-status filter; composite values expand through a
    /// fixed lookup table.
    SelectionStatus { statuses: Vec<SelectionStatus> },

    /// Lower bound on a date field (epoch seconds).
    DateFrom { field: String, value: i64 },

    /// Upper bound on a date field (epoch seconds).
    DateTo { field: String, value: i64 },
}

/// Ordered set of filters plus the AND/OR combination mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub filters: Vec<Filter>,
    pub mode: FilterMode,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}
