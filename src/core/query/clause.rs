//! Typed clause model for the backend filter DSL.
//!
//! Clauses are built as data and serialized to the wire string only at the
//! boundary, so malformed operator strings cannot be assembled by hand.
//! One rendered clause becomes one repeated `filter[]` query parameter.

/// Comparison operator of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equal,
    Contains,
    GreaterOrEqual,
    LessOrEqual,
}

impl FilterOperator {
    /// Operator → wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "==",
            FilterOperator::Contains => "=@",
            FilterOperator::GreaterOrEqual => ">=",
            FilterOperator::LessOrEqual => "<=",
        }
    }

    /// Wire string → operator
    pub fn from_str_op(s: &str) -> Option<Self> {
        match s {
            "==" => Some(FilterOperator::Equal),
            "=@" => Some(FilterOperator::Contains),
            ">=" => Some(FilterOperator::GreaterOrEqual),
            "<=" => Some(FilterOperator::LessOrEqual),
            _ => None,
        }
    }
}

/// How multiple values inside one predicate combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueJoin {
    /// `||`: any of the values matches
    Any,
    /// `&&`: all of the values match
    All,
}

impl ValueJoin {
    fn separator(&self) -> &'static str {
        match self {
            ValueJoin::Any => "||",
            ValueJoin::All => "&&",
        }
    }
}

/// One `field<op>values` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
    pub join: ValueJoin,
}

impl Predicate {
    pub fn equals(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Equal,
            values,
            join: ValueJoin::Any,
        }
    }

    pub fn equals_one(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::equals(field, vec![value.into()])
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Contains,
            values: vec![value.into()],
            join: ValueJoin::Any,
        }
    }

    pub fn at_least(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::GreaterOrEqual,
            values: vec![value.into()],
            join: ValueJoin::Any,
        }
    }

    pub fn at_most(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::LessOrEqual,
            values: vec![value.into()],
            join: ValueJoin::Any,
        }
    }

    pub fn with_join(mut self, join: ValueJoin) -> Self {
        self.join = join;
        self
    }

    /// Predicate → wire string, e.g. `class_name==1||2`
    pub fn to_query_str(&self) -> String {
        format!(
            "{}{}{}",
            self.field,
            self.operator.as_str(),
            self.values.join(self.join.separator())
        )
    }
}

/// One clause of the filter DSL. A `Grouped` clause joins its predicates
/// with `,` inside a single `filter[]` entry; the backend matches the
/// group as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Single(Predicate),
    Grouped(Vec<Predicate>),
}

impl Clause {
    /// Clause → wire string
    pub fn to_query_str(&self) -> String {
        match self {
            Clause::Single(p) => p.to_query_str(),
            Clause::Grouped(preds) => preds
                .iter()
                .map(Predicate::to_query_str)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Escape clause delimiters (`,` then `;`) in a raw free-text term before
/// it is interpolated into a clause.
///
/// Call exactly once per raw term: escaping an already-escaped string
/// double-escapes it. Never fails; the empty string comes back unchanged.
pub fn escape_term(term: &str) -> String {
    term.replace(',', "\\,").replace(';', "\\;")
}
