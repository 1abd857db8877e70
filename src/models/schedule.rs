//! Schedulable record fields: start, end and duration are mutually
//! derivable (`duration = end_date - start_date`, seconds). At most one of
//! the three drives a single edit; the reconciler derives the rest.

use serde::{Deserialize, Serialize};

/// Duration as stored on a record. Unparseable user input is carried
/// verbatim so the form can surface it instead of corrupting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(i64),
    Raw(String),
}

impl DurationValue {
    pub fn seconds(&self) -> Option<i64> {
        match self {
            DurationValue::Seconds(s) => Some(*s),
            DurationValue::Raw(_) => None,
        }
    }
}

/// The temporal slice of an editable record: epoch seconds for the dates,
/// seconds for the duration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationValue>,
}

impl EventWindow {
    pub fn new(start_date: Option<i64>, end_date: Option<i64>, duration: Option<i64>) -> Self {
        Self {
            start_date,
            end_date,
            duration: duration.map(DurationValue::Seconds),
        }
    }
}

/// A date-field edit: a concrete value, or the "no date" clear input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEdit {
    Set(i64),
    Clear,
}

/// One field-level edit event. Duration edits carry the raw UI input
/// (whole minutes) so non-numeric text can pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleEdit {
    StartDate(DateEdit),
    EndDate(DateEdit),
    Duration(String),
}
