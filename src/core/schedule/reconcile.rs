//! Start/end/duration reconciliation.
//!
//! Pure function: the edited field is authoritative, at most one of the
//! other two is recomputed. Duration is clamped to >= 0 only when it is
//! the derived field; a directly edited duration is stored verbatim.

use crate::models::schedule::{DateEdit, DurationValue, EventWindow, ScheduleEdit};

pub fn apply_edit(current: &EventWindow, edit: &ScheduleEdit) -> EventWindow {
    let mut next = current.clone();

    match edit {
        ScheduleEdit::StartDate(DateEdit::Clear) => {
            // "no date": reset the edited field only, duration untouched
            next.start_date = None;
        }

        ScheduleEdit::StartDate(DateEdit::Set(v)) => {
            next.start_date = Some(*v);
            if let Some(end) = current.end_date {
                next.duration = Some(DurationValue::Seconds((end - v).max(0)));
            } else if let Some(secs) = numeric_duration(current) {
                next.end_date = Some(v + secs);
            }
        }

        ScheduleEdit::EndDate(DateEdit::Clear) => {
            next.end_date = None;
        }

        ScheduleEdit::EndDate(DateEdit::Set(v)) => {
            next.end_date = Some(*v);
            if let Some(start) = current.start_date {
                next.duration = Some(DurationValue::Seconds((v - start).max(0)));
            } else if let Some(secs) = numeric_duration(current) {
                next.start_date = Some(v - secs);
            }
        }

        ScheduleEdit::Duration(raw) => match raw.trim().parse::<i64>() {
            Ok(minutes) => {
                // UI input is whole minutes; stored as seconds, verbatim
                // (a negative value is a validation concern elsewhere)
                let secs = minutes * 60;
                next.duration = Some(DurationValue::Seconds(secs));
                if let Some(start) = current.start_date {
                    next.end_date = Some(start + secs);
                } else if let Some(end) = current.end_date {
                    next.start_date = Some(end - secs);
                }
            }
            Err(_) => {
                // pass the unparseable input through; start/end stay intact
                next.duration = Some(DurationValue::Raw(raw.clone()));
            }
        },
    }

    next
}

fn numeric_duration(window: &EventWindow) -> Option<i64> {
    window.duration.as_ref().and_then(DurationValue::seconds)
}
